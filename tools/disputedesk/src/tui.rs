use crate::app::DeskView;
use crate::hotkeys::review_controls_legend;
use crate::negative_section::{NegativeHeaderProps, NegativeSectionView};
use crate::positive_section::PositiveHeaderProps;
use crate::row::AccountRowProps;
use ratatui::backend::TestBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::{Frame, Terminal};

/// Render one frame of the review screen to a plain string. Drawing goes
/// through the `Terminal` seam, so interactive and one-shot modes share
/// this exact output.
pub fn render_review(view: &DeskView<'_>, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal
        .draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(6),
                    Constraint::Min(6),
                    Constraint::Length(1),
                ])
                .split(frame.size());

            render_negative(frame, chunks[0], view);
            render_positive(frame, chunks[1], view);
            frame.render_widget(Paragraph::new(review_controls_legend()), chunks[2]);
        })
        .expect("draw");

    let mut out = String::new();
    let buffer = terminal.backend().buffer().clone();
    for y in 0..height {
        for x in 0..width {
            out.push_str(buffer.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}

fn render_negative(frame: &mut Frame, area: Rect, view: &DeskView<'_>) {
    match &view.negative {
        NegativeSectionView::SavedCard(card) => {
            let lines = vec![
                Line::from(Span::styled(
                    card.success_message.clone(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(card.summary_text.clone()),
            ];
            frame.render_widget(
                Paragraph::new(lines).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(card.section_name.clone()),
                ),
                area,
            );
        }
        NegativeSectionView::Panel(panel) => {
            let mut items = vec![ListItem::new(negative_header_line(&panel.header))];
            if let Some(rows) = &panel.rows {
                for (offset, row) in rows.iter().enumerate() {
                    items.push(ListItem::new(row_lines(row, view.cursor == offset)));
                }
            }
            frame.render_widget(
                List::new(items).block(Block::default().borders(Borders::ALL).title(format!(
                    "Negative Accounts ({})",
                    panel.header.account_count
                ))),
                area,
            );
        }
    }
}

fn render_positive(frame: &mut Frame, area: Rect, view: &DeskView<'_>) {
    let panel = &view.positive;
    let mut items = vec![ListItem::new(positive_header_line(&panel.header))];
    if let Some(controls) = panel.controls {
        items.push(ListItem::new(Line::from(format!(
            "[{}]  [{}]",
            controls.expand_all_label, controls.details_label
        ))));
    }
    if let Some(rows) = &panel.rows {
        let base = view.negative_rows().len();
        for (offset, row) in rows.iter().enumerate() {
            items.push(ListItem::new(row_lines(row, view.cursor == base + offset)));
        }
    }
    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title(format!(
            "Positive & Closed Accounts ({})",
            panel.header.account_count
        ))),
        area,
    );
}

fn negative_header_line(header: &NegativeHeaderProps) -> Line<'static> {
    let chevron = if header.collapsed { "▼" } else { "▲" };
    Line::from(vec![
        Span::styled(
            header.subtitle.clone(),
            Style::default().fg(Color::Red),
        ),
        Span::raw(format!("  {} {chevron}", header.count_caption)),
    ])
}

fn positive_header_line(header: &PositiveHeaderProps) -> Line<'static> {
    let chevron = if header.expanded { "▲" } else { "▼" };
    let subtitle_color = if header.account_count > 0 {
        Color::Green
    } else {
        Color::Gray
    };
    let caption_color = if header.has_saved_disputes {
        Color::Green
    } else {
        Color::Gray
    };
    Line::from(vec![
        Span::styled(header.subtitle.clone(), Style::default().fg(subtitle_color)),
        Span::styled(
            format!("  {}", header.count_caption),
            Style::default().fg(caption_color),
        ),
        Span::raw(format!(" {chevron}")),
    ])
}

fn row_lines(row: &AccountRowProps<'_>, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "> " } else { "  " };
    let label = row
        .record
        .display_label()
        .map(str::to_string)
        .or_else(|| row.account_id.map(str::to_string))
        .unwrap_or_else(|| row.row_key.clone());

    let mut spans = vec![
        Span::raw(marker.to_string()),
        Span::styled(label, Style::default().fg(Color::Cyan)),
    ];
    if let Some(status) = &row.record.account_status {
        spans.push(Span::raw(format!("  status={status}")));
    }
    if row.closed {
        spans.push(Span::raw("  [closed]"));
    }
    if row.saved {
        spans.push(Span::styled(
            "  [dispute saved]",
            Style::default().fg(Color::Green),
        ));
    }
    if row.ai_scan_completed && !row.violations.is_empty() {
        spans.push(Span::styled(
            format!("  {} violation(s)", row.violations.len()),
            Style::default().fg(Color::Yellow),
        ));
    }

    let mut lines = vec![Line::from(spans)];
    if row.expand_all {
        for violation in row.violations {
            lines.push(Line::from(format!("      - {violation}")));
        }
    }
    if row.show_all_details {
        let closed_date = row.record.account_closed_date.as_deref().unwrap_or("-");
        let rating = row
            .record
            .current_rating
            .as_ref()
            .and_then(|rating| rating.code.as_deref())
            .unwrap_or("-");
        lines.push(Line::from(format!(
            "      closed_date={closed_date} rating={rating}"
        )));
    }
    lines
}
