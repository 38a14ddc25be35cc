#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyBinding {
    pub key: char,
    pub action: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    Quit,
    ToggleNegative,
    TogglePositive,
    ExpandAll,
    ShowDetails,
    CursorDown,
    CursorUp,
    SaveDispute,
    ResetDispute,
}

pub const REVIEW_BINDINGS: [HotkeyBinding; 9] = [
    HotkeyBinding {
        key: 'q',
        action: "quit",
    },
    HotkeyBinding {
        key: 'n',
        action: "negative accounts",
    },
    HotkeyBinding {
        key: 'p',
        action: "positive accounts",
    },
    HotkeyBinding {
        key: 'e',
        action: "expand all",
    },
    HotkeyBinding {
        key: 'd',
        action: "show details",
    },
    HotkeyBinding {
        key: 'j',
        action: "next row",
    },
    HotkeyBinding {
        key: 'k',
        action: "previous row",
    },
    HotkeyBinding {
        key: 's',
        action: "save dispute",
    },
    HotkeyBinding {
        key: 'u',
        action: "reset dispute",
    },
];

pub fn review_controls_legend() -> String {
    format_bindings("Keys: ", &REVIEW_BINDINGS)
}

pub fn action_for_key(key: char) -> Option<HotkeyAction> {
    match key {
        'q' => Some(HotkeyAction::Quit),
        'n' => Some(HotkeyAction::ToggleNegative),
        'p' => Some(HotkeyAction::TogglePositive),
        'e' => Some(HotkeyAction::ExpandAll),
        'd' => Some(HotkeyAction::ShowDetails),
        'j' => Some(HotkeyAction::CursorDown),
        'k' => Some(HotkeyAction::CursorUp),
        's' => Some(HotkeyAction::SaveDispute),
        'u' => Some(HotkeyAction::ResetDispute),
        _ => None,
    }
}

fn format_bindings(prefix: &str, bindings: &[HotkeyBinding]) -> String {
    let parts = bindings
        .iter()
        .map(|binding| format!("{} {}", binding.key, binding.action))
        .collect::<Vec<_>>();
    format!("{prefix}{}", parts.join("  "))
}

#[cfg(test)]
mod tests {
    use super::{action_for_key, review_controls_legend, HotkeyAction, REVIEW_BINDINGS};

    #[test]
    fn every_binding_resolves_to_an_action() {
        for binding in REVIEW_BINDINGS {
            assert!(
                action_for_key(binding.key).is_some(),
                "key {:?} has no action",
                binding.key
            );
        }
        assert_eq!(action_for_key('x'), None);
    }

    #[test]
    fn legend_lists_the_dispute_keys() {
        let legend = review_controls_legend();
        assert!(legend.starts_with("Keys: "));
        assert!(legend.contains("s save dispute"));
        assert!(legend.contains("u reset dispute"));
        assert_eq!(action_for_key('s'), Some(HotkeyAction::SaveDispute));
    }
}
