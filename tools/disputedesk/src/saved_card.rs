/// Compact replacement for a section whose accounts all carry a saved
/// dispute. The card's expand interaction is the section's `expand()`
/// request; it is not stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedCardProps {
    pub section_name: String,
    pub success_message: String,
    pub summary_text: String,
}

pub fn saved_summary_text(count: usize, bureaus: &[String]) -> String {
    format!(
        "You've saved disputes for {count} negative account(s) across {}.",
        join_bureaus(bureaus)
    )
}

fn join_bureaus(bureaus: &[String]) -> String {
    match bureaus {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [head @ .., last] => format!("{}, and {last}", head.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::saved_summary_text;

    fn bureaus(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn summary_sentence_matches_product_copy() {
        let text = saved_summary_text(3, &bureaus(&["TransUnion", "Equifax", "Experian"]));
        assert_eq!(
            text,
            "You've saved disputes for 3 negative account(s) across TransUnion, Equifax, and Experian."
        );
    }

    #[test]
    fn bureau_joining_handles_short_lists() {
        assert!(saved_summary_text(1, &bureaus(&["Equifax"])).contains("across Equifax."));
        assert!(saved_summary_text(2, &bureaus(&["Equifax", "Experian"]))
            .contains("across Equifax and Experian."));
    }
}
