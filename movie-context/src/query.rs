use tracing::debug;

/// Lead-in phrases checked in priority order. When a message matches more
/// than one, the phrase earliest in this list wins, regardless of where each
/// occurs in the text.
pub const DEFAULT_LEAD_INS: [&str; 11] = [
    "who acted in",
    "who starred in",
    "who stars in",
    "cast of",
    "who directed",
    "director of",
    "genre of",
    "what is the genre of",
    "story of",
    "plot of",
    "about",
];

/// Extracts a title search phrase from a free-form chat message.
///
/// The extraction never fails: when no heuristic applies, the trimmed,
/// punctuation-stripped message is returned unchanged.
pub struct QueryExtractor {
    lead_ins: Vec<String>,
}

impl QueryExtractor {
    pub fn new() -> Self {
        Self::with_lead_ins(DEFAULT_LEAD_INS.iter().map(|p| p.to_string()).collect())
    }

    /// Builds an extractor with a custom lead-in list. Order is significant:
    /// the first phrase in the list that occurs anywhere in the message wins.
    pub fn with_lead_ins(lead_ins: Vec<String>) -> Self {
        Self { lead_ins }
    }

    pub fn extract(&self, message: &str) -> String {
        let trimmed = message.trim();

        // A double-quoted title is taken verbatim and beats every lead-in.
        if let Some(quoted) = first_quoted(trimmed) {
            debug!(phrase = quoted, "extracted quoted search phrase");
            return quoted.to_string();
        }

        let cleaned = trimmed.trim_end_matches(['?', '.', '!']);
        // ASCII lowering keeps byte offsets aligned with the original-case
        // string, so lead-in offsets can slice `cleaned` directly.
        let lowered = cleaned.to_ascii_lowercase();

        for lead_in in &self.lead_ins {
            if let Some(idx) = lowered.find(lead_in.as_str()) {
                let phrase = cleaned[idx + lead_in.len()..].trim();
                debug!(lead_in = lead_in.as_str(), phrase, "extracted search phrase");
                return phrase.to_string();
            }
        }

        cleaned.to_string()
    }
}

impl Default for QueryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// First double-quoted substring with non-empty inner content. An adjacent
/// `""` pair is skipped and its closing quote may open a later match.
fn first_quoted(text: &str) -> Option<&str> {
    let mut search_from = 0;
    while let Some(offset) = text[search_from..].find('"') {
        let open = search_from + offset;
        let rest = &text[open + 1..];
        match rest.find('"') {
            Some(0) => search_from = open + 1,
            Some(close) => return Some(&rest[..close]),
            None => return None,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_title_wins_over_lead_in() {
        let extractor = QueryExtractor::new();
        assert_eq!(extractor.extract("Who acted in \"Titanic\"?"), "Titanic");
    }

    #[test]
    fn first_quoted_occurrence_wins() {
        let extractor = QueryExtractor::new();
        assert_eq!(
            extractor.extract("Compare \"Alien\" with \"Aliens\""),
            "Alien"
        );
    }

    #[test]
    fn quoted_content_is_verbatim() {
        let extractor = QueryExtractor::new();
        assert_eq!(
            extractor.extract("tell me about \"The Good, the Bad and the Ugly\""),
            "The Good, the Bad and the Ugly"
        );
    }

    #[test]
    fn empty_quotes_are_skipped() {
        let extractor = QueryExtractor::new();
        assert_eq!(extractor.extract("\"\" plot of Dune"), "Dune");
    }

    #[test]
    fn lead_in_strips_prefix() {
        let extractor = QueryExtractor::new();
        assert_eq!(extractor.extract("cast of Inception"), "Inception");
    }

    #[test]
    fn trailing_punctuation_is_stripped() {
        let extractor = QueryExtractor::new();
        assert_eq!(extractor.extract("plot of Dune??!"), "Dune");
        assert_eq!(extractor.extract("Inception."), "Inception");
    }

    #[test]
    fn lead_in_match_is_case_insensitive_but_phrase_keeps_case() {
        let extractor = QueryExtractor::new();
        assert_eq!(extractor.extract("CAST OF The Dark Knight"), "The Dark Knight");
        assert_eq!(extractor.extract("Who Directed Oppenheimer?"), "Oppenheimer");
    }

    #[test]
    fn list_order_beats_positional_order() {
        // "about" appears first in the text but "cast of" comes first in the
        // priority list, so extraction cuts after "cast of".
        let extractor = QueryExtractor::new();
        assert_eq!(
            extractor.extract("Tell me about the cast of Inception"),
            "Inception"
        );
    }

    #[test]
    fn lead_in_may_occur_mid_message() {
        let extractor = QueryExtractor::new();
        assert_eq!(
            extractor.extract("Hey, what is the story of Up?"),
            "Up"
        );
    }

    #[test]
    fn no_heuristic_returns_message_unchanged() {
        let extractor = QueryExtractor::new();
        assert_eq!(extractor.extract("Blade Runner 2049"), "Blade Runner 2049");
    }

    #[test]
    fn extraction_is_idempotent_on_plain_phrases() {
        let extractor = QueryExtractor::new();
        let once = extractor.extract("cast of Heat");
        assert_eq!(extractor.extract(&once), once);
    }

    #[test]
    fn lead_in_with_nothing_after_yields_empty_phrase() {
        let extractor = QueryExtractor::new();
        assert_eq!(extractor.extract("cast of"), "");
        assert_eq!(extractor.extract("cast of   ?"), "");
    }

    #[test]
    fn custom_lead_ins_replace_defaults() {
        let extractor = QueryExtractor::with_lead_ins(vec!["soundtrack of".to_string()]);
        assert_eq!(extractor.extract("soundtrack of Interstellar"), "Interstellar");
        // Default phrases no longer apply.
        assert_eq!(extractor.extract("cast of Heat"), "cast of Heat");
    }
}
