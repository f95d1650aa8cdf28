use unicode_segmentation::UnicodeSegmentation;

/// Longest claim carried in an analysis result, in user-perceived characters.
pub const MAX_CLAIM_CHARS: usize = 200;

/// Cuts `text` to at most `max` grapheme clusters, never splitting one.
pub fn truncate_graphemes(text: &str, max: usize) -> &str {
    match text.grapheme_indices(true).nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// The claim list for an input: the whole submission, truncated, or nothing
/// when the submission is blank.
pub fn extract_claims(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    vec![truncate_graphemes(text, MAX_CLAIM_CHARS).to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_kept_whole() {
        assert_eq!(extract_claims("the sky is blue"), vec!["the sky is blue".to_string()]);
    }

    #[test]
    fn long_input_is_cut_at_limit() {
        let text = "a".repeat(450);
        let claims = extract_claims(&text);
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].len(), MAX_CLAIM_CHARS);
    }

    #[test]
    fn truncation_respects_grapheme_boundaries() {
        // "é" as e + combining acute, then CJK
        let text = "e\u{301}你好世界";
        assert_eq!(truncate_graphemes(text, 1), "e\u{301}");
        assert_eq!(truncate_graphemes(text, 3), "e\u{301}你好");
        assert_eq!(truncate_graphemes(text, 10), text);
    }

    #[test]
    fn blank_input_yields_no_claims() {
        assert!(extract_claims("   \n\t").is_empty());
    }
}
