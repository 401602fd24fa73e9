use tracing::debug;

use crate::models::{sentence_fragments, LengthBudget, SENTENCE_MARK};

/// Enforce the upper bound of the length budget.
///
/// The policy is asymmetric on purpose: text over `target * tolerance`
/// chars is truncated at sentence boundaries back down to at most `target`
/// chars, but short text is never padded. Output length never exceeds the
/// input length.
pub fn balance(text: &str, budget: &LengthBudget) -> String {
    let total = text.chars().count();
    if total <= budget.max_chars() {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0usize;
    for fragment in sentence_fragments(text) {
        let len = fragment.chars().count() + 1;
        if used + len > budget.target_chars {
            break;
        }
        out.push_str(fragment);
        out.push(SENTENCE_MARK);
        used += len;
    }

    debug!(
        "balanced article from {} to {} chars (target {})",
        total,
        out.chars().count(),
        budget.target_chars
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(target: usize, tolerance: f64) -> LengthBudget {
        LengthBudget {
            target_chars: target,
            tolerance,
        }
    }

    #[test]
    fn test_under_threshold_unchanged() {
        let text = "短い記事です。";
        assert_eq!(balance(text, &budget(2_000, 1.2)), text);
    }

    #[test]
    fn test_at_threshold_unchanged() {
        let text = "あ".repeat(119) + "。";
        assert_eq!(text.chars().count(), 120);
        assert_eq!(balance(&text, &budget(100, 1.2)), text);
    }

    #[test]
    fn test_over_threshold_truncates_to_target() {
        let sentence = "あ".repeat(29) + "。";
        let text = sentence.repeat(10); // 300 chars
        let balanced = balance(&text, &budget(100, 1.2));
        // Three 30-char sentences fit in 100; the fourth would overflow.
        assert_eq!(balanced.chars().count(), 90);
        assert!(balanced.ends_with(SENTENCE_MARK));
    }

    #[test]
    fn test_never_grows() {
        let cases = [
            "".to_string(),
            "一文。".to_string(),
            ("あ".repeat(50) + "。").repeat(20),
        ];
        for text in cases {
            let balanced = balance(&text, &budget(100, 1.2));
            assert!(balanced.chars().count() <= text.chars().count());
        }
    }

    #[test]
    fn test_paragraph_breaks_survive_truncation() {
        let text = format!("{}。\n\n{}。\n\n{}。", "あ".repeat(40), "い".repeat(40), "う".repeat(40));
        let balanced = balance(&text, &budget(90, 1.0));
        assert!(balanced.contains("\n\n"));
        assert!(balanced.chars().count() <= 90);
    }
}
