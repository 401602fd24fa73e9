use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered literal substitutions applied to the raw transcript.
///
/// Order is significant: each rule sees the output of the one before it,
/// so longer variants of a mis-transcription must precede their prefixes.
/// The list is a fixed constant, not a runtime surface.
pub const CORRECTION_RULES: &[(&str, &str)] = &[
    // Reported recognizer errors around the author's name and topics
    ("日山波です", "マナミです"),
    ("日山波", "マナミ"),
    ("まん波", "マナミ"),
    ("学み", "マナミ"),
    ("一斉にス発進", "SNS発信"),
    ("一斉に素発進", "SNS発信"),
    ("コンテンセサコ", "コンテンツ作成"),
    ("ままふりなす", "ママフリーランス"),
    ("フリーナース", "フリーランス"),
    ("フリランス", "フリーランス"),
    ("サニティ", "Sanity"),
    ("ワードブレス", "WordPress"),
    ("ポートフリオ", "ポートフォリオ"),
    // Dropped small-tsu artifacts
    ("やとぱり", "やっぱり"),
    ("やとています", "やっています"),
    ("やとている", "やっている"),
    ("やとて", "やって"),
    ("作とて", "作って"),
    ("持とて", "持って"),
    ("せとかく", "せっかく"),
    ("かぶとた", "かぶった"),
    ("どとか", "どこか"),
    // Garbled polite endings
    ("思今した", "思いました"),
    ("思今す", "思います"),
    ("ござ今した", "ございました"),
    // Fillers, comma-suffixed forms first
    ("えー、", ""),
    ("えー", ""),
    ("えっと、", ""),
    ("えっと", ""),
    ("あの、", ""),
    ("あの", ""),
    ("うーん、", ""),
    ("うーん", ""),
    ("まぁ、", ""),
    ("まぁ", ""),
    ("そうですね、", ""),
    ("そうですね", ""),
    ("なんか、", ""),
    ("なんか", ""),
];

/// Smallest repeated unit the disfluency collapse looks for, in chars.
const MIN_REPEAT_UNIT: usize = 2;
/// Largest repeated unit the disfluency collapse looks for, in chars.
const MAX_REPEAT_UNIT: usize = 8;
/// Upper bound on cleanup passes before the fixed point is accepted as-is.
const MAX_PASSES: usize = 8;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static COMMA_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"、{2,}").unwrap());
static MARK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"。{2,}").unwrap());

/// Deterministic transcript cleanup.
///
/// Applies the correction rules in order, collapses whitespace runs,
/// collapses immediately-repeated units, and trims. The pass repeats until
/// the text stops changing, so re-applying the corrector to its own output
/// is a no-op. Total over any string input; empty in, empty out.
pub fn correct(text: &str) -> String {
    let mut current = text.to_string();
    for _ in 0..MAX_PASSES {
        let next = cleanup_pass(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn cleanup_pass(text: &str) -> String {
    let mut buffer = text.to_string();
    for (pattern, replacement) in CORRECTION_RULES {
        if buffer.contains(pattern) {
            buffer = buffer.replace(pattern, replacement);
        }
    }
    let buffer = WHITESPACE_RUN.replace_all(&buffer, " ");
    let buffer = COMMA_RUN.replace_all(&buffer, "、");
    let buffer = MARK_RUN.replace_all(&buffer, "。");
    let buffer = collapse_repeated_units(&buffer);
    buffer.trim().to_string()
}

/// Collapse a unit that immediately repeats itself down to one occurrence.
///
/// Disfluent speech repeats phrases of arbitrary length ("そうそう",
/// "ありがとうありがとう"), so this is a positional scan rather than a
/// dictionary: at each position the shortest repeating unit between
/// [`MIN_REPEAT_UNIT`] and [`MAX_REPEAT_UNIT`] chars wins, and the whole
/// run collapses regardless of how many times it repeats.
fn collapse_repeated_units(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let mut collapsed = false;
        for unit in MIN_REPEAT_UNIT..=MAX_REPEAT_UNIT {
            if i + 2 * unit > chars.len() {
                break;
            }
            if chars[i..i + unit] == chars[i + unit..i + 2 * unit] {
                let mut reps = 2;
                while i + (reps + 1) * unit <= chars.len()
                    && chars[i..i + unit] == chars[i + reps * unit..i + (reps + 1) * unit]
                {
                    reps += 1;
                }
                out.extend(&chars[i..i + unit]);
                i += reps * unit;
                collapsed = true;
                break;
            }
        }
        if !collapsed {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(correct(""), "");
    }

    #[test]
    fn test_rule_order_longest_first() {
        assert_eq!(correct("日山波です"), "マナミです");
        assert_eq!(correct("やとています"), "やっています");
    }

    #[test]
    fn test_filler_removal() {
        assert_eq!(correct("えーマナミです。"), "マナミです。");
        assert_eq!(correct("あの、今日は晴れです。"), "今日は晴れです。");
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(correct("今日は  \n\t 晴れ"), "今日は 晴れ");
    }

    #[test]
    fn test_repeated_unit_collapse() {
        assert_eq!(correct("そうそう、頑張りすぎなんです。"), "そう、頑張りすぎなんです。");
        assert_eq!(correct("そうそうそうそう"), "そう");
        assert_eq!(correct("ありがとうありがとう"), "ありがとう");
    }

    #[test]
    fn test_punctuation_runs_collapse() {
        assert_eq!(correct("終わりです。。。"), "終わりです。");
        assert_eq!(correct("今日は、、晴れ"), "今日は、晴れ");
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "えーマナミです。あのSNSで疲れることがあります。そうそう、頑張りすぎなんです。",
            "日山波です。ままふりなすとしてやとています。",
            "ととというか、えーえー、そうですね。",
            "",
            "   ",
            "普通の文です。何も直すところがありません。",
        ];
        for input in inputs {
            let once = correct(input);
            assert_eq!(correct(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_rule_replacements_are_fixed_points() {
        // A rule whose replacement the corrector would rewrite again breaks
        // idempotence; every replacement must survive a full pass intact.
        for (_, replacement) in CORRECTION_RULES {
            if !replacement.is_empty() {
                assert_eq!(&correct(replacement), replacement);
            }
        }
    }

    #[test]
    fn test_spec_example_sentence() {
        let input = "えーマナミです。あのSNSで疲れることがあります。そうそう、頑張りすぎなんです。";
        assert_eq!(
            correct(input),
            "マナミです。SNSで疲れることがあります。そう、頑張りすぎなんです。"
        );
    }
}
