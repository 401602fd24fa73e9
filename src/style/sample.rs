use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

/// Built-in style exemplar used whenever the source file cannot be read.
pub const DEFAULT_STYLE_SAMPLE: &str = "マナミです。

今回は「SNS運用で疲れた時の対処法」についてお話しします。

SNSを始めたばかりの頃は、毎日投稿することや「いいね」の数を気にしてしまいがちです。でも、そんな風に頑張りすぎていると、だんだん疲れてきてしまうんですよね。

私も最初の頃は、毎日何かを投稿しなければいけないと思っていました。でも、それってすごく大変なことなんです。毎日ネタを考えて、写真を撮って、文章を書いて...。気がつくと、SNSのことばかり考えている自分がいました。

そんな時に大切なのは「無理をしないこと」です。投稿の頻度を下げても大丈夫ですし、たまには休んでも構いません。フォロワーの方々は、あなたが無理をしていることよりも、自然体でいることを望んでいるはずです。";

static DATE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}/").unwrap());

/// A bounded excerpt of prior published prose, read-only after load.
#[derive(Debug, Clone)]
pub struct StyleSample {
    pub text: String,
    /// False when the built-in fallback was substituted.
    pub loaded_from_file: bool,
}

impl StyleSample {
    /// First `cap` characters of the sample, on a char boundary.
    pub fn excerpt(&self, cap: usize) -> &str {
        match self.text.char_indices().nth(cap) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }
}

/// Extract a bounded style exemplar from a corpus file.
///
/// Prose lines are collected until `line_cap` is reached or the file ends;
/// empty lines, parenthetical annotation lines, and date-stamped metadata
/// lines are skipped. Any read failure falls back to
/// [`DEFAULT_STYLE_SAMPLE`] — this function never fails outward, and
/// re-reads are idempotent for an unchanged file.
pub fn load_style_sample(path: &Path, line_cap: usize) -> StyleSample {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let mut sample_lines = Vec::new();
            for line in content.lines() {
                if !is_prose_line(line) {
                    continue;
                }
                sample_lines.push(line);
                if sample_lines.len() >= line_cap {
                    break;
                }
            }
            info!(
                "loaded style sample: {} lines from {:?}",
                sample_lines.len(),
                path
            );
            StyleSample {
                text: sample_lines.join("\n"),
                loaded_from_file: true,
            }
        }
        Err(e) => {
            warn!("style source {:?} unavailable ({}), using built-in sample", path, e);
            StyleSample {
                text: DEFAULT_STYLE_SAMPLE.to_string(),
                loaded_from_file: false,
            }
        }
    }
}

fn is_prose_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && !trimmed.starts_with('(')
        && !trimmed.starts_with('（')
        && !DATE_PREFIX.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let sample = load_style_sample(Path::new("/no/such/style/file.md"), 50);
        assert!(!sample.loaded_from_file);
        assert_eq!(sample.text, DEFAULT_STYLE_SAMPLE);
        assert!(!sample.text.is_empty());
    }

    #[test]
    fn test_metadata_lines_are_filtered() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(下書きメモ)").unwrap();
        writeln!(file, "2025/06/01 公開").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "マナミです。").unwrap();
        writeln!(file, "今日は仕事の話です。").unwrap();

        let sample = load_style_sample(file.path(), 50);
        assert!(sample.loaded_from_file);
        assert_eq!(sample.text, "マナミです。\n今日は仕事の話です。");
    }

    #[test]
    fn test_line_cap_bounds_sample() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for i in 0..100 {
            writeln!(file, "{i}行目の本文です。").unwrap();
        }
        let sample = load_style_sample(file.path(), 50);
        assert_eq!(sample.text.lines().count(), 50);
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        let sample = StyleSample {
            text: "あいうえお".to_string(),
            loaded_from_file: false,
        };
        assert_eq!(sample.excerpt(3), "あいう");
        assert_eq!(sample.excerpt(10), "あいうえお");
    }
}
