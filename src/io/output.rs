use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::models::CharCounts;

/// Machine-readable record of one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Name of the source file the article was produced from
    pub source: String,
    /// RFC 3339 local timestamp of the run
    pub generated_at: String,
    /// Whether the generative collaborator produced the text (false =
    /// rule-based fallback path)
    pub used_generative: bool,
    /// Character accounting of the final article
    pub counts: CharCounts,
}

impl GenerationReport {
    pub fn new(source: &Path, used_generative: bool, counts: CharCounts) -> Self {
        Self {
            source: source.display().to_string(),
            generated_at: Local::now().to_rfc3339(),
            used_generative,
            counts,
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Write article or prompt text as UTF-8.
pub fn write_text_file(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("Failed to write file: {:?}", path))
}

/// Timestamped output path in `dir`, e.g. `20250805_142500_article.txt`.
///
/// The `_article.txt` / `_transcript.txt` suffixes are the ones the
/// stale-artifact sweep recognizes on the next run.
pub fn timestamped_path(dir: &Path, suffix: &str) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("{stamp}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamped_path_shape() {
        let path = timestamped_path(Path::new("/tmp"), "_article.txt");
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.ends_with("_article.txt"));
        assert_eq!(name.len(), "20250805_142500_article.txt".len());
    }

    #[test]
    fn test_report_round_trips_as_json() {
        let report = GenerationReport::new(
            Path::new("memo.m4a"),
            false,
            CharCounts {
                opening: 6,
                body: 100,
                closing: 23,
                total: 129,
            },
        );
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"used_generative\":false"));
        assert!(json.contains("\"total\":129"));
    }
}
