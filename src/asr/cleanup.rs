use std::path::Path;

use tracing::{info, warn};

/// Delete stale output artifacts from a previous run of the same file.
///
/// Matches the transcript/article text files and leftover temp audio the
/// pipeline itself produces. The scan is unsynchronized: running two
/// instances against the same working directory concurrently is unsafe,
/// and single-instance use is a hard constraint rather than something
/// this sweep defends against.
pub fn sweep_stale_artifacts(dir: &Path) -> usize {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("could not scan {:?} for stale artifacts: {}", dir, e);
            return 0;
        }
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !is_stale_artifact(name) {
            continue;
        }
        match std::fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) => warn!("could not remove stale artifact {:?}: {}", path, e),
        }
    }

    if removed > 0 {
        info!("cleared {} stale artifacts", removed);
    }
    removed
}

fn is_stale_artifact(name: &str) -> bool {
    let known_pattern = name.contains("_transcript.txt")
        || name.contains("_article.txt")
        || name.contains("temp")
        || name.contains("tmp");
    let known_extension =
        name.ends_with(".txt") || name.ends_with(".wav") || name.ends_with(".mp3");
    known_pattern && known_extension
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_removes_only_known_patterns() {
        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join("20250801_120000_article.txt");
        let stale_audio = dir.path().join("temp_convert.wav");
        let kept = dir.path().join("notes.md");
        std::fs::write(&stale, "old").unwrap();
        std::fs::write(&stale_audio, "old").unwrap();
        std::fs::write(&kept, "keep").unwrap();

        let removed = sweep_stale_artifacts(dir.path());

        assert_eq!(removed, 2);
        assert!(!stale.exists());
        assert!(!stale_audio.exists());
        assert!(kept.exists());
    }

    #[test]
    fn test_sweep_on_missing_dir_is_noop() {
        assert_eq!(sweep_stale_artifacts(Path::new("/no/such/dir")), 0);
    }
}
