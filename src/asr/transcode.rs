use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tokio::process::Command;
use tracing::debug;

use crate::error::ArticleError;

/// A WAV rendition of the input, deleted when dropped if it was converted.
///
/// Inputs that are already WAV pass through untouched; everything else is
/// written to a scoped temp file whose lifetime is tied to this value, so
/// the artifact disappears on every exit path, errors included.
pub struct TranscodedAudio {
    path: PathBuf,
    _guard: Option<NamedTempFile>,
}

impl TranscodedAudio {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Convert an audio file to 16 kHz mono PCM WAV via the external
/// transcoding utility.
///
/// ffmpeg is a black box here: input path, output path, target format in,
/// success or failure out. No timeout policy is applied.
pub async fn transcode_to_wav(input: &Path) -> Result<TranscodedAudio, ArticleError> {
    let already_wav = input
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("wav"));
    if already_wav {
        return Ok(TranscodedAudio {
            path: input.to_path_buf(),
            _guard: None,
        });
    }

    let guard = tempfile::Builder::new()
        .prefix("kikigaki_")
        .suffix(".wav")
        .tempfile()
        .map_err(|e| ArticleError::TranscodeFailed(format!("could not create temp file: {e}")))?;
    let wav_path = guard.path().to_path_buf();

    debug!("transcoding {:?} -> {:?}", input, wav_path);
    let output = Command::new("ffmpeg")
        .arg("-i")
        .arg(input)
        .args(["-acodec", "pcm_s16le", "-ar", "16000", "-ac", "1"])
        .arg(&wav_path)
        .arg("-y")
        .output()
        .await
        .map_err(|e| ArticleError::TranscodeFailed(format!("could not run ffmpeg: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ArticleError::TranscodeFailed(format!(
            "ffmpeg exited with {}: {}",
            output.status,
            stderr.trim_end()
        )));
    }

    Ok(TranscodedAudio {
        path: wav_path,
        _guard: Some(guard),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_wav_input_passes_through() {
        let file = tempfile::Builder::new().suffix(".wav").tempfile().unwrap();
        let transcoded = transcode_to_wav(file.path()).await.unwrap();
        assert_eq!(transcoded.path(), file.path());
    }

    #[tokio::test]
    async fn test_temp_artifact_removed_on_drop() {
        // ffmpeg is absent or fails on an empty non-wav file either way;
        // the scoped temp file must be gone afterwards.
        let input = tempfile::Builder::new().suffix(".m4a").tempfile().unwrap();
        let before: Vec<_> = std::fs::read_dir(std::env::temp_dir())
            .unwrap()
            .flatten()
            .filter(|e| e.file_name().to_string_lossy().starts_with("kikigaki_"))
            .collect();
        let _ = transcode_to_wav(input.path()).await;
        let after: Vec<_> = std::fs::read_dir(std::env::temp_dir())
            .unwrap()
            .flatten()
            .filter(|e| e.file_name().to_string_lossy().starts_with("kikigaki_"))
            .collect();
        assert_eq!(before.len(), after.len());
    }
}
