use std::path::Path;

use tokio::process::Command;
use tracing::info;

use crate::error::ArticleError;

/// External speech-to-text collaborator: audio in, raw transcript out.
///
/// Implementations are expensive to acquire; callers construct one handle
/// up front and reuse it across files. Retry and timeout policy belongs to
/// the implementation, not the pipeline.
pub trait SpeechRecognizer {
    fn transcribe(
        &self,
        wav: &Path,
        language: &str,
    ) -> impl std::future::Future<Output = Result<String, ArticleError>>;
}

/// Recognizer that shells out to an external transcription command.
///
/// The command is expected to print the transcript to stdout, e.g. a
/// whisper CLI invoked as `<program> --language ja <file.wav>`.
pub struct CommandRecognizer {
    program: String,
}

impl CommandRecognizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl SpeechRecognizer for CommandRecognizer {
    async fn transcribe(&self, wav: &Path, language: &str) -> Result<String, ArticleError> {
        info!("transcribing {:?} with {}", wav, self.program);
        let output = Command::new(&self.program)
            .arg("--language")
            .arg(language)
            .arg(wav)
            .output()
            .await
            .map_err(|e| {
                ArticleError::RecognitionFailed(format!("could not run {}: {e}", self.program))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ArticleError::RecognitionFailed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim_end()
            )));
        }

        let transcript = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if transcript.is_empty() {
            return Err(ArticleError::RecognitionFailed(
                "recognizer produced no text".to_string(),
            ));
        }

        info!("transcription complete: {} chars", transcript.chars().count());
        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_program_is_recognition_failure() {
        let recognizer = CommandRecognizer::new("kikigaki-no-such-recognizer");
        let result = recognizer.transcribe(Path::new("input.wav"), "ja").await;
        assert!(matches!(result, Err(ArticleError::RecognitionFailed(_))));
    }
}
