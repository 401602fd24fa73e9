use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Transcript;

/// Read a raw transcript from a UTF-8 text file.
pub fn read_transcript_file(path: &Path) -> Result<Transcript> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript file: {:?}", path))?;
    Ok(Transcript::new(text))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read_transcript_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "えーマナミです。").unwrap();
        let transcript = read_transcript_file(file.path()).unwrap();
        assert_eq!(transcript.text, "えーマナミです。");
        assert_eq!(transcript.char_len, 8);
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(read_transcript_file(Path::new("/no/such/transcript.txt")).is_err());
    }
}
