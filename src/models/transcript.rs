/// Raw speech-to-text output, prior to any cleanup.
///
/// Owned by the caller of the pipeline; every stage reads it without
/// mutating it. Lengths are Unicode scalar counts, not bytes.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub text: String,
    pub char_len: usize,
}

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let char_len = text.chars().count();
        Self { text, char_len }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl From<String> for Transcript {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_scalars() {
        let transcript = Transcript::new("マナミです。");
        assert_eq!(transcript.char_len, 6);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(Transcript::new("  \n ").is_empty());
        assert!(!Transcript::new("a").is_empty());
    }
}
