use serde::Serialize;

/// Fixed first unit of every assembled article.
pub const OPENING_LINE: &str = "マナミです。";

/// Fixed last unit of every assembled article.
pub const CLOSING_LINE: &str = "今日も読んでいただき、ありがとうございました。";

/// Sentence-terminal punctuation the segmenter and balancer split on.
pub const SENTENCE_MARK: char = '。';

/// Split text on the sentence mark, discarding empty fragments.
///
/// Fragments do not carry the terminal mark; callers re-append it.
pub fn sentence_fragments(text: &str) -> impl Iterator<Item = &str> {
    text.split(SENTENCE_MARK).filter(|f| !f.trim().is_empty())
}

/// A sentence with its terminal punctuation re-attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    text: String,
}

impl Sentence {
    /// Build from a fragment produced by [`sentence_fragments`].
    pub fn from_fragment(fragment: &str) -> Self {
        let mut text = fragment.to_string();
        text.push(SENTENCE_MARK);
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// An ordered run of sentences, immutable once flushed by the segmenter.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    sentences: Vec<Sentence>,
}

impl Paragraph {
    pub fn push(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    pub fn last(&self) -> Option<&Sentence> {
        self.sentences.last()
    }

    pub fn pop(&mut self) -> Option<Sentence> {
        self.sentences.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn char_len(&self) -> usize {
        self.sentences.iter().map(Sentence::char_len).sum()
    }

    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(Sentence::as_str)
            .collect::<String>()
    }
}

/// Opening line, body paragraphs, closing line.
///
/// The opening is always the first unit and the closing always the last;
/// the segmenter appends the closing only when the body does not already
/// end with it.
#[derive(Debug, Clone)]
pub struct Article {
    pub opening: String,
    pub paragraphs: Vec<Paragraph>,
    pub closing: String,
}

impl Article {
    /// Render as blank-line-separated UTF-8 text.
    pub fn text(&self) -> String {
        let mut units = Vec::with_capacity(self.paragraphs.len() + 2);
        units.push(self.opening.clone());
        for paragraph in &self.paragraphs {
            if !paragraph.is_empty() {
                units.push(paragraph.text());
            }
        }
        units.push(self.closing.clone());
        units.join("\n\n")
    }
}

/// Character accounting for a finished article.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CharCounts {
    pub opening: usize,
    pub body: usize,
    pub closing: usize,
    pub total: usize,
}

impl CharCounts {
    /// Measure a rendered article. The closing count is zero when the
    /// balancer truncated the closing line away.
    pub fn measure(text: &str) -> Self {
        let total = text.chars().count();
        let opening = if text.starts_with(OPENING_LINE) {
            OPENING_LINE.chars().count()
        } else {
            0
        };
        let closing = if text.ends_with(CLOSING_LINE) && total > OPENING_LINE.chars().count() {
            CLOSING_LINE.chars().count()
        } else {
            0
        };
        Self {
            opening,
            body: total.saturating_sub(opening + closing),
            closing,
            total,
        }
    }
}
