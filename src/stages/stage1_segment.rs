use crate::models::{
    sentence_fragments, Article, Paragraph, Sentence, CLOSING_LINE, OPENING_LINE,
};

/// Regroup a corrected transcript into framed paragraphs.
///
/// Sentences accumulate into a buffer; when appending one would push the
/// buffer past `paragraph_chars` and the buffer already holds something,
/// the buffer flushes as a finished paragraph and the sentence starts the
/// next one. A single sentence longer than the threshold therefore becomes
/// a paragraph of its own rather than being split mid-sentence.
///
/// The opening line is always prepended; the closing line is appended
/// unless the body already ends with it, so it appears exactly once. An
/// input with no sentences yields a frame-only article.
pub fn segment(corrected: &str, paragraph_chars: usize) -> Article {
    let mut paragraphs = Vec::new();
    let mut buffer = Paragraph::default();

    for fragment in sentence_fragments(corrected) {
        let sentence = Sentence::from_fragment(fragment.trim());
        if !buffer.is_empty() && buffer.char_len() + sentence.char_len() > paragraph_chars {
            paragraphs.push(std::mem::take(&mut buffer));
        }
        buffer.push(sentence);
    }
    if !buffer.is_empty() {
        paragraphs.push(buffer);
    }

    // If the speaker already signed off with the closing line, keep the
    // frame's copy and drop the spoken one.
    if let Some(last) = paragraphs.last_mut() {
        if last.last().map(Sentence::as_str) == Some(CLOSING_LINE) {
            last.pop();
            if last.is_empty() {
                paragraphs.pop();
            }
        }
    }

    Article {
        opening: OPENING_LINE.to_string(),
        paragraphs,
        closing: CLOSING_LINE.to_string(),
    }
}
