use tracing::info;

use crate::error::ArticleError;
use crate::models::{Article, ArticleConfig, CharCounts, Transcript, OPENING_LINE};
use crate::stages::{balance, correct, segment};

/// A finished article with its structural form, rendered text, and counts.
#[derive(Debug)]
pub struct AssembledArticle {
    pub article: Article,
    pub text: String,
    pub counts: CharCounts,
}

/// Run the full local chain over one transcript: correct, segment, balance.
///
/// Short and empty transcripts are valid and produce a frame-only article.
/// The only failure modes are a rejected configuration and output that
/// violates the article frame; the latter carries the raw transcript so
/// the caller still has something to hand back.
pub fn assemble(
    transcript: &Transcript,
    config: &ArticleConfig,
) -> Result<AssembledArticle, ArticleError> {
    config.validate()?;

    let corrected = correct(&transcript.text);
    let article = segment(&corrected, config.paragraph_chars);
    let text = balance(&article.text(), &config.budget);

    if !text.starts_with(OPENING_LINE) {
        return Err(ArticleError::AssemblyFailed {
            reason: "assembled text does not open with the fixed opening line".to_string(),
            transcript: transcript.text.clone(),
        });
    }

    let counts = CharCounts::measure(&text);
    info!(
        "assembled article: {} chars ({} opening, {} body, {} closing)",
        counts.total, counts.opening, counts.body, counts.closing
    );

    Ok(AssembledArticle {
        article,
        text,
        counts,
    })
}
