pub mod asr;
pub mod error;
pub mod io;
pub mod llm;
pub mod models;
pub mod stages;
pub mod style;

pub use asr::{sweep_stale_artifacts, transcode_to_wav, CommandRecognizer, SpeechRecognizer};
pub use error::ArticleError;
pub use io::{read_transcript_file, timestamped_path, write_text_file, GenerationReport};
pub use llm::{build_article_prompt, GenerativeClient, GenerativeConfig, SYSTEM_PROMPT};
pub use models::{
    Article, ArticleConfig, CharCounts, LengthBudget, Paragraph, Sentence, Transcript,
    CLOSING_LINE, OPENING_LINE,
};
pub use stages::{assemble, balance, correct, segment, AssembledArticle, CORRECTION_RULES};
pub use style::{load_style_sample, StyleSample, DEFAULT_STYLE_SAMPLE};
