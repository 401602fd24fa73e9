use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use kikigaki::{
    assemble, build_article_prompt, load_style_sample, read_transcript_file,
    sweep_stale_artifacts, timestamped_path, transcode_to_wav, write_text_file, ArticleConfig,
    ArticleError, CharCounts, CommandRecognizer, GenerationReport, GenerativeClient,
    GenerativeConfig, LengthBudget, SpeechRecognizer, StyleSample, Transcript,
    DEFAULT_STYLE_SAMPLE, SYSTEM_PROMPT,
};

#[derive(Parser)]
#[command(name = "kikigaki")]
#[command(author, version, about = "Voice-memo transcript to note-article pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn a transcript file into a rule-based article
    Article {
        /// Input transcript file (UTF-8 text)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the article (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for the machine-readable generation report (JSON)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Per-paragraph character threshold
        #[arg(long, default_value = "150")]
        paragraph_chars: usize,

        /// Target article length in characters
        #[arg(long, default_value = "2000")]
        target_chars: usize,

        /// Overflow tolerance factor before truncation kicks in
        #[arg(long, default_value = "1.2")]
        tolerance: f64,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Build the style-conditioned instruction document for an external
    /// generative service
    Prompt {
        /// Input transcript file (UTF-8 text)
        #[arg(short, long)]
        input: PathBuf,

        /// Style source file (built-in sample if omitted or unreadable)
        #[arg(short, long)]
        style: Option<PathBuf>,

        /// Output file for the document (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum characters of the style sample embedded in the document
        #[arg(long, default_value = "1000")]
        excerpt_chars: usize,

        /// Maximum lines collected from the style source
        #[arg(long, default_value = "50")]
        line_cap: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Process an audio file end to end: transcode, transcribe, write an
    /// article
    Audio {
        /// Input audio file (any format ffmpeg can read)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the article (timestamped file if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for the machine-readable generation report (JSON)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Style source file (built-in sample if omitted or unreadable)
        #[arg(short, long)]
        style: Option<PathBuf>,

        /// External recognizer command (must print the transcript to stdout)
        #[arg(long, default_value = "whisper-cli")]
        recognizer: String,

        /// Language hint passed to the recognizer
        #[arg(long, default_value = "ja")]
        language: String,

        /// Hand the transcript to the generative service instead of the
        /// rule-based pipeline (falls back on any failure)
        #[arg(long)]
        generate: bool,

        /// Skip the stale-artifact sweep of the working directory
        #[arg(long)]
        no_cleanup: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Article {
            input,
            output,
            report,
            paragraph_chars,
            target_chars,
            tolerance,
            verbose,
        } => {
            setup_logging(verbose);
            let config = ArticleConfig {
                paragraph_chars,
                budget: LengthBudget {
                    target_chars,
                    tolerance,
                },
                ..Default::default()
            };
            run_article(input, output, report, config)
        }
        Commands::Prompt {
            input,
            style,
            output,
            excerpt_chars,
            line_cap,
            verbose,
        } => {
            setup_logging(verbose);
            let config = ArticleConfig {
                style_excerpt_chars: excerpt_chars,
                style_line_cap: line_cap,
                ..Default::default()
            };
            run_prompt(input, style, output, config)
        }
        Commands::Audio {
            input,
            output,
            report,
            style,
            recognizer,
            language,
            generate,
            no_cleanup,
            verbose,
        } => {
            setup_logging(verbose);
            run_audio(
                input,
                output,
                report,
                style,
                recognizer,
                language,
                generate,
                no_cleanup,
            )
            .await
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run_article(
    input: PathBuf,
    output: Option<PathBuf>,
    report: Option<PathBuf>,
    config: ArticleConfig,
) -> Result<()> {
    info!("Loading transcript from {:?}", input);
    let transcript = read_transcript_file(&input)?;
    info!("Loaded {} chars", transcript.char_len);

    let assembled = assemble(&transcript, &config).context("Failed to assemble article")?;
    info!(
        "Article: {} chars ({} opening, {} body, {} closing)",
        assembled.counts.total,
        assembled.counts.opening,
        assembled.counts.body,
        assembled.counts.closing
    );

    emit_text(output.as_deref(), &assembled.text)?;

    if let Some(report_path) = report {
        GenerationReport::new(&input, false, assembled.counts).write_json(&report_path)?;
        info!("Report written to {:?}", report_path);
    }

    Ok(())
}

fn run_prompt(
    input: PathBuf,
    style: Option<PathBuf>,
    output: Option<PathBuf>,
    config: ArticleConfig,
) -> Result<()> {
    let transcript = read_transcript_file(&input)?;
    let style = load_style(style.as_deref(), config.style_line_cap);
    let document = build_article_prompt(&style, &transcript.text, &config);

    info!(
        "Built instruction document: {} chars (style from file: {})",
        document.chars().count(),
        style.loaded_from_file
    );
    emit_text(output.as_deref(), &document)
}

async fn run_audio(
    input: PathBuf,
    output: Option<PathBuf>,
    report: Option<PathBuf>,
    style: Option<PathBuf>,
    recognizer: String,
    language: String,
    generate: bool,
    no_cleanup: bool,
) -> Result<()> {
    let workdir = std::env::current_dir().context("Failed to resolve working directory")?;
    if !no_cleanup {
        sweep_stale_artifacts(&workdir);
    }

    let config = ArticleConfig::default();
    config.validate()?;

    info!("Processing {:?}", input);
    let wav = transcode_to_wav(&input).await?;

    let recognizer = CommandRecognizer::new(recognizer);
    let text = recognizer.transcribe(wav.path(), &language).await?;
    let transcript = Transcript::new(text);

    let transcript_path = timestamped_path(&workdir, "_transcript.txt");
    write_text_file(&transcript_path, &transcript.text)?;
    info!("Transcript written to {:?}", transcript_path);

    let (article_text, counts, used_generative) = match generated_article(
        generate,
        style.as_deref(),
        &transcript,
        &config,
    )
    .await
    {
        Some(text) => {
            let counts = CharCounts::measure(&text);
            (text, counts, true)
        }
        None => match assemble(&transcript, &config) {
            Ok(assembled) => (assembled.text, assembled.counts, false),
            Err(ArticleError::AssemblyFailed { reason, .. }) => {
                warn!(
                    "Assembly failed ({}), raw transcript kept at {:?}",
                    reason, transcript_path
                );
                anyhow::bail!("article generation failed: {}", reason);
            }
            Err(e) => return Err(e).context("Failed to assemble article"),
        },
    };

    let article_path =
        output.unwrap_or_else(|| timestamped_path(&workdir, "_article.txt"));
    write_text_file(&article_path, &article_text)?;
    info!(
        "Article written to {:?} ({} chars, generative: {})",
        article_path, counts.total, used_generative
    );

    if let Some(report_path) = report {
        GenerationReport::new(&input, used_generative, counts).write_json(&report_path)?;
        info!("Report written to {:?}", report_path);
    }

    Ok(())
}

/// Try the generative path; None means the caller should fall back to the
/// rule-based pipeline.
async fn generated_article(
    generate: bool,
    style: Option<&Path>,
    transcript: &Transcript,
    config: &ArticleConfig,
) -> Option<String> {
    if !generate {
        return None;
    }
    let api_config = match GenerativeConfig::from_env() {
        Ok(api_config) => api_config,
        Err(e) => {
            warn!("Generative service unavailable ({}), using rule-based pipeline", e);
            return None;
        }
    };

    let style = load_style(style, config.style_line_cap);
    let prompt = build_article_prompt(&style, &transcript.text, config);
    let client = GenerativeClient::new(api_config);

    match client.generate(SYSTEM_PROMPT, &prompt).await {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Generation failed ({}), using rule-based pipeline", e);
            None
        }
    }
}

fn load_style(style: Option<&Path>, line_cap: usize) -> StyleSample {
    match style {
        Some(path) => load_style_sample(path, line_cap),
        None => StyleSample {
            text: DEFAULT_STYLE_SAMPLE.to_string(),
            loaded_from_file: false,
        },
    }
}

fn emit_text(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            write_text_file(path, text)?;
            info!("Written to {:?}", path);
        }
        None => println!("{text}"),
    }
    Ok(())
}
