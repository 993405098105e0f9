// Docsum CLI Entry Point
// Runs the analytics engine and the model-backed assistant over a document.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use docsum_core::assistant::{
    DocumentAssistant, LanguageModel, OfflineModel, OpenAiClient, SummaryStyle,
};
use docsum_core::logging::{self, LogFormat};
use docsum_core::text_extract;
use docsum_core::{AppError, Config};

#[derive(Parser, Debug)]
#[command(name = "docsum", version, about = "Document statistics, keywords and summaries")]
struct Cli {
    /// Emit logs as Bunyan JSON on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct DocumentArg {
    /// Path to a .txt, .md, .csv, .json, .pdf or .docx file
    file: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Text statistics and complexity
    Stats(DocumentArg),
    /// Summary, from the model when configured
    Summarize {
        #[command(flatten)]
        doc: DocumentArg,
        /// Target length in words (defaults to DOCSUM_SUMMARY_WORDS)
        #[arg(long)]
        words: Option<usize>,
        /// paragraph, bullets, academic or simple
        #[arg(long, default_value = "paragraph")]
        style: SummaryStyle,
        /// Skip the model and use the extractive summarizer
        #[arg(long)]
        extractive: bool,
    },
    /// Most important keywords
    Keywords {
        #[command(flatten)]
        doc: DocumentArg,
        #[arg(long)]
        count: Option<usize>,
    },
    /// Word-cloud terms with relative sizes
    Cloud {
        #[command(flatten)]
        doc: DocumentArg,
        #[arg(long)]
        max: Option<usize>,
    },
    /// Full offline report: stats, keywords, cloud and language
    Report(DocumentArg),
    /// Translate into another language
    Translate {
        #[command(flatten)]
        doc: DocumentArg,
        /// Target language code, e.g. "en" or "fr"
        #[arg(long)]
        to: String,
    },
    /// Ask a question about the document
    Ask {
        #[command(flatten)]
        doc: DocumentArg,
        #[arg(long)]
        question: String,
    },
    /// Sentiment and tone
    Sentiment(DocumentArg),
    /// Title suggestions
    Titles {
        #[command(flatten)]
        doc: DocumentArg,
        #[arg(long, default_value_t = 3)]
        count: usize,
    },
    /// Summary per detected section
    Sections {
        #[command(flatten)]
        doc: DocumentArg,
        /// Words per section summary
        #[arg(long, default_value_t = 50)]
        words: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    logging::init(format)?;

    let config = Config::load()
        .and_then(Config::validated)
        .context("Invalid configuration")?;

    if config.is_offline() {
        info!("No API key configured, running offline");
        run(DocumentAssistant::new(OfflineModel), &config, cli.command).await
    } else {
        info!("Using model {} at {}", config.model, config.base_url);
        run(DocumentAssistant::new(OpenAiClient::new(&config)), &config, cli.command).await
    }
}

async fn run<M: LanguageModel>(
    assistant: DocumentAssistant<M>,
    config: &Config,
    command: Command,
) -> Result<()> {
    let analyzer = assistant.analyzer();

    match command {
        Command::Stats(doc) => {
            let text = read_document(&doc)?;
            print_json(&analyzer.compute_stats(&text))
        }
        Command::Summarize {
            doc,
            words,
            style,
            extractive,
        } => {
            let text = read_document(&doc)?;
            let target = words.unwrap_or(config.summary_words);
            let outcome = if extractive {
                assistant.summarize_offline(&text, target)
            } else {
                assistant.summarize(&text, target, style).await?
            };
            print_json(&outcome)
        }
        Command::Keywords { doc, count } => {
            let text = read_document(&doc)?;
            let outcome = assistant
                .extract_keywords(&text, count.unwrap_or(config.keyword_count))
                .await;
            print_json(&outcome)
        }
        Command::Cloud { doc, max } => {
            let text = read_document(&doc)?;
            print_json(&analyzer.word_cloud(&text, max.unwrap_or(config.cloud_words)))
        }
        Command::Report(doc) => {
            let text = read_document(&doc)?;
            let report = analyzer.report(&text, config.keyword_count, config.cloud_words);
            info!("{}", report.summary());
            print_json(&report)
        }
        Command::Translate { doc, to } => {
            let text = read_document(&doc)?;
            print_json(&model_answer(assistant.translate(&text, &to).await)?)
        }
        Command::Ask { doc, question } => {
            let text = read_document(&doc)?;
            let answer = model_answer(assistant.answer_question(&text, &question).await)?;
            print_json(&serde_json::json!({ "question": question, "answer": answer }))
        }
        Command::Sentiment(doc) => {
            let text = read_document(&doc)?;
            print_json(&assistant.analyze_sentiment(&text).await)
        }
        Command::Titles { doc, count } => {
            let text = read_document(&doc)?;
            let titles = model_answer(assistant.generate_titles(&text, count).await)?;
            print_json(&serde_json::json!({ "titles": titles }))
        }
        Command::Sections { doc, words } => {
            let text = read_document(&doc)?;
            print_json(&model_answer(assistant.summarize_by_sections(&text, words).await)?)
        }
    }
}

/// Commands without a deterministic fallback report model failures with a hint.
fn model_answer<T>(result: Result<T, AppError>) -> Result<T> {
    result.map_err(|e| {
        if e.is_model_failure() {
            anyhow!(e).context("The language model could not answer (is OPENAI_API_KEY set?)")
        } else {
            e.into()
        }
    })
}

fn read_document(doc: &DocumentArg) -> Result<String> {
    text_extract::extract_text_from_path(&doc.file)
        .with_context(|| format!("Failed to read {}", doc.file.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
