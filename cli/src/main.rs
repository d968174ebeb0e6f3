//! CLI entrypoint for docqa
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use docqa_application::{
    AnswerQuestionUseCase, ConversationLogger, DocumentQaWorkflow, ExtractDocumentUseCase,
    NoConversationLogger,
};
use docqa_domain::Model;
use docqa_infrastructure::{
    ConfigLoader, FileConfig, HtmlTextExtractor, HttpDocumentSource, JsonlConversationLogger,
    OpenAiLlmGateway,
};
use docqa_presentation::{ChatRepl, Cli, OutputConfig, ReplConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(&cli);

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting docqa");

    // === Dependency Injection ===
    let source = Arc::new(HttpDocumentSource::new());
    let extractor = Arc::new(HtmlTextExtractor::new());
    let gateway = Arc::new(match &config.completion.base_url {
        Some(base_url) => OpenAiLlmGateway::new(base_url.as_str()),
        None => OpenAiLlmGateway::default(),
    });

    let mut answer_config = config.answer_config();
    if let Some(model) = &cli.model {
        answer_config = answer_config.with_model(model.parse::<Model>().unwrap_or_default());
    }

    let workflow = DocumentQaWorkflow::new(
        ExtractDocumentUseCase::new(source, extractor),
        AnswerQuestionUseCase::new(gateway).with_config(answer_config),
    )
    .with_conversation_logger(transcript_logger(&cli, &config));

    let mut repl = ChatRepl::new(workflow)
        .with_output_config(OutputConfig {
            color: config.output.color && !cli.no_color,
            preview_chars: config.output.preview_chars,
        })
        .with_repl_config(ReplConfig {
            show_progress: config.repl.show_progress,
            history_file: config.repl.history_file.clone(),
        })
        .with_progress(config.repl.show_progress && !cli.quiet);

    // One-shot mode
    if let Some(url) = &cli.url {
        return Ok(match repl.run_once(url, cli.question.as_deref()).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        });
    }

    repl.run().await?;
    Ok(ExitCode::SUCCESS)
}

/// Map `-v` count to a filter; `--log-dir` sends output to daily files.
fn init_logging(cli: &Cli) -> Option<WorkerGuard> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match &cli.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "docqa.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }

    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }

    let config = ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// `--transcript` wins over `[logging] transcript`; no path means no transcript.
fn transcript_logger(cli: &Cli, config: &FileConfig) -> Arc<dyn ConversationLogger> {
    let path = cli
        .transcript
        .clone()
        .or_else(|| config.logging.transcript.as_ref().map(PathBuf::from));

    match path.and_then(JsonlConversationLogger::open) {
        Some(logger) => {
            info!("Writing transcript to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    }
}
