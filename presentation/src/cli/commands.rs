//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for docqa
#[derive(Parser, Debug)]
#[command(name = "docqa")]
#[command(author, version, about = "Ask questions about the content of a web page")]
#[command(long_about = r#"
docqa fetches a web page, extracts its readable text, and answers your
questions about it using an OpenAI-compatible chat-completion model.

How to use:
1. Enter your API key when prompted (input is hidden)
2. Fetch a page:  /fetch https://example.com/article
3. Ask anything about it; each question is answered from that page only

Limitations:
- HTML pages work best; PDFs and other binary formats are not supported
- Only the first ~4000 characters of a page are used
- A valid API key is required to get answers

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./docqa.toml        Project-level config
3. ~/.config/docqa/config.toml   Global config

Example:
  docqa
  docqa --url https://example.com/article "What is this page about?"
  docqa --model gpt-4o-mini --transcript session.jsonl
"#)]
pub struct Cli {
    /// Fetch this page and exit instead of starting the interactive session
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Question to answer about the page given with --url
    #[arg(requires = "url")]
    pub question: Option<String>,

    /// Model identifier (overrides [completion] model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write diagnostic logs to daily files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Append a JSONL transcript of the session to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}
