//! Console output formatter for fetched documents and answers

use colored::Colorize;
use docqa_domain::{Answer, LoadedDocument, Model, QaError};

/// Formats session output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Confirmation shown after a successful fetch, followed by a preview
    pub fn fetched(document: &LoadedDocument, preview_chars: usize) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} ({} characters)\n",
            "Fetched".green().bold(),
            document.url,
            document.text.char_count()
        ));

        if document.text.is_empty() {
            output.push_str(&format!(
                "{}\n",
                "The page contains no readable text; questions about it cannot be answered."
                    .yellow()
            ));
        } else {
            output.push_str(&Self::preview(document, preview_chars));
        }

        output
    }

    /// The first `preview_chars` characters of the document
    pub fn preview(document: &LoadedDocument, preview_chars: usize) -> String {
        format!(
            "{}\n{}\n{}\n",
            Self::section_header("Document preview"),
            Self::indent(&document.text.preview(preview_chars), "  "),
            "-".repeat(40).dimmed()
        )
    }

    /// The model's answer, printed verbatim
    pub fn answer(answer: &Answer) -> String {
        format!("{}\n{}\n", "Answer:".cyan().bold(), answer.text())
    }

    /// Inline error message; the session continues afterwards
    pub fn error(error: &QaError) -> String {
        let hint = match error {
            QaError::InvalidUrl(_) => Some("Usage: /fetch https://example.com/article"),
            QaError::MissingDocument => Some("Use /fetch <url> to load a page."),
            QaError::MissingCredential => Some("Use /key to enter one."),
            QaError::Auth(_) => Some("Use /key to enter a different API key."),
            QaError::Parse(_) => Some("HTML pages work best; PDFs are not supported."),
            QaError::Fetch(_) | QaError::Service(_) => None,
        };

        let message = match error {
            QaError::MissingDocument | QaError::MissingCredential => {
                error.to_string().yellow().to_string()
            }
            _ => error.to_string().red().to_string(),
        };

        match hint {
            Some(hint) => format!("{}\n{}", message, hint.dimmed()),
            None => message,
        }
    }

    pub fn welcome(model: &str) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&Self::header("docqa - Document Q&A"));
        output.push_str(&format!("\n{} {}\n", "Model:".cyan().bold(), model));
        output.push_str(&Self::commands());
        output
    }

    /// Usage steps, commands and limitations
    pub fn help() -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("How to use"));
        output.push_str("  1. Enter your API key (it is never stored or displayed)\n");
        output.push_str("  2. Fetch a page with /fetch <url>\n");
        output.push_str("  3. Type a question and press Enter\n");

        output.push_str(&Self::commands());

        output.push_str(&Self::section_header("Models"));
        let known: Vec<String> = Model::known_models()
            .iter()
            .map(|model| model.as_str().to_string())
            .collect();
        output.push_str(&format!("  {}\n", known.join(", ")));
        output.push_str("  Other identifiers are passed to the service unchanged (--model or [completion] model)\n");

        output.push_str(&Self::section_header("Limitations"));
        output.push_str("  * HTML pages work best; PDFs are not supported\n");
        output.push_str("  * Only the first ~4000 characters of a page are used\n");
        output.push_str("  * Answers come only from the fetched page\n");
        output.push_str("  * A valid API key is required\n");

        output
    }

    fn commands() -> String {
        let mut output = Self::section_header("Commands");
        for (command, description) in [
            ("/fetch <url>", "Fetch a page (replaces the current one)"),
            ("/ask <question>", "Ask a question, even one starting with /"),
            ("/preview", "Show the start of the current page"),
            ("/key", "Enter a new API key"),
            ("/help", "Show usage and limitations"),
            ("/quit", "Exit"),
        ] {
            output.push_str(&format!("  {:<16} {}\n", command.cyan(), description));
        }
        output.push_str("  Anything else is asked as a question about the current page.\n");
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
