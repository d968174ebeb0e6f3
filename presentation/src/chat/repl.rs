//! REPL (Read-Eval-Print Loop) for the interactive document session

use super::command::ReplCommand;
use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use dialoguer::Password;
use dialoguer::theme::ColorfulTheme;
use docqa_application::{DocumentQaWorkflow, NoProgress, ProgressNotifier};
use docqa_domain::{ApiKey, DocumentSession, QaError, Question};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// Reads the API key from the terminal
type SecretReader = fn() -> dialoguer::Result<String>;

fn read_hidden_secret() -> dialoguer::Result<String> {
    Password::with_theme(&ColorfulTheme::default())
        .with_prompt("API key (input hidden)")
        .allow_empty_password(true)
        .interact()
}

/// Interactive document Q&A session
///
/// Owns the [`DocumentSession`] and the API key entered at the terminal.
/// The key stays in memory only; each question hands a copy to a single
/// completion request.
pub struct ChatRepl {
    workflow: DocumentQaWorkflow,
    session: DocumentSession,
    credential: Option<ApiKey>,
    output: OutputConfig,
    repl: ReplConfig,
    read_secret: SecretReader,
}

impl ChatRepl {
    pub fn new(workflow: DocumentQaWorkflow) -> Self {
        Self {
            workflow,
            session: DocumentSession::new(),
            credential: None,
            output: OutputConfig::default(),
            repl: ReplConfig::default(),
            read_secret: read_hidden_secret,
        }
    }

    pub fn with_output_config(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_repl_config(mut self, repl: ReplConfig) -> Self {
        self.repl = repl;
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.repl.show_progress = show;
        self
    }

    #[cfg(test)]
    fn with_secret_reader(mut self, read_secret: SecretReader) -> Self {
        self.read_secret = read_secret;
        self
    }

    /// Run the interactive REPL until `/quit` or Ctrl-D
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("docqa".to_string()),
            DefaultPromptSegment::Empty,
        );

        println!(
            "{}",
            ConsoleFormatter::welcome(self.workflow.answer_use_case().config().model.as_str())
        );
        self.prompt_credential();
        if self.credential.is_none() {
            println!("{}", "No API key entered; use /key before asking.".yellow());
        }

        loop {
            match line_editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    if self.handle_line(&line).await {
                        break;
                    }
                }
                Ok(Signal::CtrlD) => {
                    println!("Bye!");
                    break;
                }
                Ok(_) => {
                    println!("^C");
                    continue;
                }
                Err(err) => {
                    eprintln!("Error: {}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Fetch `url`, print its preview and answer `question` if given.
    ///
    /// Returns the first error so the caller can set the exit status.
    pub async fn run_once(&mut self, url: &str, question: Option<&str>) -> Result<(), QaError> {
        if let Err(e) = self.fetch(url).await {
            eprintln!("{}", ConsoleFormatter::error(&e));
            return Err(e);
        }

        let Some(question) = question.and_then(Question::try_new) else {
            return Ok(());
        };

        match self.ask(&question).await {
            Ok(()) => Ok(()),
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::error(&e));
                Err(e)
            }
        }
    }

    fn line_editor(&self) -> Reedline {
        let line_editor = Reedline::create();

        let Some(path) = self.repl.history_path() else {
            return line_editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => line_editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("History disabled, cannot open {}: {}", path.display(), e);
                line_editor
            }
        }
    }

    /// Handle one input line. Returns true if the session should end.
    async fn handle_line(&mut self, line: &str) -> bool {
        match ReplCommand::parse(line) {
            ReplCommand::Empty => {}
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => println!("{}", ConsoleFormatter::help()),
            ReplCommand::Key => self.prompt_credential(),
            ReplCommand::Preview => match self.session.current() {
                Some(document) if !document.text.is_empty() => println!(
                    "{}",
                    ConsoleFormatter::preview(document, self.output.preview_chars)
                ),
                _ => println!("{}", ConsoleFormatter::error(&QaError::MissingDocument)),
            },
            ReplCommand::Fetch(url) => {
                if let Err(e) = self.fetch(url).await {
                    println!("{}", ConsoleFormatter::error(&e));
                }
            }
            ReplCommand::Question(text) => {
                if let Some(question) = Question::try_new(text)
                    && let Err(e) = self.ask(&question).await
                {
                    println!("{}", ConsoleFormatter::error(&e));
                }
            }
            ReplCommand::Unknown(command) => {
                println!("Unknown command: {}", command);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn fetch(&mut self, url: &str) -> Result<(), QaError> {
        let progress = self.progress();
        let document = self
            .workflow
            .fetch(&mut self.session, url, progress.as_ref())
            .await?;
        println!(
            "{}",
            ConsoleFormatter::fetched(document, self.output.preview_chars)
        );
        Ok(())
    }

    async fn ask(&mut self, question: &Question) -> Result<(), QaError> {
        // Checked before the key prompt so a missing page is reported first
        self.session.require_text()?;

        if self.credential.is_none() {
            self.prompt_credential();
        }
        let Some(credential) = self.credential.clone() else {
            return Err(QaError::MissingCredential);
        };

        let progress = self.progress();
        let answer = self
            .workflow
            .ask(&self.session, question, credential, progress.as_ref())
            .await?;
        println!("\n{}", ConsoleFormatter::answer(&answer));
        Ok(())
    }

    /// Ask for the API key with hidden input. Blank input keeps the current key.
    fn prompt_credential(&mut self) {
        match (self.read_secret)() {
            Ok(secret) => {
                if let Some(key) = ApiKey::try_new(secret) {
                    self.credential = Some(key);
                    println!("{}", "API key set for this session.".green());
                }
            }
            Err(e) => eprintln!("{} {}", "Could not read API key:".red(), e),
        }
    }

    fn progress(&self) -> Box<dyn ProgressNotifier> {
        if self.repl.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        }
    }
}
