//! Interactive session module
//!
//! Provides the reedline-based REPL and the one-shot runner.

mod command;
mod repl;

pub use command::ReplCommand;
pub use repl::ChatRepl;
