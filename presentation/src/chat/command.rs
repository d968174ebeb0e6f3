//! Parsing of REPL input lines

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    /// `/fetch <url>`; the URL may be empty, which fails validation later
    Fetch(&'a str),
    Preview,
    Key,
    Help,
    Quit,
    /// Any other `/word`
    Unknown(&'a str),
    /// Anything not starting with `/`, or the text after `/ask`
    Question(&'a str),
    Empty,
}

impl<'a> ReplCommand<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ReplCommand::Empty;
        }
        if !line.starts_with('/') {
            return ReplCommand::Question(line);
        }

        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        match command {
            "/ask" | "/a" if argument.is_empty() => ReplCommand::Empty,
            "/ask" | "/a" => ReplCommand::Question(argument),
            "/fetch" | "/f" => ReplCommand::Fetch(argument),
            "/preview" | "/p" => ReplCommand::Preview,
            "/key" => ReplCommand::Key,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_takes_trimmed_argument() {
        assert_eq!(
            ReplCommand::parse("/fetch   https://example.com/article  "),
            ReplCommand::Fetch("https://example.com/article")
        );
        assert_eq!(ReplCommand::parse("/fetch"), ReplCommand::Fetch(""));
    }

    #[test]
    fn test_plain_text_is_a_question() {
        assert_eq!(
            ReplCommand::parse("  What color is the sky?"),
            ReplCommand::Question("What color is the sky?")
        );
    }

    #[test]
    fn test_ask_allows_leading_slash() {
        assert_eq!(
            ReplCommand::parse("/ask /etc/hosts is mentioned where?"),
            ReplCommand::Question("/etc/hosts is mentioned where?")
        );
        assert_eq!(
            ReplCommand::parse("/a  What is /fetch?"),
            ReplCommand::Question("What is /fetch?")
        );
        assert_eq!(ReplCommand::parse("/ask   "), ReplCommand::Empty);
    }

    #[test]
    fn test_aliases_and_unknown() {
        assert_eq!(ReplCommand::parse("/q"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/?"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("/preview"), ReplCommand::Preview);
        assert_eq!(ReplCommand::parse("/key"), ReplCommand::Key);
        assert_eq!(ReplCommand::parse("/models x"), ReplCommand::Unknown("/models"));
        assert_eq!(ReplCommand::parse("   "), ReplCommand::Empty);
    }
}
