//! Line-oriented command input.
//!
//! The binary reads one command per line from stdin and turns it into
//! [`Event`]s. A few commands (`suggest`, `help`) only produce output and never
//! reach the state machine.
//!
//! # Example
//!
//! ```rust
//! use pixgrid::app::Event;
//! use pixgrid::ui::{parse_command, Command};
//!
//! assert_eq!(
//!     parse_command("search mountains"),
//!     Some(Command::Events(vec![
//!         Event::SetSearchTerm("mountains".to_string()),
//!         Event::SubmitSearch,
//!     ]))
//! );
//! assert_eq!(parse_command("   "), None);
//! ```

use crate::app::Event;
use crate::domain::FilterCategory;

/// Shown by the `help` command.
pub const HELP_TEXT: &str = "\
commands:
  search <term>      search for <term> (without a term: submit the current input)
  type <text>        edit the search input without searching
  submit             search for the current input
  filter <category>  all, nature, technology, people, animals, travel
  more               load the next page
  history <n>        search again for recent search number <n>
  feed               clear the search and show the latest photos
  suggest [text]     recent searches matching text (default: current input)
  help               show this help
  quit               exit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Events to dispatch in order.
    Events(Vec<Event>),
    /// List recent searches matching the text; `None` means the current draft.
    Suggest(Option<String>),
    Help,
    /// Unrecognized or malformed input, with a message for the user.
    Invalid(String),
}

/// Parses one input line. Blank lines yield `None`.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    let command = match verb.to_lowercase().as_str() {
        "search" | "s" if rest.is_empty() => Command::Events(vec![Event::SubmitSearch]),
        "search" | "s" => Command::Events(vec![
            Event::SetSearchTerm(rest.to_string()),
            Event::SubmitSearch,
        ]),
        "type" | "t" => Command::Events(vec![Event::SetSearchTerm(rest.to_string())]),
        "submit" => Command::Events(vec![Event::SubmitSearch]),
        "filter" | "f" => match rest.parse::<FilterCategory>() {
            Ok(category) => Command::Events(vec![Event::SelectFilter(category)]),
            Err(message) => Command::Invalid(message),
        },
        "more" | "m" => Command::Events(vec![Event::LoadMore]),
        "history" | "h" => match rest.parse::<usize>() {
            Ok(number) if number >= 1 => Command::Events(vec![Event::SelectFromHistory(number - 1)]),
            _ => Command::Invalid(format!("expected a history number starting at 1, got '{rest}'")),
        },
        "feed" => Command::Events(vec![Event::ClearSearch]),
        "suggest" => Command::Suggest((!rest.is_empty()).then(|| rest.to_string())),
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Events(vec![Event::Quit]),
        other => Command::Invalid(format!("unknown command '{other}', type 'help' for a list")),
    };

    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_intents() {
        assert_eq!(
            parse_command("filter Travel"),
            Some(Command::Events(vec![Event::SelectFilter(FilterCategory::Travel)]))
        );
        assert_eq!(parse_command("more"), Some(Command::Events(vec![Event::LoadMore])));
        assert_eq!(
            parse_command("history 2"),
            Some(Command::Events(vec![Event::SelectFromHistory(1)]))
        );
        assert_eq!(parse_command("feed"), Some(Command::Events(vec![Event::ClearSearch])));
        assert_eq!(
            parse_command("type  red  fox "),
            Some(Command::Events(vec![Event::SetSearchTerm("red  fox".to_string())]))
        );
        assert_eq!(parse_command("q"), Some(Command::Events(vec![Event::Quit])));
    }

    #[test]
    fn suggest_defaults_to_current_input() {
        assert_eq!(parse_command("suggest"), Some(Command::Suggest(None)));
        assert_eq!(parse_command("suggest mo"), Some(Command::Suggest(Some("mo".to_string()))));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(parse_command("history 0"), Some(Command::Invalid(_))));
        assert!(matches!(parse_command("history x"), Some(Command::Invalid(_))));
        assert!(matches!(parse_command("filter cats"), Some(Command::Invalid(_))));
        assert!(matches!(parse_command("dance"), Some(Command::Invalid(_))));
    }
}
