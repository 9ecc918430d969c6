//! Shell command parsing

use std::str::FromStr;

use crate::error::ShellError;
use crate::router::NavLink;

pub const HELP: &str = "\
Commands:
  go <page>             open a page: home, customer-list, add-customer, policy-list, add-policy
  edit <row>            edit the customer on that row of the customer list
  set <field> <value>   fill in a form field, e.g. set mobileNumber 9876543210
  submit                submit the current form
  cancel                leave the current form
  retry                 fetch the current page's data again
  show                  redraw the current page
  help                  show this text
  quit                  exit";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(NavLink),
    Edit(String),
    Set { field: String, value: String },
    Submit,
    Cancel,
    Retry,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parses a line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Command>, ShellError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "go" if rest.is_empty() => Err(ShellError::Usage("go <page>")),
            "go" => rest.parse().map(Command::Go),
            "edit" if rest.is_empty() => Err(ShellError::Usage("edit <row>")),
            "edit" => Ok(Command::Edit(rest.to_string())),
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    return Err(ShellError::Usage("set <field> <value>"));
                }
                Ok(Command::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
            "submit" => Ok(Command::Submit),
            "cancel" => Ok(Command::Cancel),
            "retry" => Ok(Command::Retry),
            "show" | "ls" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ShellError::UnknownCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_go() {
        assert_eq!(
            Command::parse("go add-policy").unwrap(),
            Some(Command::Go(NavLink::AddPolicy))
        );
        assert_eq!(
            "go somewhere".parse::<Command>(),
            Err(ShellError::UnknownPage("somewhere".into()))
        );
        assert_eq!("go".parse::<Command>(), Err(ShellError::Usage("go <page>")));
    }

    #[test]
    fn test_set_keeps_spaces_in_value() {
        assert_eq!(
            "set lastName  van der Berg ".parse::<Command>().unwrap(),
            Command::Set {
                field: "lastName".into(),
                value: "van der Berg".into()
            }
        );
    }

    #[test]
    fn test_set_without_value_clears() {
        assert_eq!(
            "set mobileNumber".parse::<Command>().unwrap(),
            Command::Set {
                field: "mobileNumber".into(),
                value: String::new()
            }
        );
    }

    #[test]
    fn test_unknown() {
        assert!(matches!(
            "delete 3".parse::<Command>(),
            Err(ShellError::UnknownCommand(_))
        ));
    }
}
