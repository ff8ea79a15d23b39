//! Line commands accepted by the interactive console.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add { name: String, description: String },
    Edit { id: String },
    Name(String),
    Desc(String),
    Save,
    Cancel,
    Remove { id: String },
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  list                          refetch and show all items
  add <name> | <description>    create an item
  edit <id>                     open the edit view for an item
  name <value>                  change the name in the edit view
  desc <value>                  change the description in the edit view
  save                          send the edit view to the server
  cancel                        close the edit view
  rm <id>                       delete an item
  help                          show this help
  quit                          exit";

fn required(rest: &str, what: &str) -> Result<String, String> {
    let value = rest.trim();
    if value.is_empty() {
        Err(format!("Missing {what}"))
    } else {
        Ok(value.to_string())
    }
}

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    match head.to_lowercase().as_str() {
        "list" | "ls" => Ok(Command::List),
        "add" => {
            let (name, description) = rest
                .split_once('|')
                .ok_or_else(|| "Usage: add <name> | <description>".to_string())?;
            Ok(Command::Add {
                name: required(name, "name")?,
                description: required(description, "description")?,
            })
        }
        "edit" => Ok(Command::Edit {
            id: required(rest, "id")?,
        }),
        "name" => Ok(Command::Name(required(rest, "name")?)),
        "desc" | "description" => Ok(Command::Desc(required(rest, "description")?)),
        "save" => Ok(Command::Save),
        "cancel" => Ok(Command::Cancel),
        "rm" | "delete" => Ok(Command::Remove {
            id: required(rest, "id")?,
        }),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "" => Err("Empty command".to_string()),
        other => Err(format!("Unknown command: {other} (try 'help')")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        assert_eq!(
            parse_command("add Mouse | Wireless mouse"),
            Ok(Command::Add {
                name: "Mouse".to_string(),
                description: "Wireless mouse".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_add_without_separator() {
        assert!(parse_command("add Mouse").is_err());
    }

    #[test]
    fn test_parse_add_with_empty_description() {
        assert_eq!(
            parse_command("add Mouse | "),
            Err("Missing description".to_string())
        );
    }

    #[test]
    fn test_parse_edit_flow() {
        assert_eq!(
            parse_command("edit 2"),
            Ok(Command::Edit { id: "2".to_string() })
        );
        assert_eq!(
            parse_command("name  New name "),
            Ok(Command::Name("New name".to_string()))
        );
        assert_eq!(
            parse_command("desc A longer text"),
            Ok(Command::Desc("A longer text".to_string()))
        );
        assert_eq!(parse_command("SAVE"), Ok(Command::Save));
        assert_eq!(parse_command("cancel"), Ok(Command::Cancel));
    }

    #[test]
    fn test_parse_remove_requires_id() {
        assert!(parse_command("rm").is_err());
        assert_eq!(
            parse_command("rm 3"),
            Ok(Command::Remove { id: "3".to_string() })
        );
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_command("  list "), Ok(Command::List));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert!(parse_command("").is_err());
        assert!(parse_command("frobnicate").is_err());
    }
}
