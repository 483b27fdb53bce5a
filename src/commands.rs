use crate::errors::{Result, TerminalError, TerminalErrorType};

/// The full command set the terminal understands. Anything the parser can
/// produce has a handler; anything else never gets past it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    Help,
    Pwd,
    Ls(Option<String>),
    Cd(Option<String>),
    Whoami,
    Date,
    Uname,
    Cat(String),
    Mkdir(String),
    Touch(String),
    Rm(String),
    Clear,
    Version,
    Status,
    RestoreDesign,
    UndoDesign,
    ShowDesign,
}

pub(crate) fn parse_command(line: &str) -> Result<Command> {
    // One command per line. The first whitespace-delimited token is the
    // command name (case-insensitive), the rest are positional arguments
    // taken verbatim. No quoting or flag syntax.
    let mut tokens = line.split_whitespace();
    let cmd = tokens.next().unwrap_or("").to_lowercase();
    let args = tokens.collect::<Vec<&str>>();

    match cmd.as_str() {
        "help" => Ok(Command::Help),
        "pwd" => Ok(Command::Pwd),
        "ls" => Ok(Command::Ls(args.first().map(|arg| arg.to_string()))),
        "cd" => Ok(Command::Cd(args.first().map(|arg| arg.to_string()))),
        "whoami" => Ok(Command::Whoami),
        "date" => Ok(Command::Date),
        "uname" => Ok(Command::Uname),
        "cat" => match args.first() {
            Some(filename) => Ok(Command::Cat(filename.to_string())),
            None => Err(usage("Usage: cat <filename>")),
        },
        "mkdir" => match args.first() {
            Some(dir) => Ok(Command::Mkdir(dir.to_string())),
            None => Err(usage("Usage: mkdir <directory>")),
        },
        "touch" => match args.first() {
            Some(filename) => Ok(Command::Touch(filename.to_string())),
            None => Err(usage("Usage: touch <filename>")),
        },
        "rm" => match args.first() {
            Some(filename) => Ok(Command::Rm(filename.to_string())),
            None => Err(usage("Usage: rm <filename>")),
        },
        "clear" => Ok(Command::Clear),
        "version" => Ok(Command::Version),
        "status" => Ok(Command::Status),
        "restore-design" => Ok(Command::RestoreDesign),
        "undo-design" => Ok(Command::UndoDesign),
        "show-design" => Ok(Command::ShowDesign),
        _ => Err(TerminalError::new(
            TerminalErrorType::UnknownCommand,
            format!("Command not found: {}", cmd),
        )),
    }
}

fn usage(message: &str) -> TerminalError {
    TerminalError::new(TerminalErrorType::InvalidUsage, message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_are_case_insensitive() {
        assert_eq!(parse_command("PWD").unwrap(), Command::Pwd);
        assert_eq!(parse_command("Ls /home").unwrap(), Command::Ls(Some("/home".to_string())));
    }

    #[test]
    fn arguments_keep_their_case() {
        assert_eq!(
            parse_command("cat Config.JSON").unwrap(),
            Command::Cat("Config.JSON".to_string())
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_command("   cd   documents   ").unwrap(), Command::Cd(Some("documents".to_string())));
    }

    #[test]
    fn cat_without_argument_is_a_usage_error() {
        let err = parse_command("cat").unwrap_err();
        assert_eq!(err.error_type, TerminalErrorType::InvalidUsage);
        assert_eq!(err.message, "Usage: cat <filename>");
    }

    #[test]
    fn mkdir_touch_rm_require_an_argument() {
        assert_eq!(parse_command("mkdir").unwrap_err().message, "Usage: mkdir <directory>");
        assert_eq!(parse_command("touch").unwrap_err().message, "Usage: touch <filename>");
        assert_eq!(parse_command("rm").unwrap_err().message, "Usage: rm <filename>");
    }

    #[test]
    fn unknown_command_names_the_lowercased_token() {
        let err = parse_command("Bogus now").unwrap_err();
        assert_eq!(err.error_type, TerminalErrorType::UnknownCommand);
        assert_eq!(err.message, "Command not found: bogus");
    }

    #[test]
    fn empty_line_is_an_unknown_command() {
        let err = parse_command("   ").unwrap_err();
        assert_eq!(err.message, "Command not found: ");
    }
}
