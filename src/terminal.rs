use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::commands::{parse_command, Command};
use crate::design::DesignStore;
use crate::errors::{Result, TerminalError, TerminalErrorType};
use crate::locations;
use crate::session::Session;
use crate::vfs::{default_tree, Vfs};

/// Output of the special `clear` command. The caller owns the scrollback and
/// wipes it when it sees this value; the terminal itself has no display
/// state to clear.
pub(crate) const CLEAR: &str = "CLEAR";

const HELP_TEXT: &str = "Available commands:
  System:
    help          - Show this help message
    clear         - Clear terminal screen
    whoami        - Display current user
    date          - Show current date and time
    uname         - Show system information

  File Operations:
    ls            - List directory contents
    pwd           - Print working directory
    cd            - Change directory
    mkdir         - Create directory
    touch         - Create empty file
    cat           - Display file contents
    rm            - Remove file

  Design System:
    restore-design - Restore default design system
    undo-design    - Revert to previous design
    show-design    - Show current design system configuration

  Other:
    version       - Show CLI version
    status        - Show system status";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommandOutput {
    pub(crate) output: String,
    #[serde(default)]
    pub(crate) is_error: bool,
}

impl CommandOutput {
    fn ok(output: impl Into<String>) -> CommandOutput {
        CommandOutput {
            output: output.into(),
            is_error: false,
        }
    }

    fn error(message: impl Into<String>) -> CommandOutput {
        CommandOutput {
            output: message.into(),
            is_error: true,
        }
    }
}

/// One simulated terminal: a fixed file tree, a working path, and a handle
/// to the design store. Every `execute` call runs to completion and returns
/// a result value; failures are folded into the result, never raised.
pub(crate) struct Terminal {
    session: Session,
    vfs: Vfs,
    designs: DesignStore,
}

impl Terminal {
    pub(crate) fn new(designs: DesignStore) -> Terminal {
        Terminal {
            session: Session::new(),
            vfs: default_tree(),
            designs,
        }
    }

    pub(crate) fn execute(&mut self, line: &str) -> CommandOutput {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => return CommandOutput::error(e.message),
        };

        match command {
            Command::Help => CommandOutput::ok(HELP_TEXT),
            Command::Pwd => CommandOutput::ok(self.session.current_path()),
            Command::Ls(path) => self.list(path),
            Command::Cd(target) => self.change_dir(target),
            Command::Whoami => CommandOutput::ok("admin"),
            Command::Date => CommandOutput::ok(chrono::Local::now().to_string()),
            Command::Uname => CommandOutput::ok("Protocol Health OS v1.0.0 x86_64"),
            Command::Cat(filename) => self.read_file(&filename),
            Command::Mkdir(dir) => CommandOutput::ok(format!("Created directory: {}", dir)),
            Command::Touch(filename) => CommandOutput::ok(format!("Created file: {}", filename)),
            Command::Rm(name) => CommandOutput::ok(format!("Removed: {}", name)),
            Command::Clear => CommandOutput::ok(CLEAR),
            Command::Version => CommandOutput::ok("Protocol Health CLI v1.0.0"),
            Command::Status => CommandOutput::ok("All systems operational"),
            Command::RestoreDesign => self.restore_design(),
            Command::UndoDesign => self.undo_design(),
            Command::ShowDesign => self.show_design(),
        }
    }

    fn list(&self, path: Option<String>) -> CommandOutput {
        let path = path.as_deref().unwrap_or_else(|| self.session.current_path());
        match self.vfs.resolve_dir(path) {
            Ok(dir) => {
                let lines = dir
                    .children()
                    .map(|(name, child)| {
                        let prefix = if child.is_directory() { 'd' } else { '-' };
                        format!("{}rw-r--r--  {}", prefix, name)
                    })
                    .collect::<Vec<String>>();
                CommandOutput::ok(lines.join("\n"))
            }
            Err(e) => CommandOutput::error(e.message),
        }
    }

    fn change_dir(&mut self, target: Option<String>) -> CommandOutput {
        match target.as_deref() {
            None => self.session.reset(),
            Some("..") => self.session.pop(),
            Some(target) => self.session.enter(target),
        }
        CommandOutput::ok("")
    }

    fn read_file(&self, filename: &str) -> CommandOutput {
        match self.vfs.read_file(self.session.current_path(), filename) {
            Ok(content) => CommandOutput::ok(content),
            Err(e) => CommandOutput::error(e.message),
        }
    }

    fn restore_design(&self) -> CommandOutput {
        match self.designs.restore_default() {
            Ok(()) => CommandOutput::ok(
                "Default design system restored successfully. Previous design backed up.",
            ),
            Err(e) => {
                CommandOutput::error(format!("Error restoring default design: {}", e.message))
            }
        }
    }

    fn undo_design(&self) -> CommandOutput {
        match self.designs.undo_restore() {
            Ok(Some(_)) => CommandOutput::ok("Previous design restored from backup"),
            Ok(None) => CommandOutput::ok("No backup design found"),
            Err(e) => CommandOutput::error(format!("Error restoring backup design: {}", e.message)),
        }
    }

    fn show_design(&self) -> CommandOutput {
        match self.designs.render_current() {
            Ok(rendered) => CommandOutput::ok(rendered),
            Err(e) => {
                CommandOutput::error(format!("Error reading design configuration: {}", e.message))
            }
        }
    }
}

/// Owns the live terminal sessions for the service layer. Sessions are
/// created on demand and identified by uuid; they all share one design
/// store but nothing else.
pub(crate) struct TerminalManager {
    terminals: HashMap<Uuid, Terminal>,
    designs: DesignStore,
}

impl TerminalManager {
    pub(crate) fn new() -> Result<TerminalManager> {
        let designs = DesignStore::open(&locations::get_design_db_path())?;
        Ok(TerminalManager {
            terminals: HashMap::new(),
            designs,
        })
    }

    #[cfg(test)]
    pub(crate) fn new_temporary() -> TerminalManager {
        TerminalManager {
            terminals: HashMap::new(),
            designs: DesignStore::temporary(),
        }
    }

    pub(crate) fn create_terminal(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.terminals.insert(id, Terminal::new(self.designs.clone()));
        id
    }

    pub(crate) fn execute(&mut self, id: &Uuid, line: &str) -> Result<CommandOutput> {
        match self.terminals.get_mut(id) {
            Some(terminal) => Ok(terminal.execute(line)),
            None => Err(TerminalError::new(
                TerminalErrorType::NotFound,
                format!("No terminal session with id {}", id),
            )),
        }
    }

    pub(crate) fn designs(&self) -> &DesignStore {
        &self.designs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DEFAULT_DESIGN;

    fn terminal() -> Terminal {
        Terminal::new(DesignStore::temporary())
    }

    #[test]
    fn pwd_starts_at_home() {
        let mut term = terminal();
        let result = term.execute("pwd");
        assert_eq!(result.output, "/home/user");
        assert!(!result.is_error);
    }

    #[test]
    fn pwd_is_idempotent() {
        let mut term = terminal();
        assert_eq!(term.execute("pwd"), term.execute("pwd"));
    }

    #[test]
    fn cd_appends_relative_targets() {
        let mut term = terminal();
        assert_eq!(term.execute("cd foo").output, "");
        assert_eq!(term.execute("pwd").output, "/home/user/foo");
    }

    #[test]
    fn cd_replaces_with_absolute_targets() {
        let mut term = terminal();
        term.execute("cd /abs");
        assert_eq!(term.execute("pwd").output, "/abs");
    }

    #[test]
    fn cd_dotdot_pops_one_segment() {
        let mut term = terminal();
        term.execute("cd ..");
        assert_eq!(term.execute("pwd").output, "/home");
    }

    #[test]
    fn cd_dotdot_at_root_stays_at_root() {
        let mut term = terminal();
        term.execute("cd /");
        term.execute("cd ..");
        assert_eq!(term.execute("pwd").output, "/");
    }

    #[test]
    fn bare_cd_resets_to_home() {
        let mut term = terminal();
        term.execute("cd /var/log");
        term.execute("cd");
        assert_eq!(term.execute("pwd").output, "/home/user");
    }

    #[test]
    fn cd_never_validates_the_target() {
        let mut term = terminal();
        let result = term.execute("cd nowhere/at/all");
        assert!(!result.is_error);
        assert_eq!(term.execute("pwd").output, "/home/user/nowhere/at/all");
    }

    #[test]
    fn ls_reports_missing_directories() {
        let mut term = terminal();
        let result = term.execute("ls /nonexistent");
        assert!(result.is_error);
        assert_eq!(result.output, "Directory not found: /nonexistent");
    }

    #[test]
    fn ls_lists_the_configured_children() {
        let mut term = terminal();
        let result = term.execute("ls /home/user");
        assert!(!result.is_error);
        assert_eq!(
            result.output,
            "-rw-r--r--  config.json\ndrw-r--r--  documents"
        );
    }

    #[test]
    fn ls_defaults_to_the_working_directory() {
        let mut term = terminal();
        term.execute("cd documents");
        assert_eq!(term.execute("ls").output, "-rw-r--r--  health-report.txt");
    }

    #[test]
    fn ls_from_a_dangling_working_directory_names_it() {
        let mut term = terminal();
        term.execute("cd ghost");
        let result = term.execute("ls");
        assert!(result.is_error);
        assert_eq!(result.output, "Directory not found: /home/user/ghost");
    }

    #[test]
    fn cat_reads_a_file_in_the_working_directory() {
        let mut term = terminal();
        let result = term.execute("cat config.json");
        assert!(!result.is_error);
        assert_eq!(
            result.output,
            "{\n  \"theme\": \"dark\",\n  \"notifications\": true\n}"
        );
    }

    #[test]
    fn cat_reports_missing_files() {
        let mut term = terminal();
        let result = term.execute("cat missing.txt");
        assert!(result.is_error);
        assert_eq!(result.output, "File not found: missing.txt");
    }

    #[test]
    fn cat_rejects_directories() {
        let mut term = terminal();
        let result = term.execute("cat documents");
        assert!(result.is_error);
        assert_eq!(result.output, "File not found: documents");
    }

    #[test]
    fn cat_without_argument_is_a_usage_error() {
        let mut term = terminal();
        let result = term.execute("cat");
        assert!(result.is_error);
        assert_eq!(result.output, "Usage: cat <filename>");
    }

    #[test]
    fn mkdir_reports_success_without_mutating_the_tree() {
        let mut term = terminal();
        let result = term.execute("mkdir x");
        assert!(!result.is_error);
        assert_eq!(result.output, "Created directory: x");
        assert!(!term.execute("ls /home/user").output.contains('x'));
    }

    #[test]
    fn rm_reports_success_without_mutating_the_tree() {
        let mut term = terminal();
        assert_eq!(term.execute("rm config.json").output, "Removed: config.json");
        assert!(!term.execute("cat config.json").is_error);
    }

    #[test]
    fn touch_reports_success_without_mutating_the_tree() {
        let mut term = terminal();
        assert_eq!(term.execute("touch note.txt").output, "Created file: note.txt");
        assert!(term.execute("cat note.txt").is_error);
    }

    #[test]
    fn unknown_commands_are_errors() {
        let mut term = terminal();
        let result = term.execute("bogus");
        assert!(result.is_error);
        assert_eq!(result.output, "Command not found: bogus");
    }

    #[test]
    fn clear_returns_the_wipe_marker() {
        let mut term = terminal();
        assert_eq!(term.execute("clear").output, CLEAR);
    }

    #[test]
    fn fixed_outputs() {
        let mut term = terminal();
        assert_eq!(term.execute("whoami").output, "admin");
        assert_eq!(term.execute("uname").output, "Protocol Health OS v1.0.0 x86_64");
        assert_eq!(term.execute("version").output, "Protocol Health CLI v1.0.0");
        assert_eq!(term.execute("status").output, "All systems operational");
    }

    #[test]
    fn date_produces_output() {
        let mut term = terminal();
        let result = term.execute("date");
        assert!(!result.is_error);
        assert!(!result.output.is_empty());
    }

    #[test]
    fn help_catalogs_every_command() {
        let mut term = terminal();
        let help = term.execute("help").output;
        for name in [
            "help", "clear", "whoami", "date", "uname", "ls", "pwd", "cd", "mkdir", "touch",
            "cat", "rm", "restore-design", "undo-design", "show-design", "version", "status",
        ] {
            assert!(help.contains(name), "help is missing {}", name);
        }
    }

    #[test]
    fn restore_design_reports_success() {
        let mut term = terminal();
        let result = term.execute("restore-design");
        assert!(!result.is_error);
        assert_eq!(
            result.output,
            "Default design system restored successfully. Previous design backed up."
        );
    }

    #[test]
    fn undo_design_without_backup_is_informational() {
        let mut term = terminal();
        let result = term.execute("undo-design");
        assert!(!result.is_error);
        assert_eq!(result.output, "No backup design found");
    }

    #[test]
    fn show_design_renders_the_stock_document_by_default() {
        let mut term = terminal();
        let result = term.execute("show-design");
        assert!(!result.is_error);
        let shown: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(shown, *DEFAULT_DESIGN);
    }

    #[test]
    fn output_serializes_with_the_wire_field_names() {
        let result = CommandOutput::error("Command not found: nope");
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            "{\"output\":\"Command not found: nope\",\"isError\":true}"
        );
    }

    #[test]
    fn manager_routes_lines_to_the_right_session() {
        let mut manager = TerminalManager::new_temporary();
        let first = manager.create_terminal();
        let second = manager.create_terminal();

        manager.execute(&first, "cd /var").unwrap();
        assert_eq!(manager.execute(&first, "pwd").unwrap().output, "/var");
        assert_eq!(manager.execute(&second, "pwd").unwrap().output, "/home/user");
    }

    #[test]
    fn manager_rejects_unknown_sessions() {
        let mut manager = TerminalManager::new_temporary();
        let err = manager.execute(&Uuid::new_v4(), "pwd").unwrap_err();
        assert_eq!(err.error_type, TerminalErrorType::NotFound);
    }
}
