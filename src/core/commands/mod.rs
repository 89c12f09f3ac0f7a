use std::collections::BTreeMap;
use std::io::Write;

mod builtin;
mod cat;
mod cd;
mod files;
mod ls;

pub use builtin::{ClearCommand, EchoCommand, ExitCommand, PwdCommand, UnimplementedCommand};
pub use cat::CatCommand;
pub use cd::CdCommand;
pub use files::{MkdirCommand, TouchCommand};
pub use ls::LsCommand;

use super::session::Session;
use crate::fs::{FileSystem, FsError};

#[derive(Debug)]
pub enum CommandError {
    UnrecognizedCommand(String),
    ArgumentCount {
        command: &'static str,
        expected: &'static str,
        found: usize,
    },
    InvalidDirectory(String),
    FileAccess {
        command: &'static str,
        source: FsError,
    },
    IoError(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::UnrecognizedCommand(cmd) => {
                write!(f, "{}: not a recognized command", cmd)
            }
            CommandError::ArgumentCount {
                command,
                expected,
                found,
            } => write!(f, "{}: expected {}, found {}", command, expected, found),
            CommandError::InvalidDirectory(path) => {
                write!(f, "cd: {}: not a recognized directory", path)
            }
            CommandError::FileAccess { command, source } => write!(f, "{}: {}", command, source),
            CommandError::IoError(err) => write!(f, "wsh: output error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

/// What the dispatch loop should do after a command returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Everything a command may touch, passed in explicitly on every call.
pub struct Context<'a> {
    pub session: &'a mut Session,
    pub fs: &'a dyn FileSystem,
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

pub trait Command {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError>;
}

/// Runs `op` for every argument resolved against the session path.
///
/// Failures do not stop the remaining arguments. All but the last are
/// written to `ctx.err`; the last one is returned to the caller.
fn for_each_target<F>(
    ctx: &mut Context<'_>,
    command: &'static str,
    args: &[String],
    mut op: F,
) -> Result<(), CommandError>
where
    F: FnMut(&mut Context<'_>, &str) -> Result<(), CommandError>,
{
    if args.is_empty() {
        return Err(CommandError::ArgumentCount {
            command,
            expected: "at least 1 argument",
            found: 0,
        });
    }

    let mut last_error = None;
    for arg in args {
        let target = ctx.session.resolve(arg).to_string();
        if let Err(e) = op(ctx, &target) {
            if let Some(previous) = last_error.replace(e) {
                report_partial(ctx, &previous);
            }
        }
    }

    match last_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Prints a failure that does not end the command. A broken `ctx.err`
/// must not stop the remaining arguments, so it falls back to stderr.
fn report_partial(ctx: &mut Context<'_>, error: &CommandError) {
    if writeln!(ctx.err, "{}", error).is_err() {
        eprintln!("{}", error);
    }
}

#[derive(Clone)]
enum CommandType {
    Exit(ExitCommand),
    Echo(EchoCommand),
    Pwd(PwdCommand),
    Ls(LsCommand),
    Cat(CatCommand),
    Cd(CdCommand),
    Touch(TouchCommand),
    Mkdir(MkdirCommand),
    Clear(ClearCommand),
    Unimplemented(UnimplementedCommand),
}

impl Command for CommandType {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(ctx, args),
            CommandType::Echo(cmd) => cmd.execute(ctx, args),
            CommandType::Pwd(cmd) => cmd.execute(ctx, args),
            CommandType::Ls(cmd) => cmd.execute(ctx, args),
            CommandType::Cat(cmd) => cmd.execute(ctx, args),
            CommandType::Cd(cmd) => cmd.execute(ctx, args),
            CommandType::Touch(cmd) => cmd.execute(ctx, args),
            CommandType::Mkdir(cmd) => cmd.execute(ctx, args),
            CommandType::Clear(cmd) => cmd.execute(ctx, args),
            CommandType::Unimplemented(cmd) => cmd.execute(ctx, args),
        }
    }
}

/// The fixed table of built-in commands.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();

        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        commands.insert("echo", CommandType::Echo(EchoCommand::new()));
        commands.insert("pwd", CommandType::Pwd(PwdCommand::new()));
        commands.insert("ls", CommandType::Ls(LsCommand::new()));
        commands.insert("cat", CommandType::Cat(CatCommand::new()));
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("touch", CommandType::Touch(TouchCommand::new()));
        commands.insert("mkdir", CommandType::Mkdir(MkdirCommand::new()));
        commands.insert("clear", CommandType::Clear(ClearCommand::new()));

        for name in ["help", "rm", "rmdir", "grep"] {
            commands.insert(
                name,
                CommandType::Unimplemented(UnimplementedCommand::new(name)),
            );
        }

        Self { commands }
    }

    pub fn execute(
        &self,
        command: &str,
        ctx: &mut Context<'_>,
        args: &[String],
    ) -> Result<Flow, CommandError> {
        match self.commands.get(command) {
            Some(cmd) => cmd.execute(ctx, args),
            None => Err(CommandError::UnrecognizedCommand(command.to_string())),
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn is_implemented(&self, command: &str) -> bool {
        matches!(
            self.commands.get(command),
            Some(cmd) if !matches!(cmd, CommandType::Unimplemented(_))
        )
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    pub struct Outcome {
        pub result: Result<Flow, CommandError>,
        pub out: String,
        pub err: String,
    }

    pub fn run(
        executor: &CommandExecutor,
        session: &mut Session,
        fs: &dyn FileSystem,
        line: &[&str],
    ) -> Outcome {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let args: Vec<String> = line[1..].iter().map(|s| s.to_string()).collect();
        let result = {
            let mut ctx = Context {
                session,
                fs,
                out: &mut out,
                err: &mut err,
            };
            executor.execute(line[0], &mut ctx, &args)
        };
        Outcome {
            result,
            out: String::from_utf8_lossy(&out).into_owned(),
            err: String::from_utf8_lossy(&err).into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::run;
    use super::*;
    use crate::fs::MemoryFs;
    use crate::path::Separator;

    fn setup() -> (CommandExecutor, Session, MemoryFs) {
        let fs = MemoryFs::new(Separator::Slash).with_dir("/home/user");
        (
            CommandExecutor::new(),
            Session::new("/home/user", Separator::Slash),
            fs,
        )
    }

    #[test]
    fn test_table_contents() {
        let executor = CommandExecutor::new();
        for name in [
            "exit", "help", "echo", "pwd", "ls", "cat", "cd", "touch", "mkdir", "rm", "rmdir",
            "grep", "clear",
        ] {
            assert!(executor.is_builtin(name), "{} missing", name);
        }
        assert!(!executor.is_builtin("frobnicate"));
        assert!(!executor.is_builtin(""));
        assert!(executor.is_implemented("cd"));
        assert!(!executor.is_implemented("grep"));
        assert_eq!(executor.names().count(), 13);
    }

    #[test]
    fn test_unrecognized_command() {
        let (executor, mut session, fs) = setup();
        let outcome = run(&executor, &mut session, &fs, &["frobnicate"]);
        let err = outcome.result.unwrap_err();
        assert!(matches!(err, CommandError::UnrecognizedCommand(_)));
        assert_eq!(err.to_string(), "frobnicate: not a recognized command");
        assert_eq!(session.current_path(), "/home/user");
    }

    #[test]
    fn test_stubs_are_distinct_from_unrecognized() {
        let (executor, mut session, fs) = setup();
        for name in ["help", "rm", "rmdir", "grep"] {
            let outcome = run(&executor, &mut session, &fs, &[name, "x"]);
            assert_eq!(outcome.result.unwrap(), Flow::Continue);
            assert_eq!(outcome.out, format!("{}: not yet implemented\n", name));
        }
    }

    #[test]
    fn test_error_display_is_single_line() {
        let errors = vec![
            CommandError::UnrecognizedCommand("x".to_string()),
            CommandError::ArgumentCount {
                command: "cd",
                expected: "at most 1 argument",
                found: 2,
            },
            CommandError::InvalidDirectory("/nope".to_string()),
            CommandError::FileAccess {
                command: "cat",
                source: FsError::NotFound("/a".to_string()),
            },
        ];

        for error in errors {
            let text = error.to_string();
            assert!(!text.is_empty());
            assert!(!text.contains('\n'));
        }
    }
}
