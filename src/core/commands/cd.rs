use super::{Command, CommandError, Context, Flow};

/// Changes the session's logical directory.
///
/// No argument leaves the path alone. The resolved target is committed
/// only when the filesystem reports it as a directory.
#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        match args {
            [] => Ok(Flow::Continue),
            [target] => {
                ctx.session.change_dir(target, ctx.fs)?;
                Ok(Flow::Continue)
            }
            _ => Err(CommandError::ArgumentCount {
                command: "cd",
                expected: "at most 1 argument",
                found: args.len(),
            }),
        }
    }
}
