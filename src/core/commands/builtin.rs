use super::{Command, CommandError, Context, Flow};

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _ctx: &mut Context<'_>, _args: &[String]) -> Result<Flow, CommandError> {
        Ok(Flow::Exit)
    }
}

#[derive(Clone)]
pub struct EchoCommand;

impl Default for EchoCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl EchoCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EchoCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        writeln!(ctx.out, "{}", args.join(" "))?;
        Ok(Flow::Continue)
    }
}

#[derive(Clone)]
pub struct PwdCommand;

impl Default for PwdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(&self, ctx: &mut Context<'_>, _args: &[String]) -> Result<Flow, CommandError> {
        writeln!(ctx.out, "{}", ctx.session.current_path())?;
        Ok(Flow::Continue)
    }
}

/// Resets the terminal with `ESC c` (RIS) rather than spawning `clear`.
#[derive(Clone)]
pub struct ClearCommand;

impl Default for ClearCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ClearCommand {
    pub const RESET: &'static str = "\x1bc";

    pub fn new() -> Self {
        Self
    }
}

impl Command for ClearCommand {
    fn execute(&self, ctx: &mut Context<'_>, _args: &[String]) -> Result<Flow, CommandError> {
        write!(ctx.out, "{}", Self::RESET)?;
        ctx.out.flush()?;
        Ok(Flow::Continue)
    }
}

/// Placeholder for a reserved command name that does nothing yet.
#[derive(Clone)]
pub struct UnimplementedCommand {
    name: &'static str,
}

impl UnimplementedCommand {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Command for UnimplementedCommand {
    fn execute(&self, ctx: &mut Context<'_>, _args: &[String]) -> Result<Flow, CommandError> {
        writeln!(ctx.out, "{}: not yet implemented", self.name)?;
        Ok(Flow::Continue)
    }
}
