use super::{for_each_target, Command, CommandError, Context, Flow};

#[derive(Clone)]
pub struct TouchCommand;

impl Default for TouchCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for TouchCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        for_each_target(ctx, "touch", args, |ctx, target| {
            ctx.fs
                .create_empty_file(target)
                .map_err(|source| CommandError::FileAccess {
                    command: "touch",
                    source,
                })
        })?;
        Ok(Flow::Continue)
    }
}

#[derive(Clone)]
pub struct MkdirCommand;

impl Default for MkdirCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl MkdirCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for MkdirCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        for_each_target(ctx, "mkdir", args, |ctx, target| {
            ctx.fs
                .create_directory(target)
                .map_err(|source| CommandError::FileAccess {
                    command: "mkdir",
                    source,
                })
        })?;
        Ok(Flow::Continue)
    }
}
