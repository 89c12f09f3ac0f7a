use super::{for_each_target, Command, CommandError, Context, Flow};

#[derive(Clone)]
pub struct CatCommand;

impl Default for CatCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CatCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CatCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        for_each_target(ctx, "cat", args, |ctx, target| {
            let bytes = ctx
                .fs
                .read_file_bytes(target)
                .map_err(|source| CommandError::FileAccess {
                    command: "cat",
                    source,
                })?;

            ctx.out.write_all(&bytes)?;
            // keep the next prompt on its own line
            if !bytes.is_empty() && !bytes.ends_with(b"\n") {
                writeln!(ctx.out)?;
            }
            Ok(())
        })?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::run;
    use super::super::CommandExecutor;
    use super::*;
    use crate::core::session::Session;
    use crate::fs::{FsError, MemoryFs};
    use crate::path::Separator;

    fn setup() -> (CommandExecutor, Session, MemoryFs) {
        let fs = MemoryFs::new(Separator::Slash)
            .with_file("/docs/a.txt", b"alpha\n")
            .with_file("/docs/b.txt", b"beta")
            .with_dir("/docs/sub");
        (
            CommandExecutor::new(),
            Session::new("/docs/sub", Separator::Slash),
            fs,
        )
    }

    #[test]
    fn test_cat_resolves_relative_to_session() {
        let (executor, mut session, fs) = setup();
        let outcome = run(&executor, &mut session, &fs, &["cat", "../a.txt", "/docs/b.txt"]);
        assert_eq!(outcome.result.unwrap(), Flow::Continue);
        assert_eq!(outcome.out, "alpha\nbeta\n");
    }

    #[test]
    fn test_cat_keeps_going_after_failure() {
        let (executor, mut session, fs) = setup();
        let outcome = run(
            &executor,
            &mut session,
            &fs,
            &["cat", "../nope", "../a.txt", "../gone"],
        );

        assert_eq!(outcome.out, "alpha\n");
        assert_eq!(outcome.err, "cat: /docs/nope: no such file or directory\n");
        let err = outcome.result.unwrap_err();
        assert!(matches!(
            err,
            CommandError::FileAccess {
                source: FsError::NotFound(ref p),
                ..
            } if p == "/docs/gone"
        ));
    }

    #[test]
    fn test_cat_requires_argument() {
        let (executor, mut session, fs) = setup();
        let err = run(&executor, &mut session, &fs, &["cat"]).result.unwrap_err();
        assert!(matches!(err, CommandError::ArgumentCount { found: 0, .. }));
    }

    struct ClosedStream;

    impl std::io::Write for ClosedStream {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_cat_broken_error_stream_still_reads_rest() {
        let (executor, mut session, fs) = setup();
        let mut out = Vec::new();
        let args: Vec<String> = ["../nope", "../a.txt", "../gone", "../b.txt"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let result = {
            let mut ctx = Context {
                session: &mut session,
                fs: &fs,
                out: &mut out,
                err: &mut ClosedStream,
            };
            executor.execute("cat", &mut ctx, &args)
        };

        assert_eq!(String::from_utf8(out).unwrap(), "alpha\nbeta\n");
        assert!(matches!(
            result,
            Err(CommandError::FileAccess {
                source: FsError::NotFound(ref p),
                ..
            }) if p == "/docs/gone"
        ));
    }
}
