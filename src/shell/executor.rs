use std::io::Write;

use crate::core::commands::{CommandError, CommandExecutor, Context, Flow};
use crate::core::session::Session;
use crate::fs::FileSystem;
use crate::highlight::SyntaxHighlighter;
use crate::input::{LineSource, ReadOutcome};

/// The read-dispatch loop. Owns the session and threads it through every
/// command; nothing outside this struct can change the current path.
pub struct Dispatcher<F: FileSystem> {
    session: Session,
    executor: CommandExecutor,
    fs: F,
    highlighter: SyntaxHighlighter,
    debug: bool,
}

impl<F: FileSystem> Dispatcher<F> {
    pub fn new(session: Session, fs: F) -> Self {
        Self {
            session,
            executor: CommandExecutor::new(),
            fs,
            highlighter: SyntaxHighlighter::plain(),
            debug: false,
        }
    }

    pub fn with_highlighter(mut self, highlighter: SyntaxHighlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    pub fn prompt(&self) -> String {
        self.highlighter.prompt(&self.session.current_path())
    }

    /// Tokenizes and runs one line. Errors, including failed writes to
    /// `out`, are printed to `err` as a single line and never end the loop;
    /// only `exit` yields `Flow::Exit`.
    pub fn execute_line(&mut self, line: &str, out: &mut dyn Write, err: &mut dyn Write) -> Flow {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = words.split_first() else {
            return Flow::Continue;
        };
        let args: Vec<String> = rest.iter().map(|s| s.to_string()).collect();

        if self.debug {
            self.trace(err, &format!("dispatch {} {:?}", command, args));
        }

        let before = self.session.current_path();
        let result = {
            let mut ctx = Context {
                session: &mut self.session,
                fs: &self.fs,
                out: &mut *out,
                err: &mut *err,
            };
            self.executor.execute(command, &mut ctx, &args)
        };

        match result {
            Ok(flow) => {
                if let Err(e) = out.flush() {
                    self.report(err, &CommandError::from(e));
                }
                let after = self.session.current_path();
                if self.debug && before != after {
                    self.trace(err, &format!("cwd {} -> {}", before, after));
                }
                flow
            }
            Err(e) => {
                self.report(err, &e);
                let _ = out.flush();
                Flow::Continue
            }
        }
    }

    /// Reads and dispatches lines until `exit` or end of input. A failing
    /// input stream is reported and then treated like `exit`.
    pub fn run<L: LineSource>(&mut self, input: &mut L, out: &mut dyn Write, err: &mut dyn Write) {
        loop {
            input.set_cwd(self.session.current());
            let line = match input.read_line(&self.prompt()) {
                Ok(ReadOutcome::Line(line)) => line,
                Ok(ReadOutcome::Interrupted) => continue,
                Ok(ReadOutcome::Eof) => break,
                Err(e) => {
                    self.report(err, &e);
                    break;
                }
            };

            if self.execute_line(&line, out, err) == Flow::Exit {
                break;
            }
        }
    }

    /// Best effort: a broken error stream falls back to the process stderr.
    fn report(&self, err: &mut dyn Write, error: &dyn std::fmt::Display) {
        let message = self.highlighter.highlight_error(&error.to_string());
        if writeln!(err, "{}", message).and_then(|_| err.flush()).is_err() {
            eprintln!("{}", message);
        }
    }

    fn trace(&self, err: &mut dyn Write, message: &str) {
        let _ = writeln!(err, "debug: {}", message);
    }
}
