mod command;
mod path;

use std::borrow::Cow;

use command::CommandCompleter;
use path::PathCompleter;

use crate::core::commands::CommandExecutor;
use crate::fs::HostFs;
use crate::highlight::SyntaxHighlighter;
use crate::path::LogicalPath;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// `rustyline` helper: completes built-in names and paths relative to the
/// session directory, and colors the command word.
#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new(executor: &CommandExecutor, cwd: LogicalPath, highlighter: SyntaxHighlighter) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(executor),
            path_completer: PathCompleter::new(cwd),
            highlighter,
        }
    }

    pub fn set_cwd(&mut self, cwd: LogicalPath) {
        self.path_completer.set_cwd(cwd);
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let commands = &self.command_completer;
        Cow::Owned(
            self.highlighter
                .highlight_command(line, |word| commands.is_known(word)),
        )
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let word = line.trim();
        if self.command_completer.is_stub(word) {
            Some("  (not yet implemented)".to_string())
        } else {
            None
        }
    }
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];
        let mut words: Vec<&str> = line_up_to_cursor.split_whitespace().collect();

        if line_up_to_cursor.ends_with(char::is_whitespace) || words.is_empty() {
            words.push("");
        }

        let word = words.last().copied().unwrap_or_default();
        let start = pos - word.len();

        let matches = if words.len() == 1 {
            self.command_completer.complete_command(word)
        } else {
            self.path_completer.complete_path(&HostFs::new(), word)
        };

        Ok((start, matches))
    }
}
