use std::collections::VecDeque;

use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use super::ShellCompleter;
use crate::core::commands::CommandExecutor;
use crate::error::ShellError;
use crate::highlight::SyntaxHighlighter;
use crate::path::LogicalPath;

/// Result of asking for one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C at the prompt; the partial line is discarded.
    Interrupted,
    Eof,
}

/// Where the dispatch loop gets its command lines from.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError>;

    /// Called before each prompt with the session's current path.
    fn set_cwd(&mut self, _cwd: &LogicalPath) {}
}

/// Interactive input through `rustyline`, with completion and in-memory history.
pub struct EditorInput {
    editor: Editor<ShellCompleter, DefaultHistory>,
}

impl EditorInput {
    pub fn new(
        executor: &CommandExecutor,
        cwd: &LogicalPath,
        highlighter: SyntaxHighlighter,
    ) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellCompleter, DefaultHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new(executor, cwd.clone(), highlighter)));
        editor.set_auto_add_history(true);

        Ok(Self { editor })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn set_cwd(&mut self, cwd: &LogicalPath) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_cwd(cwd.clone());
        }
    }
}

/// A fixed queue of lines; reports end of input once drained.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        self.prompts.push(prompt.to_string());
        Ok(self
            .lines
            .pop_front()
            .map_or(ReadOutcome::Eof, ReadOutcome::Line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_drains_then_eof() {
        let mut input = ScriptedInput::new(["pwd", ""]);
        assert_eq!(input.read_line("> ").unwrap(), ReadOutcome::Line("pwd".into()));
        assert_eq!(input.read_line("> ").unwrap(), ReadOutcome::Line(String::new()));
        assert_eq!(input.remaining(), 0);
        assert_eq!(input.read_line("> ").unwrap(), ReadOutcome::Eof);
        assert_eq!(input.prompts().len(), 3);
    }
}
