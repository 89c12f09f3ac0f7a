mod completer;
mod source;

pub use completer::ShellCompleter;
pub use source::{EditorInput, LineSource, ReadOutcome, ScriptedInput};
