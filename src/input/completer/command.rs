use std::collections::BTreeSet;

use rustyline::completion::Pair;

use crate::core::commands::CommandExecutor;

#[derive(Clone)]
pub struct CommandCompleter {
    commands: BTreeSet<&'static str>,
    stubs: BTreeSet<&'static str>,
}

impl CommandCompleter {
    pub fn new(executor: &CommandExecutor) -> Self {
        let commands: BTreeSet<&'static str> = executor.names().collect();
        let stubs = commands
            .iter()
            .copied()
            .filter(|name| !executor.is_implemented(name))
            .collect();

        Self { commands, stubs }
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.commands.contains(name)
    }

    pub fn is_stub(&self, name: &str) -> bool {
        self.stubs.contains(name)
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(input))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}
