use std::io;
use std::path::Path;

mod executor;

pub use executor::Dispatcher;

use crate::{
    core::{
        config::{Config, ConfigError},
        session::Session,
    },
    error::ShellError,
    flags::Flags,
    fs::HostFs,
    highlight::SyntaxHighlighter,
    input::EditorInput,
};

const BANNER: &str = r"
                         /$$
                        | $$
 /$$  /$$  /$$  /$$$$$$$| $$$$$$$
| $$ | $$ | $$ /$$_____/| $$__  $$
| $$ | $$ | $$|  $$$$$$ | $$  \ $$
| $$ | $$ | $$ \____  $$| $$  | $$
|  $$$$$/$$$$/ /$$$$$$$/| $$  | $$
 \_____/\___/ |_______/ |__/  |__/
";

/// Interactive front-end: banner, Ctrl-C handling and a `rustyline` editor
/// wired to a `Dispatcher` over the host filesystem.
pub struct Shell {
    dispatcher: Dispatcher<HostFs>,
    input: EditorInput,
    highlighter: SyntaxHighlighter,
    config: Config,
    flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let quiet = flags.is_set("quiet");
        let config = match Config::load(flags.get_value("config").map(Path::new)) {
            Ok(config) => config,
            Err(ConfigError::HomeDirNotFound) => {
                if !quiet {
                    eprintln!("Warning: home directory not found, using default settings");
                }
                Config::default()
            }
            Err(e) => return Err(e.into()),
        };

        let highlighter = SyntaxHighlighter::with_color(config.color && !flags.is_set("no-color"));
        let session = Session::from_host(config.separator)?;

        if flags.is_set("debug") {
            eprintln!("debug: config {:?}", config);
            eprintln!("debug: starting in {}", session.current_path());
        }

        ctrlc::set_handler(move || {
            println!("\nUse 'exit' to exit the shell");
        })?;

        let dispatcher = Dispatcher::new(session, HostFs::new())
            .with_highlighter(highlighter)
            .with_debug(flags.is_set("debug"));
        let input = EditorInput::new(
            dispatcher.executor(),
            dispatcher.session().current(),
            highlighter,
        )?;

        Ok(Shell {
            dispatcher,
            input,
            highlighter,
            config,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        if self.config.banner && !self.flags.is_set("quiet") {
            println!("{}", self.highlighter.banner(BANNER));
        }

        let mut out = io::stdout();
        let mut err = io::stderr();
        self.dispatcher.run(&mut self.input, &mut out, &mut err);
        Ok(())
    }
}
