pub mod error;
pub mod flags;
pub mod shell;

pub mod core;
pub mod fs;
pub mod highlight;
pub mod input;
pub mod path;
