mod resolver;

pub use resolver::{resolve, LogicalPath, Separator};
