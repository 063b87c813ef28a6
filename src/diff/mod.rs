mod parser;
mod types;

pub use parser::{ParseError, parse};
pub use types::{FileDiff, Hunk};
