//! The command dispatcher: parses input lines and answers them.

pub mod handlers;
pub mod parser;

pub use handlers::{Assistant, Reply, FAREWELL, GREETING, PROMPT};
pub use parser::{parse_input, Command, ParsedInput};
