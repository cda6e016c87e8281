//! Source lines, the line cursor and the token lexer.

mod cursor;
mod diagnostic;
mod line;
mod token;

pub use cursor::LineCursor;
pub use diagnostic::Diagnostic;
pub use line::{SourceLine, split_lines};
pub use token::{SelectorToken, Token, classify_tokens, split_tokens, strip_quotes};
