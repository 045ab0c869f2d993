pub mod err;
pub mod generator;
pub mod lexer;
pub mod parser;
pub mod source;

pub use err::{ErrorKind, ParseError};
pub use generator::{dump_raw, encode_scalar, generate, prefix_weights};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{parse_ranges, Interval, Mode, MAX_NUMERIC, MAX_SCALAR};
pub use source::Quality;
