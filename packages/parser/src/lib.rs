pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

#[cfg(test)]
mod tests;

pub use ast::LayoutNode;
pub use error::{ParseError, ParseResult};
pub use lexer::{tokenize, Token};
pub use parser::{parse, Parser};
