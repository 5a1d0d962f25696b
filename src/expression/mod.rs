//! Expression trees: operators, canonical construction, rendering and parsing

mod ast;
mod display;
mod errors;
mod operator;
mod parse;

pub use ast::Expression;
pub use display::Rendered;
pub use errors::ExpressionError;
pub use operator::{Notation, Operator};
