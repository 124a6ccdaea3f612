//! The abstract syntax tree produced by the parser.
//!
//! Every node carries the byte range of the source it was parsed from, so errors raised by later
//! stages can point back into the original input.

pub mod expr;
pub mod factor;
pub mod literal;
pub mod term;

pub use expr::Expr;
pub use factor::{Factor, Group};
pub use literal::{LitInt, LitSym};
pub use term::Term;
