//! Parser for the linear combination expressions consumed by `regula`.
//!
//! Expressions are sums of signed products of integer literals, single letter symbols, and
//! one-level parenthesized groups, such as `1-i`, `2ij`, or `(1+7)i`. Parsing produces a spanned
//! AST; deciding which letters are algebra generators is left to the consumer.
//!
//! ```
//! use regula_parser::parser::Parser;
//!
//! let expr = Parser::new("1 - 2ij").parse_full().unwrap();
//! assert_eq!(expr.terms.len(), 2);
//! assert_eq!(expr.to_string(), "1 + -2 * i * j");
//! ```

pub mod parser;
pub mod tokenizer;
