//! A recursive descent parser for the expression grammar.
//!
//! The grammar is a flat sum of signed products:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := ('+' | '-')* factor+
//! factor := INT | LETTER | '(' expr ')'
//! ```
//!
//! Factors are juxtaposed (`2ij`), with `*` allowed as an optional separator. Runs of sign
//! tokens fold algebraically into the following term, so `1+-i` parses like `1-i`. Parentheses
//! nest exactly one level deep; the inner expression may not be empty.
//!
//! The empty source is valid and parses into a single term with no factors, the multiplicative
//! identity.

pub mod ast;
pub mod error;

use ast::{Expr, Factor, Group, LitInt, LitSym, Term};
use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use error::{EmptyGroup, ExpectedEof, NestedParens, UnclosedParen, UnexpectedEof, UnexpectedToken};
use regula_error::{Error, ErrorKind};
use std::ops::Range;

/// The tokens that can begin a factor.
const FACTOR_STARTS: &[TokenKind] = &[TokenKind::Int, TokenKind::Letter, TokenKind::OpenParen];

/// A parser for the expression grammar. This is the type to use to parse an arbitrary piece of
/// input into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Skips past any whitespace, then returns the kind of the next token without consuming it.
    /// Returns [`None`] if the end of the stream is reached.
    fn peek(&mut self) -> Option<TokenKind> {
        while let Some(token) = self.tokens.get(self.cursor) {
            if token.is_whitespace() {
                self.cursor += 1;
            } else {
                return Some(token.kind);
            }
        }

        None
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(UnexpectedEof))
    }

    /// Parses the entire source as one expression, returning an error if any input remains
    /// afterwards.
    pub fn parse_full(&mut self) -> Result<Expr, Error> {
        let expr = self.parse_expr(false)?;
        if self.peek().is_some() {
            return Err(self.error(ExpectedEof));
        }
        Ok(expr)
    }

    fn parse_expr(&mut self, in_group: bool) -> Result<Expr, Error> {
        match self.peek() {
            // the empty source is the multiplicative identity, but empty parentheses are a typo
            None if !in_group => {
                let span = self.eof_span();
                let terms = vec![Term { negative: false, factors: Vec::new(), span: span.clone() }];
                return Ok(Expr { terms, span });
            },
            Some(TokenKind::CloseParen) if in_group => return Err(self.error(EmptyGroup)),
            _ => {},
        }

        let mut terms = Vec::new();
        loop {
            terms.push(self.parse_term(in_group)?);
            if !matches!(self.peek(), Some(TokenKind::Add | TokenKind::Sub)) {
                break;
            }
        }

        // terms is never empty here
        let span = terms[0].span.start..terms[terms.len() - 1].span.end;
        Ok(Expr { terms, span })
    }

    fn parse_term(&mut self, in_group: bool) -> Result<Term, Error> {
        let mut negative = false;
        let mut start = None;

        while matches!(self.peek(), Some(TokenKind::Add | TokenKind::Sub)) {
            let token = self.next_token()?;
            if token.kind == TokenKind::Sub {
                negative = !negative;
            }
            start.get_or_insert(token.span.start);
        }

        let mut factors = Vec::new();
        loop {
            match self.peek() {
                Some(TokenKind::Int) => {
                    let token = self.next_token()?;
                    start.get_or_insert(token.span.start);
                    factors.push(Factor::Integer(LitInt {
                        value: token.lexeme.to_owned(),
                        span: token.span,
                    }));
                },
                Some(TokenKind::Letter) => {
                    let token = self.next_token()?;
                    start.get_or_insert(token.span.start);
                    // the Letter token always matches exactly one character
                    let name = token.lexeme.chars().next().unwrap();
                    factors.push(Factor::Symbol(LitSym { name, span: token.span }));
                },
                Some(TokenKind::Mul) => {
                    // optional separator between factors
                    let token = self.next_token()?;
                    start.get_or_insert(token.span.start);
                },
                Some(TokenKind::OpenParen) => {
                    let open = self.next_token()?;
                    start.get_or_insert(open.span.start);
                    if in_group {
                        return Err(Error::new(vec![open.span], NestedParens));
                    }

                    let expr = self.parse_expr(true)?;
                    if self.peek() == Some(TokenKind::CloseParen) {
                        let close = self.next_token()?;
                        factors.push(Factor::Group(Group {
                            expr,
                            span: open.span.start..close.span.end,
                        }));
                    } else {
                        return Err(Error::new(vec![open.span], UnclosedParen));
                    }
                },
                Some(TokenKind::Add | TokenKind::Sub | TokenKind::CloseParen) | None => break,
                Some(found) => {
                    return Err(self.error(UnexpectedToken { expected: FACTOR_STARTS, found }));
                },
            }
        }

        if factors.is_empty() {
            // a term needs at least one factor; this is reached on inputs like `1+` or a stray `)`
            return match self.peek() {
                Some(found) => Err(self.error(UnexpectedToken { expected: FACTOR_STARTS, found })),
                None => Err(self.error(UnexpectedEof)),
            };
        }

        let start = start.unwrap_or(0);
        let end = factors.last().map_or(start, |factor| factor.span().end);
        Ok(Term { negative, factors, span: start..end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> Expr {
        Parser::new(input).parse_full().unwrap()
    }

    fn parse_err(input: &str) -> Error {
        Parser::new(input).parse_full().unwrap_err()
    }

    #[test]
    fn empty_input_is_one_empty_term() {
        let expr = parse("");
        assert_eq!(expr, Expr {
            terms: vec![Term { negative: false, factors: Vec::new(), span: 0..0 }],
            span: 0..0,
        });
    }

    #[test]
    fn whitespace_only_input_is_one_empty_term() {
        let expr = parse("   ");
        assert_eq!(expr.terms.len(), 1);
        assert!(expr.terms[0].factors.is_empty());
        assert!(!expr.terms[0].negative);
    }

    #[test]
    fn negative_integer() {
        let expr = parse("-1");
        assert_eq!(expr, Expr {
            terms: vec![Term {
                negative: true,
                factors: vec![Factor::Integer(LitInt { value: String::from("1"), span: 1..2 })],
                span: 0..2,
            }],
            span: 0..2,
        });
    }

    #[test]
    fn two_terms() {
        let expr = parse("1-i");
        assert_eq!(expr, Expr {
            terms: vec![
                Term {
                    negative: false,
                    factors: vec![Factor::Integer(LitInt { value: String::from("1"), span: 0..1 })],
                    span: 0..1,
                },
                Term {
                    negative: true,
                    factors: vec![Factor::Symbol(LitSym { name: 'i', span: 2..3 })],
                    span: 1..3,
                },
            ],
            span: 0..3,
        });
    }

    #[test]
    fn consecutive_signs_fold() {
        assert_eq!(parse("--i").to_string(), "i");
        assert_eq!(parse("1+-i").to_string(), "1 + -i");
        assert_eq!(parse("1--i").to_string(), "1 + i");
        assert_eq!(parse("+i").to_string(), "i");
    }

    #[test]
    fn juxtaposed_factors() {
        assert_eq!(parse("2ij").to_string(), "2 * i * j");
        assert_eq!(parse("12ij").to_string(), "12 * i * j");
        assert_eq!(parse("2*i*j").to_string(), "2 * i * j");
        assert_eq!(parse(" 2 i j ").to_string(), "2 * i * j");
    }

    #[test]
    fn trailing_separator_is_ignored() {
        assert_eq!(parse("2*").to_string(), "2");
    }

    #[test]
    fn groups() {
        assert_eq!(parse("(1+7)i").to_string(), "(1 + 7) * i");
        assert_eq!(parse("2(1+7)i").to_string(), "2 * (1 + 7) * i");
        assert_eq!(parse("1+(2+2j)").to_string(), "1 + (2 + 2 * j)");
    }

    #[test]
    fn group_spans_include_parens() {
        let expr = parse("2(1+7)i");
        let Factor::Group(group) = &expr.terms[0].factors[1] else {
            panic!("expected a group factor");
        };
        assert_eq!(group.span, 1..6);
    }

    #[test]
    fn nested_parens_rejected() {
        let err = parse_err("((1))");
        assert!(err.kind.as_any().is::<NestedParens>());
        assert_eq!(err.spans, vec![1..2]);
    }

    #[test]
    fn empty_group_rejected() {
        let err = parse_err("1+()");
        assert!(err.kind.as_any().is::<EmptyGroup>());
    }

    #[test]
    fn unclosed_paren() {
        let err = parse_err("(1+7");
        assert!(err.kind.as_any().is::<UnclosedParen>());
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn trailing_operator() {
        let err = parse_err("1+");
        assert!(err.kind.as_any().is::<UnexpectedEof>());
    }

    #[test]
    fn lone_sign() {
        let err = parse_err("-");
        assert!(err.kind.as_any().is::<UnexpectedEof>());
    }

    #[test]
    fn stray_close_paren() {
        let err = parse_err(")");
        let kind = err.kind.as_any().downcast_ref::<UnexpectedToken>().unwrap();
        assert_eq!(kind.found, TokenKind::CloseParen);
    }

    #[test]
    fn input_after_expression() {
        let err = parse_err("i)");
        assert!(err.kind.as_any().is::<ExpectedEof>());
        assert_eq!(err.spans, vec![1..2]);
    }

    #[test]
    fn unknown_character() {
        let err = parse_err("1^2");
        let kind = err.kind.as_any().downcast_ref::<UnexpectedToken>().unwrap();
        assert_eq!(kind.found, TokenKind::Other);
    }

    #[test]
    fn display_round_trips() {
        for input in ["", "-1", "1-i", "2ij", "(1+7)i", "1+2u-3i"] {
            let printed = parse(input).to_string();
            assert_eq!(parse(&printed).to_string(), printed);
        }
    }
}
