//! Tokenizer for the expression grammar.
//!
//! The grammar is deliberately small. The interesting quirk is that symbols are single letters,
//! so `2ij` tokenizes into an integer and two letter tokens with no separator required; `*` is
//! accepted between factors but never needed.

pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows the
/// parser to look ahead freely.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(Ok(kind)) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2i",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
                (TokenKind::Letter, "i"),
            ],
        );
    }

    #[test]
    fn letters_are_single_tokens() {
        compare_tokens(
            "12ij",
            [
                (TokenKind::Int, "12"),
                (TokenKind::Letter, "i"),
                (TokenKind::Letter, "j"),
            ],
        );
    }

    #[test]
    fn groups_and_signs() {
        compare_tokens(
            "-1*(2+u)j",
            [
                (TokenKind::Sub, "-"),
                (TokenKind::Int, "1"),
                (TokenKind::Mul, "*"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Int, "2"),
                (TokenKind::Add, "+"),
                (TokenKind::Letter, "u"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Letter, "j"),
            ],
        );
    }

    #[test]
    fn unknown_characters_become_other() {
        compare_tokens(
            "1^i",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Other, "^"),
                (TokenKind::Letter, "i"),
            ],
        );
    }
}
