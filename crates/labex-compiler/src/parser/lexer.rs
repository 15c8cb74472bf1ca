//! Tokenizer for label expressions.
//!
//! Tokens hold a kind and a byte range; text is sliced from the source on
//! demand. Characters logos cannot match are grouped: a run of them becomes
//! a single `Garbage` token, so `Gene ### Token` yields one error, not three.

use logos::Logos;
use rowan::{TextRange, TextSize};

use super::cst::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn offset(pos: usize) -> TextSize {
    TextSize::from(pos as u32)
}

/// Splits `source` into tokens, trivia included.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    // Start of the unrecognized run in progress
    let mut garbage_from: Option<usize> = None;

    for (kind, range) in SyntaxKind::lexer(source).spanned() {
        let Ok(kind) = kind else {
            garbage_from.get_or_insert(range.start);
            continue;
        };
        if let Some(from) = garbage_from.take() {
            let span = TextRange::new(offset(from), offset(range.start));
            tokens.push(Token::new(SyntaxKind::Garbage, span));
        }
        let span = TextRange::new(offset(range.start), offset(range.end));
        tokens.push(Token::new(kind, span));
    }

    if let Some(from) = garbage_from {
        let span = TextRange::new(offset(from), offset(source.len()));
        tokens.push(Token::new(SyntaxKind::Garbage, span));
    }
    tokens
}

#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[token.span]
}
