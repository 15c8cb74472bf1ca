//! Decoding of predicate literal tokens.

use rowan::{TextRange, TextSize};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::{SyntaxKind, SyntaxToken};

/// A predicate literal with quotes and escapes removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Text(String),
    /// Regex source is passed through verbatim; `range` covers the pattern
    /// text between the quotes so regex errors can point inside it.
    Regex { pattern: String, range: TextRange },
    Insensitive(String),
    Enum(String),
    Int(i64),
}

impl Literal {
    /// Short description used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Literal::Text(_) => "string",
            Literal::Regex { .. } => "regex",
            Literal::Insensitive(_) => "case-insensitive string",
            Literal::Enum(_) => "enum constant",
            Literal::Int(_) => "integer",
        }
    }
}

/// Decodes a literal token. Returns `None` after reporting if the token is malformed.
pub fn decode(token: &SyntaxToken, diag: &mut Diagnostics) -> Option<Literal> {
    let text = token.text();
    let range = token.text_range();

    match token.kind() {
        SyntaxKind::StringLiteral => unescape(text, 1, range, diag).map(Literal::Text),
        SyntaxKind::InsensitiveLiteral => unescape(text, 2, range, diag).map(Literal::Insensitive),
        SyntaxKind::RegexLiteral => {
            let pattern = &text[2..text.len() - 1];
            let start = range.start() + TextSize::from(2);
            Some(Literal::Regex {
                pattern: pattern.to_owned(),
                range: TextRange::at(start, TextSize::of(pattern)),
            })
        }
        SyntaxKind::EnumLiteral => Some(Literal::Enum(text[2..text.len() - 1].to_owned())),
        SyntaxKind::Int => match text.parse::<i64>() {
            Ok(value) => Some(Literal::Int(value)),
            Err(_) => {
                diag.report(DiagnosticKind::IntegerOutOfRange, range)
                    .message(format!("`{text}` does not fit in 64 bits"))
                    .emit();
                None
            }
        },
        _ => None,
    }
}

/// Strips the prefix and closing quote and resolves `\" \\ \n \t`.
fn unescape(
    text: &str,
    prefix: usize,
    range: TextRange,
    diag: &mut Diagnostics,
) -> Option<String> {
    let body = &text[prefix..text.len() - 1];
    let body_start = range.start() + TextSize::from(prefix as u32);

    let mut out = String::with_capacity(body.len());
    let mut valid = true;
    let mut chars = body.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some((_, escaped)) = chars.next() else {
            break;
        };
        match escaped {
            '"' => out.push('"'),
            '\\' => out.push('\\'),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            other => {
                let start = body_start + TextSize::from(offset as u32);
                let len = TextSize::from(1 + other.len_utf8() as u32);
                diag.report(DiagnosticKind::InvalidEscape, TextRange::at(start, len))
                    .message(format!("`\\{other}`"))
                    .hint("supported escapes are `\\\"` `\\\\` `\\n` `\\t`")
                    .emit();
                valid = false;
            }
        }
    }

    valid.then_some(out)
}
