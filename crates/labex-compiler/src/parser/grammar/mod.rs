//! Grammar productions for label expressions.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Precedence from loosest to tightest: alternation `|`, juxtaposition,
//! postfix quantifiers.

mod atoms;
mod items;
mod structures;

use super::core::Parser;
use super::cst::SyntaxKind;
use crate::diagnostics::DiagnosticKind;

impl Parser<'_> {
    /// Consumes `closer` for the innermost open delimiter.
    ///
    /// At EOF the delimiter is reported as unclosed; otherwise the mismatch is
    /// reported without consuming so the enclosing production can recover.
    pub(super) fn close_delimiter(&mut self, closer: SyntaxKind, what: &str) {
        let open = self.pop_delimiter();
        if self.eat_token(closer) {
            return;
        }
        if let Some(open) = open
            && self.eof()
        {
            self.error_unclosed_delimiter(
                unclosed_kind(open.kind),
                format!("{} started here", delimiter_name(open.kind)),
                open.span,
            );
            return;
        }
        self.expect(closer, what);
    }
}

fn unclosed_kind(opener: SyntaxKind) -> DiagnosticKind {
    match opener {
        SyntaxKind::LookaheadOpen | SyntaxKind::NegLookaheadOpen => DiagnosticKind::UnclosedLookahead,
        SyntaxKind::BracketOpen | SyntaxKind::ContainsOpen => DiagnosticKind::UnclosedPin,
        SyntaxKind::AngleOpen => DiagnosticKind::UnclosedPredicates,
        SyntaxKind::BraceOpen => DiagnosticKind::UnclosedBounds,
        _ => DiagnosticKind::UnclosedGroup,
    }
}

fn delimiter_name(opener: SyntaxKind) -> &'static str {
    match opener {
        SyntaxKind::NamedGroupOpen => "named group",
        SyntaxKind::LookaheadOpen | SyntaxKind::NegLookaheadOpen => "lookahead",
        SyntaxKind::BracketOpen => "pin",
        SyntaxKind::ContainsOpen => "containment test",
        SyntaxKind::AngleOpen => "predicate list",
        SyntaxKind::BraceOpen => "repetition",
        _ => "group",
    }
}
