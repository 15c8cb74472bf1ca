use rowan::{Checkpoint, TextRange};

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::{ATOM_FIRST, LOOKAHEAD_OPENERS, MODIFIERS, QUANTIFIERS};
use crate::parser::cst::{SyntaxKind, TokenSet};

impl Parser<'_> {
    pub fn parse_root(&mut self) {
        self.start_node(SyntaxKind::Root);
        self.parse_body(TokenSet::EMPTY);
        self.eat_trivia();
        self.finish_node();
    }

    /// `sequence ('|' sequence)*`. A single branch stays a bare `Seq`.
    pub(super) fn parse_body(&mut self, stop: TokenSet) {
        let checkpoint = self.checkpoint();
        self.parse_sequence(stop);

        if !self.currently_is(SyntaxKind::Pipe) || self.has_fatal_error() {
            return;
        }

        self.start_node_at(checkpoint, SyntaxKind::Alt);
        while self.eat_token(SyntaxKind::Pipe) {
            self.parse_sequence(stop);
        }
        self.finish_node();
    }

    /// Juxtaposed items up to `|`, a token in `stop`, or EOF.
    fn parse_sequence(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::Seq);

        // Start of the previous item, for `[^T]` to wrap
        let mut last: Option<Checkpoint> = None;
        let mut pending_arrow: Option<TextRange> = None;

        loop {
            let kind = self.current();
            if self.should_stop() || kind == SyntaxKind::Pipe || stop.contains(kind) {
                break;
            }

            match kind {
                SyntaxKind::ContainsOpen => {
                    let checkpoint = match last {
                        Some(checkpoint) => checkpoint,
                        None => {
                            self.error(DiagnosticKind::ContainsWithoutTarget);
                            self.checkpoint()
                        }
                    };
                    self.parse_contains(checkpoint);
                    last = Some(checkpoint);
                }
                SyntaxKind::Arrow => {
                    if let Some(range) = pending_arrow {
                        self.error_at(DiagnosticKind::DanglingArrow, range);
                    }
                    pending_arrow = Some(self.current_span());
                    self.start_node(SyntaxKind::TextGap);
                    self.bump();
                    self.finish_node();
                    last = None;
                }
                kind if ATOM_FIRST.contains(kind) => {
                    let checkpoint = self.checkpoint();
                    self.parse_postfix(checkpoint);
                    last = Some(checkpoint);
                    pending_arrow = None;
                }
                SyntaxKind::BraceOpen => {
                    self.start_node(SyntaxKind::Error);
                    self.error(DiagnosticKind::QuantifierWithoutTarget);
                    self.parse_bounds();
                    self.finish_node();
                }
                SyntaxKind::Question | SyntaxKind::Star | SyntaxKind::Plus => {
                    self.error_and_bump(DiagnosticKind::QuantifierWithoutTarget);
                }
                SyntaxKind::ParenClose | SyntaxKind::BracketClose | SyntaxKind::BraceClose => {
                    self.error_and_bump_msg(
                        DiagnosticKind::UnexpectedToken,
                        "no matching opening delimiter",
                    );
                }
                SyntaxKind::AngleOpen => {
                    self.error_and_bump_msg(
                        DiagnosticKind::UnexpectedToken,
                        "predicates must follow a label type name",
                    );
                }
                _ => {
                    self.error_and_bump_msg(DiagnosticKind::UnexpectedToken, "not a valid expression");
                }
            }
        }

        if let Some(range) = pending_arrow {
            self.error_at(DiagnosticKind::DanglingArrow, range);
        }

        self.finish_node();
    }

    /// Atom with an optional quantifier suffix.
    fn parse_postfix(&mut self, checkpoint: Checkpoint) {
        if !self.enter_recursion() {
            self.start_node(SyntaxKind::Error);
            while !self.should_stop() {
                self.bump();
            }
            self.finish_node();
            return;
        }

        self.parse_atom();
        self.try_parse_quantifier(checkpoint);

        self.exit_recursion();
    }

    fn parse_atom(&mut self) {
        match self.current() {
            SyntaxKind::Id if self.next_is(SyntaxKind::Colon) => self.parse_capture(),
            SyntaxKind::Id => self.parse_type_match(),
            SyntaxKind::ParenOpen => self.parse_group(),
            SyntaxKind::NamedGroupOpen => self.parse_named_group(),
            kind if LOOKAHEAD_OPENERS.contains(kind) => self.parse_lookahead(),
            SyntaxKind::BracketOpen => self.parse_pin(),
            _ => self.error_and_bump(DiagnosticKind::ExpectedExpression),
        }
    }

    /// `? * + {m} {m,} {m,n}` followed by an adjacent `?` (lazy) or `+` (possessive).
    fn try_parse_quantifier(&mut self, checkpoint: Checkpoint) {
        let kind = self.current();
        if !QUANTIFIERS.contains(kind) || self.has_fatal_error() {
            return;
        }

        self.start_node_at(checkpoint, SyntaxKind::Quantifier);
        if kind == SyntaxKind::BraceOpen {
            self.parse_bounds();
        } else {
            self.bump();
        }

        if self.touches(MODIFIERS) {
            self.bump();
        }

        self.finish_node();
    }

    /// `{` INT (`,` INT?)? `}`
    pub(super) fn parse_bounds(&mut self) {
        self.start_node(SyntaxKind::Bounds);
        self.assert_current(SyntaxKind::BraceOpen);
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();

        if !self.eat_token(SyntaxKind::Int) {
            self.error(DiagnosticKind::ExpectedBound);
        }
        if self.eat_token(SyntaxKind::Comma) {
            self.eat_token(SyntaxKind::Int);
        }

        self.close_delimiter(SyntaxKind::BraceClose, "`}`");
        self.finish_node();
    }
}
