//! Parser state: token cursor, tree builder, fuel and error reporting.
//!
//! Grammar productions in `grammar/` drive this through a small set of
//! primitives (`current`, `bump`, `eat_token`, `start_node`, ...). Trivia is
//! never seen by productions: it is held back and attached in front of the
//! next node or token that gets built.

use std::cell::Cell;

use rowan::{Checkpoint, GreenNodeBuilder, TextRange, TextSize};

use super::ast::Root;
use super::cst::{SyntaxKind, SyntaxNode, TokenSet};
use super::lexer::{Token, token_text};
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Lookaheads allowed without consuming a token before the parser is
/// considered stuck.
const STALL_LIMIT: u32 = 256;

#[derive(Debug)]
pub struct ParseResult {
    pub root: Root,
    pub diagnostics: Diagnostics,
    pub fuel_consumed: u32,
}

/// An opener whose closer has not been seen yet.
#[derive(Debug, Clone, Copy)]
pub(super) struct OpenDelimiter {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

/// Optional step budget; `None` means unlimited.
#[derive(Debug, Default)]
struct Fuel {
    budget: Option<u32>,
    left: u32,
}

impl Fuel {
    fn limited(budget: Option<u32>) -> Self {
        Self {
            budget,
            left: budget.unwrap_or(0),
        }
    }

    /// Takes one unit. `false` once the budget is spent.
    fn burn(&mut self) -> bool {
        if self.budget.is_none() {
            return true;
        }
        if self.left == 0 {
            return false;
        }
        self.left -= 1;
        true
    }

    fn consumed(&self) -> u32 {
        self.budget.map_or(0, |budget| budget - self.left)
    }
}

pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    /// Whitespace and comments skipped over but not yet in the tree.
    held_trivia: Vec<Token>,
    builder: GreenNodeBuilder<'static>,
    diagnostics: Diagnostics,
    /// Start of the last reported error; a second report there is dropped.
    last_report: Option<TextSize>,
    open_delimiters: Vec<OpenDelimiter>,
    pub(super) stall_guard: Cell<u32>,
    fuel: Fuel,
    depth: u32,
    max_depth: Option<u32>,
    fatal: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            held_trivia: Vec::new(),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            last_report: None,
            open_delimiters: Vec::new(),
            stall_guard: Cell::new(STALL_LIMIT),
            fuel: Fuel::default(),
            depth: 0,
            max_depth: None,
            fatal: None,
        }
    }

    /// Caps the number of tokens consumed.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.fuel = Fuel::limited(limit);
        self
    }

    /// Caps nesting depth.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.max_depth = limit;
        self
    }

    pub fn parse(mut self) -> Result<ParseResult, Error> {
        self.parse_root();
        self.flush_trivia();
        if let Some(err) = self.fatal {
            return Err(err);
        }

        let green = self.builder.finish();
        let root = Root::cast(SyntaxNode::new_root(green)).expect("parser always produces Root");
        Ok(ParseResult {
            root,
            diagnostics: self.diagnostics,
            fuel_consumed: self.fuel.consumed(),
        })
    }

    fn set_fatal(&mut self, error: Error) {
        self.fatal.get_or_insert(error);
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal.is_some()
    }

    // Token cursor

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn should_stop(&self) -> bool {
        self.eof() || self.has_fatal_error()
    }

    fn hold_trivia(&mut self) {
        while let Some(&token) = self.tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.held_trivia.push(token);
            self.pos += 1;
        }
    }

    fn flush_trivia(&mut self) {
        for token in std::mem::take(&mut self.held_trivia) {
            self.builder
                .token(token.kind.into(), token_text(self.source, &token));
        }
    }

    pub(super) fn eat_trivia(&mut self) {
        self.hold_trivia();
        self.flush_trivia();
    }

    /// Kind of the next non-trivia token, `Error` at EOF.
    pub(super) fn current(&mut self) -> SyntaxKind {
        self.hold_trivia();
        self.ensure_progress();
        self.tokens
            .get(self.pos)
            .map_or(SyntaxKind::Error, |token| token.kind)
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// Whether the very next token is in `set` with no trivia before it.
    pub(super) fn touches(&mut self, set: TokenSet) -> bool {
        self.ensure_progress();
        self.held_trivia.is_empty()
            && self
                .tokens
                .get(self.pos)
                .is_some_and(|token| set.contains(token.kind))
    }

    /// Whether the non-trivia token after the current one is `kind`.
    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.hold_trivia();
        self.ensure_progress();
        self.tokens[self.pos..]
            .iter()
            .filter(|token| !token.kind.is_trivia())
            .nth(1)
            .is_some_and(|token| token.kind == kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.hold_trivia();
        match self.tokens.get(self.pos) {
            Some(token) => token.span,
            None => TextRange::empty(self.end_of_source()),
        }
    }

    fn end_of_source(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    // Tree building

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.flush_trivia();
        self.builder.checkpoint()
    }

    /// Moves the current token into the tree.
    pub(super) fn bump(&mut self) {
        assert!(!self.eof(), "bump called at EOF");
        self.stall_guard.set(STALL_LIMIT);
        if !self.fuel.burn() {
            self.set_fatal(Error::ExecFuelExhausted);
        }

        self.flush_trivia();
        let token = self.tokens[self.pos];
        self.builder
            .token(token.kind.into(), token_text(self.source, &token));
        self.pos += 1;
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        let matched = self.currently_is(kind);
        if matched {
            self.bump();
        }
        matched
    }

    /// Eats `kind`, or reports "expected {what}" without consuming.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat_token(kind) {
            return true;
        }
        self.error_msg(DiagnosticKind::UnexpectedToken, format!("expected {what}"));
        false
    }

    // Nesting

    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.max_depth.is_some_and(|max| self.depth >= max) {
            self.set_fatal(Error::RecursionLimitExceeded);
            return false;
        }
        self.depth += 1;
        self.stall_guard.set(STALL_LIMIT);
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.stall_guard.set(STALL_LIMIT);
    }

    pub(super) fn push_delimiter(&mut self, kind: SyntaxKind) {
        let span = self.current_span();
        self.open_delimiters.push(OpenDelimiter { kind, span });
    }

    pub(super) fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.open_delimiters.pop()
    }

    // Error reporting

    /// Claims `pos` for a report; `false` if something was reported there.
    fn claim(&mut self, pos: TextSize) -> bool {
        if self.last_report == Some(pos) {
            return false;
        }
        self.last_report = Some(pos);
        true
    }

    /// Reports `kind` at the current token. Follow-up errors up to the end of
    /// the innermost open delimiter are suppressed downstream.
    fn report_here(&mut self, kind: DiagnosticKind, message: Option<String>) {
        let range = self.current_span();
        if !self.claim(range.start()) {
            return;
        }
        let suppression = match self.open_delimiters.last() {
            Some(open) => TextRange::new(open.span.start(), self.end_of_source()),
            None => range,
        };

        let mut report = self.diagnostics.report(kind, range);
        if let Some(message) = message {
            report = report.message(message);
        }
        report.suppression_range(suppression).emit();
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        self.report_here(kind, None);
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.report_here(kind, Some(message.into()));
    }

    /// Reports at an explicit range, e.g. a token already consumed.
    pub(super) fn error_at(&mut self, kind: DiagnosticKind, range: TextRange) {
        if self.claim(range.start()) {
            self.diagnostics.report(kind, range).emit();
        }
    }

    pub(super) fn error_with_fix(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        message: impl Into<String>,
        fix_description: impl Into<String>,
        fix_replacement: impl Into<String>,
    ) {
        if !self.claim(range.start()) {
            return;
        }
        self.diagnostics
            .report(kind, range)
            .message(message)
            .fix(fix_description, fix_replacement)
            .emit();
    }

    fn bump_as_error(&mut self) {
        if self.eof() {
            return;
        }
        self.start_node(SyntaxKind::Error);
        self.bump();
        self.finish_node();
    }

    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind) {
        self.error(kind);
        self.bump_as_error();
    }

    pub(super) fn error_and_bump_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.error_msg(kind, message);
        self.bump_as_error();
    }

    /// Reports, then skips to the next token in `recovery`, keeping the
    /// skipped tokens under an `Error` node.
    pub(super) fn error_recover(&mut self, kind: DiagnosticKind, recovery: TokenSet) {
        let skips = !self.currently_is_one_of(recovery) && !self.should_stop();
        if skips {
            self.start_node(SyntaxKind::Error);
        }
        self.error(kind);
        if !skips {
            return;
        }
        while !self.currently_is_one_of(recovery) && !self.should_stop() {
            self.bump();
        }
        self.finish_node();
    }

    /// Reports a delimiter still open at EOF, spanning from the opener to the
    /// current position so nothing inside it is reported again.
    pub(super) fn error_unclosed_delimiter(
        &mut self,
        kind: DiagnosticKind,
        related_msg: impl Into<String>,
        open_range: TextRange,
    ) {
        let current = self.current_span();
        if !self.claim(current.start()) {
            return;
        }
        self.diagnostics
            .report(kind, TextRange::new(open_range.start(), current.end()))
            .related_to(related_msg, open_range)
            .emit();
    }
}

#[cfg(test)]
mod tests {
    use super::Fuel;

    #[test]
    fn unlimited_fuel_never_runs_out() {
        let mut fuel = Fuel::limited(None);
        assert!((0..1000).all(|_| fuel.burn()));
        assert_eq!(fuel.consumed(), 0);
    }

    #[test]
    fn limited_fuel_counts_down() {
        let mut fuel = Fuel::limited(Some(2));
        assert!(fuel.burn());
        assert!(fuel.burn());
        assert!(!fuel.burn());
        assert_eq!(fuel.consumed(), 2);
    }
}
