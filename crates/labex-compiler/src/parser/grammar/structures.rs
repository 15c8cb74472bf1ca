use rowan::{Checkpoint, TextRange};

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::CLOSERS;

impl Parser<'_> {
    /// `( body )`
    pub(super) fn parse_group(&mut self) {
        self.start_node(SyntaxKind::Group);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        self.parse_body(CLOSERS);

        self.close_delimiter(SyntaxKind::ParenClose, "`)`");
        self.finish_node();
    }

    /// `(?<name> body )`
    pub(super) fn parse_named_group(&mut self) {
        self.start_node(SyntaxKind::NamedGroup);
        self.push_delimiter(SyntaxKind::NamedGroupOpen);
        self.bump();

        if !self.eat_token(SyntaxKind::Id) {
            self.error_msg(DiagnosticKind::ExpectedCaptureName, "e.g. `(?<name> A B)`");
        }
        self.expect(SyntaxKind::AngleClose, "`>` after group name");

        self.parse_body(CLOSERS);

        self.close_delimiter(SyntaxKind::ParenClose, "`)`");
        self.finish_node();
    }

    /// `(?= body )` or `(?! body )`
    pub(super) fn parse_lookahead(&mut self) {
        self.start_node(SyntaxKind::Lookahead);
        let opener = self.current();
        self.push_delimiter(opener);
        self.bump();

        self.parse_body(CLOSERS);

        self.close_delimiter(SyntaxKind::ParenClose, "`)`");
        self.finish_node();
    }

    /// `[ body ]`: the labels matched inside must be adjacent.
    pub(super) fn parse_pin(&mut self) {
        self.start_node(SyntaxKind::Pin);
        let open = self.current_span();
        self.push_delimiter(SyntaxKind::BracketOpen);
        self.bump();

        if self.currently_is(SyntaxKind::BracketClose) {
            let close = self.current_span();
            self.error_with_fix(
                DiagnosticKind::EmptyPin,
                TextRange::new(open.start(), close.end()),
                "a pin needs at least one item",
                "remove the empty pin",
                "",
            );
        } else {
            self.parse_body(CLOSERS);
        }

        self.close_delimiter(SyntaxKind::BracketClose, "`]`");
        self.finish_node();
    }

    /// Wraps the item started at `checkpoint`: `item [^ Type ]`.
    pub(super) fn parse_contains(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::Contains);
        self.assert_current(SyntaxKind::ContainsOpen);
        self.push_delimiter(SyntaxKind::ContainsOpen);
        self.bump();

        self.parse_type_match();

        self.close_delimiter(SyntaxKind::BracketClose, "`]`");
        self.finish_node();
    }
}
