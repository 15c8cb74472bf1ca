use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{LITERAL_RECOVERY, LITERALS, PREDICATE_RECOVERY};

impl Parser<'_> {
    /// `Type` or `Type<attr=lit, ...>`
    pub(super) fn parse_type_match(&mut self) {
        self.start_node(SyntaxKind::TypeMatch);

        if !self.eat_token(SyntaxKind::Id) {
            self.error(DiagnosticKind::ExpectedTypeName);
            self.finish_node();
            return;
        }

        if self.currently_is(SyntaxKind::AngleOpen) {
            self.parse_predicates();
        }

        self.finish_node();
    }

    /// `name:Type<...>`
    pub(super) fn parse_capture(&mut self) {
        self.start_node(SyntaxKind::Capture);
        self.assert_current(SyntaxKind::Id);
        self.bump();
        self.expect(SyntaxKind::Colon, "`:` after capture name");

        self.parse_type_match();

        self.finish_node();
    }

    /// `< predicate (, predicate)* >`
    fn parse_predicates(&mut self) {
        self.start_node(SyntaxKind::Predicates);
        self.push_delimiter(SyntaxKind::AngleOpen);
        self.bump();

        self.parse_predicate();
        while self.eat_token(SyntaxKind::Comma) {
            self.parse_predicate();
        }

        self.close_delimiter(SyntaxKind::AngleClose, "`>` or `,`");
        self.finish_node();
    }

    /// `attr = literal (| literal)*`
    fn parse_predicate(&mut self) {
        self.start_node(SyntaxKind::Predicate);

        if !self.eat_token(SyntaxKind::Id) {
            self.error_recover(DiagnosticKind::ExpectedAttributeName, PREDICATE_RECOVERY);
            self.finish_node();
            return;
        }

        if !self.expect(SyntaxKind::Equals, "`=` after attribute name") {
            self.finish_node();
            return;
        }

        self.parse_literal();
        while self.eat_token(SyntaxKind::Pipe) {
            self.parse_literal();
        }

        self.finish_node();
    }

    fn parse_literal(&mut self) {
        if self.currently_is_one_of(LITERALS) {
            self.bump();
            return;
        }
        self.error_recover(DiagnosticKind::ExpectedLiteral, LITERAL_RECOVERY);
    }
}
