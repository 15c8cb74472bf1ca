//! Read-only walk over the typed AST.
//!
//! Passes implement [`Visitor`] and override the `visit_*` hooks they care
//! about. An override calls the matching `walk_*` function to descend, or
//! returns early to prune the subtree. Type matches are leaves.
//!
//! ```ignore
//! impl Visitor for CaptureNames {
//!     fn visit_capture(&mut self, capture: &Capture) {
//!         self.names.extend(capture.name());
//!         walk_capture(self, capture);
//!     }
//! }
//! ```

use crate::parser::ast::{
    Alt, Capture, Contains, Expr, Group, Lookahead, NamedGroup, Pin, Quantifier, Root, Seq,
    TextGap, TypeMatch,
};

pub trait Visitor: Sized {
    fn visit(&mut self, root: &Root) {
        walk(self, root);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    fn visit_alt(&mut self, alt: &Alt) {
        walk_alt(self, alt);
    }

    fn visit_seq(&mut self, seq: &Seq) {
        walk_seq(self, seq);
    }

    fn visit_type_match(&mut self, _node: &TypeMatch) {
        // Leaf node
    }

    fn visit_capture(&mut self, capture: &Capture) {
        walk_capture(self, capture);
    }

    fn visit_group(&mut self, group: &Group) {
        walk_group(self, group);
    }

    fn visit_named_group(&mut self, group: &NamedGroup) {
        walk_named_group(self, group);
    }

    fn visit_pin(&mut self, pin: &Pin) {
        walk_pin(self, pin);
    }

    fn visit_lookahead(&mut self, look: &Lookahead) {
        walk_lookahead(self, look);
    }

    fn visit_quantifier(&mut self, quant: &Quantifier) {
        walk_quantifier(self, quant);
    }

    fn visit_contains(&mut self, contains: &Contains) {
        walk_contains(self, contains);
    }

    fn visit_text_gap(&mut self, _gap: &TextGap) {}
}

pub fn walk<V: Visitor>(visitor: &mut V, root: &Root) {
    if let Some(body) = root.body() {
        visitor.visit_expr(&body);
    }
}

pub fn walk_expr<V: Visitor>(visitor: &mut V, expr: &Expr) {
    match expr {
        Expr::Alt(a) => visitor.visit_alt(a),
        Expr::Seq(s) => visitor.visit_seq(s),
        Expr::TypeMatch(t) => visitor.visit_type_match(t),
        Expr::Capture(c) => visitor.visit_capture(c),
        Expr::Group(g) => visitor.visit_group(g),
        Expr::NamedGroup(g) => visitor.visit_named_group(g),
        Expr::Pin(p) => visitor.visit_pin(p),
        Expr::Lookahead(l) => visitor.visit_lookahead(l),
        Expr::Quantifier(q) => visitor.visit_quantifier(q),
        Expr::Contains(c) => visitor.visit_contains(c),
        Expr::TextGap(g) => visitor.visit_text_gap(g),
    }
}

pub fn walk_alt<V: Visitor>(visitor: &mut V, alt: &Alt) {
    for branch in alt.branches() {
        visitor.visit_seq(&branch);
    }
}

pub fn walk_seq<V: Visitor>(visitor: &mut V, seq: &Seq) {
    for item in seq.items() {
        visitor.visit_expr(&item);
    }
}

pub fn walk_capture<V: Visitor>(visitor: &mut V, capture: &Capture) {
    if let Some(type_match) = capture.type_match() {
        visitor.visit_type_match(&type_match);
    }
}

pub fn walk_group<V: Visitor>(visitor: &mut V, group: &Group) {
    if let Some(body) = group.body() {
        visitor.visit_expr(&body);
    }
}

pub fn walk_named_group<V: Visitor>(visitor: &mut V, group: &NamedGroup) {
    if let Some(body) = group.body() {
        visitor.visit_expr(&body);
    }
}

pub fn walk_pin<V: Visitor>(visitor: &mut V, pin: &Pin) {
    if let Some(body) = pin.body() {
        visitor.visit_expr(&body);
    }
}

pub fn walk_lookahead<V: Visitor>(visitor: &mut V, look: &Lookahead) {
    if let Some(body) = look.body() {
        visitor.visit_expr(&body);
    }
}

pub fn walk_quantifier<V: Visitor>(visitor: &mut V, quant: &Quantifier) {
    if let Some(inner) = quant.inner() {
        visitor.visit_expr(&inner);
    }
}

pub fn walk_contains<V: Visitor>(visitor: &mut V, contains: &Contains) {
    if let Some(inner) = contains.inner() {
        visitor.visit_expr(&inner);
    }
    if let Some(target) = contains.target() {
        visitor.visit_type_match(&target);
    }
}
