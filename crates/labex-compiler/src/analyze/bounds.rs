//! Quantifier bounds validation.
//!
//! Resolves every quantifier to a `(min, max)` repetition range. Explicit
//! `{m,n}` counts must be non-negative, ordered, and at most
//! [`MAX_REPEAT`], because bounded repetition is unrolled into copies.

use indexmap::IndexMap;

use crate::analyze::visitor::{Visitor, walk_quantifier};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::{Binding, QuantifierOp, Root, SyntaxToken};
use crate::parser::ast::Quantifier;

/// Largest explicit repetition count.
pub const MAX_REPEAT: u32 = 1000;

/// Resolved repetition range of one quantifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeat {
    pub min: u32,
    /// `None` is unbounded.
    pub max: Option<u32>,
    pub binding: Binding,
}

impl Repeat {
    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }
}

pub type Repeats = IndexMap<Quantifier, Repeat>;

pub fn validate_bounds(ast: &Root, diag: &mut Diagnostics) -> Repeats {
    let mut validator = BoundsValidator {
        diag,
        repeats: IndexMap::new(),
    };
    validator.visit(ast);
    validator.repeats
}

struct BoundsValidator<'d> {
    diag: &'d mut Diagnostics,
    repeats: Repeats,
}

impl Visitor for BoundsValidator<'_> {
    fn visit_quantifier(&mut self, quant: &Quantifier) {
        if let Some(repeat) = self.resolve(quant) {
            self.repeats.insert(quant.clone(), repeat);
        }
        walk_quantifier(self, quant);
    }
}

impl BoundsValidator<'_> {
    fn resolve(&mut self, quant: &Quantifier) -> Option<Repeat> {
        let binding = quant.binding();
        let (min, max) = match quant.op()? {
            QuantifierOp::Optional => (0, Some(1)),
            QuantifierOp::Star => (0, None),
            QuantifierOp::Plus => (1, None),
            QuantifierOp::Bounded => {
                let bounds = quant.bounds()?;
                // Missing count was already reported by the parser
                let min_token = bounds.min()?;
                let min = self.count(&min_token)?;
                let max = match bounds.max() {
                    Some(token) => Some(self.count(&token)?),
                    None if bounds.is_open() => None,
                    None => Some(min),
                };
                if let Some(max) = max
                    && min > max
                {
                    self.diag
                        .report(
                            DiagnosticKind::InvalidQuantifierBounds,
                            bounds.as_cst().text_range(),
                        )
                        .message(format!("minimum {min} exceeds maximum {max}"))
                        .emit();
                    return None;
                }
                (min, max)
            }
        };
        Some(Repeat { min, max, binding })
    }

    fn count(&mut self, token: &SyntaxToken) -> Option<u32> {
        let text = token.text();
        if text.starts_with('-') {
            self.diag
                .report(DiagnosticKind::InvalidQuantifierBounds, token.text_range())
                .message("repetition count must be non-negative")
                .emit();
            return None;
        }
        match text.parse::<u32>() {
            Ok(value) if value <= MAX_REPEAT => Some(value),
            _ => {
                self.diag
                    .report(DiagnosticKind::BoundTooLarge, token.text_range())
                    .message(format!("`{text}` exceeds {MAX_REPEAT}"))
                    .emit();
                None
            }
        }
    }
}
