//! Runtime effects for VM execution.
//!
//! Effects record capture bindings on the current execution path. The log
//! is truncated on backtracking, so after an accept it holds exactly the
//! bindings of the successful path.

use labex_core::{CaptureId, Label, Span};

/// Capture binding produced by VM execution. Lifetime `'s` is the label
/// source the labels are borrowed from.
#[derive(Debug, Clone, Copy)]
pub enum RuntimeEffect<'s> {
    /// `name:Type` bound a single label.
    Label { capture: CaptureId, label: &'s Label },
    /// `(?<name> ...)` bound the span its body consumed.
    Span { capture: CaptureId, span: Span },
}

impl RuntimeEffect<'_> {
    pub fn capture(&self) -> CaptureId {
        match self {
            RuntimeEffect::Label { capture, .. } | RuntimeEffect::Span { capture, .. } => *capture,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            RuntimeEffect::Label { label, .. } => label.span(),
            RuntimeEffect::Span { span, .. } => *span,
        }
    }
}

/// Effect log with truncation support for backtracking.
#[derive(Debug)]
pub struct EffectLog<'s>(Vec<RuntimeEffect<'s>>);

impl<'s> EffectLog<'s> {
    /// Create an empty effect log.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Push an effect to the log.
    #[inline]
    pub fn push(&mut self, effect: RuntimeEffect<'s>) {
        self.0.push(effect);
    }

    /// Get current length (used as watermark for backtracking).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Truncate to watermark (for backtracking).
    #[inline]
    pub fn truncate(&mut self, watermark: usize) {
        self.0.truncate(watermark);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Get effects as slice.
    pub fn as_slice(&self) -> &[RuntimeEffect<'s>] {
        &self.0
    }
}

impl Default for EffectLog<'_> {
    fn default() -> Self {
        Self::new()
    }
}
