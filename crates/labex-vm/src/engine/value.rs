//! Serializable match records.

use serde::Serialize;

use labex_core::Span;

use super::materializer::Captures;

/// A match with the text it covers, ready for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchValue {
    pub span: Span,
    pub text: String,
    pub captures: Vec<CaptureValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureValue {
    pub name: String,
    pub span: Span,
    pub text: String,
    /// Whether the capture bound a single label rather than a group span.
    pub label: bool,
}

impl MatchValue {
    pub fn new(text: &str, span: Span, captures: &Captures<'_>) -> Self {
        let excerpt = |span: Span| text.get(span.range()).unwrap_or_default().to_owned();
        Self {
            span,
            text: excerpt(span),
            captures: captures
                .iter()
                .map(|(name, capture)| CaptureValue {
                    name: name.to_owned(),
                    span: capture.span,
                    text: excerpt(capture.span),
                    label: capture.label.is_some(),
                })
                .collect(),
        }
    }
}
