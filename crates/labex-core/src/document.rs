//! In-memory label store with sorted per-type indices.

use std::collections::HashMap;

use crate::{Label, LabelSource, LabelTypeId, Span};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("label {span} is not within the document text (length {len})")]
    LabelOutOfBounds { span: Span, len: usize },

    #[error("bounding span {span} exceeds the document text (length {len})")]
    BoundsOutOfText { span: Span, len: usize },
}

/// Labels of one type, sorted by `(begin, end)`.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    labels: Vec<Label>,
}

impl LabelIndex {
    fn from_unsorted(mut labels: Vec<Label>) -> Self {
        labels.sort_by_key(|label| (label.begin(), label.end()));
        Self { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.labels.iter()
    }

    /// Binary search for the first label with `begin >= pos`.
    fn seek(&self, pos: usize) -> usize {
        self.labels.partition_point(|label| label.begin() < pos)
    }

    pub fn first_at_or_after(&self, pos: usize) -> Option<&Label> {
        self.labels.get(self.seek(pos))
    }

    pub fn from(&self, pos: usize) -> &[Label] {
        &self.labels[self.seek(pos)..]
    }
}

/// Document text plus its labels.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    bounds: Span,
    indices: HashMap<LabelTypeId, LabelIndex>,
}

impl Document {
    pub fn builder(text: impl Into<String>) -> DocumentBuilder {
        DocumentBuilder::new(text)
    }

    pub fn index(&self, ty: LabelTypeId) -> Option<&LabelIndex> {
        self.indices.get(&ty)
    }

    /// Total number of labels across all types.
    pub fn label_count(&self) -> usize {
        self.indices.values().map(LabelIndex::len).sum()
    }
}

impl LabelSource for Document {
    fn bounding_span(&self) -> Span {
        self.bounds
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn first_at_or_after(&self, ty: LabelTypeId, pos: usize) -> Option<&Label> {
        self.indices.get(&ty)?.first_at_or_after(pos)
    }

    fn all_of(&self, ty: LabelTypeId) -> Box<dyn Iterator<Item = &Label> + '_> {
        match self.indices.get(&ty) {
            Some(index) => Box::new(index.iter()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn labels_from(&self, ty: LabelTypeId, pos: usize) -> Box<dyn Iterator<Item = &Label> + '_> {
        match self.indices.get(&ty) {
            Some(index) => Box::new(index.from(pos).iter()),
            None => Box::new(std::iter::empty()),
        }
    }
}

pub struct DocumentBuilder {
    text: String,
    bounds: Option<Span>,
    labels: HashMap<LabelTypeId, Vec<Label>>,
}

impl DocumentBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bounds: None,
            labels: HashMap::new(),
        }
    }

    /// Restrict matching to a sub-span. Defaults to the whole text.
    pub fn bounds(mut self, span: Span) -> Self {
        self.bounds = Some(span);
        self
    }

    pub fn label(mut self, label: Label) -> Self {
        self.push(label);
        self
    }

    pub fn labels(mut self, labels: impl IntoIterator<Item = Label>) -> Self {
        for label in labels {
            self.push(label);
        }
        self
    }

    pub fn push(&mut self, label: Label) {
        self.labels.entry(label.type_id()).or_default().push(label);
    }

    pub fn build(self) -> Result<Document, DocumentError> {
        let len = self.text.len();
        let bounds = self.bounds.unwrap_or(Span::new(0, len));
        if bounds.begin > bounds.end || bounds.end > len {
            return Err(DocumentError::BoundsOutOfText { span: bounds, len });
        }

        let out_of_bounds = |label: &&Label| label.begin() > label.end() || label.end() > len;
        if let Some(label) = self.labels.values().flatten().find(out_of_bounds) {
            return Err(DocumentError::LabelOutOfBounds {
                span: label.span(),
                len,
            });
        }

        let indices = self
            .labels
            .into_iter()
            .map(|(ty, labels)| (ty, LabelIndex::from_unsorted(labels)))
            .collect();

        Ok(Document {
            text: self.text,
            bounds,
            indices,
        })
    }
}
