//! Read-only label storage interface consumed by the search runtime.

use crate::{Label, LabelTypeId, Span};

/// Ordered, per-type access to a document's labels.
///
/// Implementations must return labels of a type in `(begin, end)` order and
/// must never return a label beginning before the requested position; the
/// runtime treats that as an invariant violation.
pub trait LabelSource {
    /// Extent of the document; candidate starts never leave it.
    fn bounding_span(&self) -> Span;

    /// Raw document text.
    fn text(&self) -> &str;

    /// First label of `ty` with `begin >= pos`.
    fn first_at_or_after(&self, ty: LabelTypeId, pos: usize) -> Option<&Label>;

    /// Every label of `ty`, in order.
    fn all_of(&self, ty: LabelTypeId) -> Box<dyn Iterator<Item = &Label> + '_>;

    /// Labels of `ty` with `begin >= pos`, in order.
    ///
    /// The default scans [`all_of`](Self::all_of); indexed sources should
    /// seek directly.
    fn labels_from(&self, ty: LabelTypeId, pos: usize) -> Box<dyn Iterator<Item = &Label> + '_> {
        Box::new(self.all_of(ty).skip_while(move |label| label.begin() < pos))
    }
}
