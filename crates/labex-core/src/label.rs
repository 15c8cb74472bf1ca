//! Typed, attributed spans produced by upstream annotators.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::Span;

/// Index of a label type in a [`TypeRegistry`](crate::TypeRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LabelTypeId(u32);

impl LabelTypeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LabelTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// A label: span + type + opaque payload.
///
/// The payload is shared, so cloning a label is cheap. The engine never
/// mutates labels; it only reads spans and, through registered accessors,
/// payload attributes.
#[derive(Clone)]
pub struct Label {
    span: Span,
    type_id: LabelTypeId,
    payload: Arc<dyn Any + Send + Sync>,
}

impl Label {
    pub fn new<T: Any + Send + Sync>(type_id: LabelTypeId, span: Span, payload: T) -> Self {
        Self {
            span,
            type_id,
            payload: Arc::new(payload),
        }
    }

    /// Label without attributes.
    pub fn bare(type_id: LabelTypeId, span: Span) -> Self {
        Self::new(type_id, span, ())
    }

    pub fn from_shared(
        type_id: LabelTypeId,
        span: Span,
        payload: Arc<dyn Any + Send + Sync>,
    ) -> Self {
        Self {
            span,
            type_id,
            payload,
        }
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn begin(&self) -> usize {
        self.span.begin
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    #[inline]
    pub fn type_id(&self) -> LabelTypeId {
        self.type_id
    }

    pub fn payload(&self) -> &(dyn Any + Send + Sync) {
        self.payload.as_ref()
    }

    pub fn payload_as<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Same label object (not merely equal span and type).
    pub fn ptr_eq(&self, other: &Label) -> bool {
        Arc::ptr_eq(&self.payload, &other.payload)
            && self.span == other.span
            && self.type_id == other.type_id
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Label")
            .field("span", &self.span)
            .field("type_id", &self.type_id)
            .finish_non_exhaustive()
    }
}
