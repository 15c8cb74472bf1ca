#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for labex.
//!
//! Three layers:
//! - **Labels**: spans, typed labels, and the [`LabelSource`] query interface
//!   with an in-memory [`Document`] implementation
//! - **Registry**: label types, aliases, and typed attribute accessors
//! - **Programs**: compiled predicates and the immutable matcher [`Program`]
//!   executed by the search runtime

mod colors;
mod document;
mod invariants;
mod label;
mod predicate;
mod registry;
mod source;
mod span;
mod value;

pub mod program;

#[cfg(test)]
mod predicate_tests;

pub use colors::Colors;
pub use document::{Document, DocumentBuilder, DocumentError, LabelIndex};
pub use label::{Label, LabelTypeId};
pub use predicate::{Comparator, Predicate, RegexMatcher, all_match};
pub use program::{CaptureId, LabelTest, Program, ProgramParts, SlotId, Step, StepId};
pub use registry::{
    AttrEnum, AttrKind, AttrMap, Attribute, DynamicTypeBuilder, RegistryError, TypeBuilder,
    TypeDescriptor, TypeRegistry, UnknownType,
};
pub use source::LabelSource;
pub use span::Span;
pub use value::AttrValue;
