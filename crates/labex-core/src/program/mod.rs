//! Compiled matcher programs.
//!
//! A [`Program`] is an immutable graph of [`Step`]s produced by the compiler
//! and executed by the search runtime. Once built it is never modified, so a
//! single program can back any number of concurrent searches.

mod dump;
mod step;

#[cfg(test)]
mod program_tests;

pub use dump::{dump, format_step};
pub use step::{CaptureId, LabelTest, SlotId, Step, StepId};

use crate::LabelTypeId;

/// Raw parts assembled by the compiler.
#[derive(Debug, Clone, Default)]
pub struct ProgramParts {
    pub source: String,
    pub steps: Vec<Step>,
    pub entry: Option<StepId>,
    pub slot_count: usize,
    pub captures: Vec<String>,
    /// `Label` steps that can consume the first label of a match, or `None`
    /// when the pattern can match without consuming anything.
    pub leading: Option<Vec<StepId>>,
}

/// Immutable compiled pattern.
#[derive(Debug, Clone)]
pub struct Program {
    source: String,
    steps: Vec<Step>,
    entry: StepId,
    slot_count: usize,
    captures: Vec<String>,
    leading: Option<Vec<StepId>>,
    referenced_types: Vec<LabelTypeId>,
}

impl Program {
    /// Finishes a program from compiler output.
    ///
    /// An empty step list yields the program that accepts immediately.
    pub fn from_parts(parts: ProgramParts) -> Self {
        let ProgramParts {
            source,
            mut steps,
            entry,
            slot_count,
            captures,
            leading,
        } = parts;

        if steps.is_empty() {
            steps.push(Step::Accept);
        }
        let entry = entry.unwrap_or(StepId::new(0));

        let mut referenced_types: Vec<LabelTypeId> = steps
            .iter()
            .filter_map(|step| match step {
                Step::Label { test, .. } | Step::Contains { test, .. } => Some(test.ty),
                _ => None,
            })
            .collect();
        referenced_types.sort();
        referenced_types.dedup();

        let program = Self {
            source,
            steps,
            entry,
            slot_count,
            captures,
            leading,
            referenced_types,
        };
        program.validate();
        program
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Step at `id`.
    ///
    /// # Panics
    /// If `id` is out of range. Programs built by [`Program::from_parts`]
    /// only reference steps they contain.
    #[inline]
    pub fn step(&self, id: StepId) -> &Step {
        &self.steps[id.index()]
    }

    pub fn entry(&self) -> StepId {
        self.entry
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    pub fn captures(&self) -> &[String] {
        &self.captures
    }

    pub fn capture_name(&self, id: CaptureId) -> &str {
        &self.captures[id.index()]
    }

    pub fn leading(&self) -> Option<&[StepId]> {
        self.leading.as_deref()
    }

    /// Every label type a `Label` or `Contains` step tests, sorted.
    pub fn referenced_types(&self) -> &[LabelTypeId] {
        &self.referenced_types
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
