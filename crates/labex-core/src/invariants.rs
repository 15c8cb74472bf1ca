//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::program::{Program, Step};

impl Program {
    /// Panics if a step references a missing step, slot, or capture.
    pub(crate) fn validate(&self) {
        assert!(
            self.entry().index() < self.len(),
            "Program: entry {} out of range ({} steps)",
            self.entry(),
            self.len()
        );
        for (index, step) in self.steps().iter().enumerate() {
            for next in step.successors() {
                assert!(
                    next.index() < self.len(),
                    "Program: step {index:02} jumps to missing step {next}"
                );
            }
            if let Some(slot) = slot_of(step) {
                assert!(
                    slot < self.slot_count(),
                    "Program: step {index:02} uses slot {slot} of {}",
                    self.slot_count()
                );
            }
            if let Some(capture) = capture_of(step) {
                assert!(
                    capture < self.captures().len(),
                    "Program: step {index:02} binds unknown capture {capture}"
                );
            }
        }
        if let Some(leading) = self.leading() {
            for id in leading {
                assert!(
                    matches!(self.steps().get(id.index()), Some(Step::Label { .. })),
                    "Program: leading step {id} is not a label step"
                );
            }
        }
    }
}

fn slot_of(step: &Step) -> Option<usize> {
    match step {
        Step::Save { slot, .. }
        | Step::CaptureSpan { slot, .. }
        | Step::CheckProgress { slot, .. }
        | Step::CheckContiguous { slot, .. }
        | Step::CheckNoText { slot, .. }
        | Step::Contains { slot, .. }
        | Step::AtomicStart { slot, .. }
        | Step::AtomicEnd { slot, .. }
        | Step::LookStart { slot, .. }
        | Step::LookEnd { slot, .. } => Some(slot.index()),
        Step::Accept | Step::Label { .. } | Step::Split { .. } => None,
    }
}

fn capture_of(step: &Step) -> Option<usize> {
    match step {
        Step::Label {
            capture: Some(capture),
            ..
        }
        | Step::CaptureSpan { capture, .. } => Some(capture.index()),
        _ => None,
    }
}
