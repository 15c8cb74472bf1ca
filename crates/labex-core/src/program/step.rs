//! Matcher steps.

use std::fmt;

use crate::{Label, LabelTypeId, Predicate, all_match};

/// Index of a step in a [`Program`](super::Program).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepId(u32);

impl StepId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Register slot. Each construct that needs to remember where it started
/// (groups, pins, lookaheads, atomic regions, loop guards) owns one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(u16);

impl SlotId {
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// Index into the program's capture-name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaptureId(u16);

impl CaptureId {
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Type plus conjunctive predicates, resolved at compile time.
#[derive(Debug, Clone)]
pub struct LabelTest {
    pub ty: LabelTypeId,
    pub type_name: String,
    pub predicates: Vec<Predicate>,
}

impl LabelTest {
    pub fn accepts(&self, label: &Label) -> bool {
        label.type_id() == self.ty && all_match(&self.predicates, label.payload())
    }
}

impl fmt::Display for LabelTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name)?;
        if self.predicates.is_empty() {
            return Ok(());
        }
        f.write_str("<")?;
        for (i, predicate) in self.predicates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{predicate}")?;
        }
        f.write_str(">")
    }
}

/// One node of the matcher graph.
///
/// Every step except `Accept` names its successor(s) explicitly; there is no
/// fall-through.
#[derive(Debug, Clone)]
pub enum Step {
    /// Whole pattern matched.
    Accept,

    /// Consume the next label of a type. Labels of that type sharing the
    /// same begin are alternatives.
    Label {
        test: LabelTest,
        capture: Option<CaptureId>,
        next: StepId,
    },

    /// Try `primary`; on failure resume at `alternate`.
    Split { primary: StepId, alternate: StepId },

    /// Record position, consumed-label count and choice depth.
    Save { slot: SlotId, next: StepId },

    /// Bind the span consumed since `slot` was saved.
    CaptureSpan {
        capture: CaptureId,
        slot: SlotId,
        next: StepId,
    },

    /// Fail a loop iteration that consumed nothing.
    CheckProgress { slot: SlotId, next: StepId },

    /// Labels consumed since `slot` must form a gapless chain.
    CheckContiguous { slot: SlotId, next: StepId },

    /// Only whitespace between the position saved in `slot` and the first
    /// label consumed after it.
    CheckNoText { slot: SlotId, next: StepId },

    /// Zero-width: some label passing `test` lies within the span consumed
    /// since `slot`.
    Contains {
        slot: SlotId,
        test: LabelTest,
        next: StepId,
    },

    /// Begin a region whose choice points are discarded on exit.
    AtomicStart { slot: SlotId, next: StepId },

    /// Discard choice points created since the matching `AtomicStart`.
    AtomicEnd { slot: SlotId, next: StepId },

    /// Begin a lookahead running `body`; matching resumes at `after`.
    LookStart {
        slot: SlotId,
        negative: bool,
        body: StepId,
        after: StepId,
    },

    /// Lookahead body matched.
    LookEnd {
        slot: SlotId,
        negative: bool,
        after: StepId,
    },
}

impl Step {
    /// Steps control may continue to, in preference order.
    pub fn successors(&self) -> Vec<StepId> {
        match self {
            Step::Accept => Vec::new(),
            Step::Split { primary, alternate } => vec![*primary, *alternate],
            Step::LookStart { body, after, .. } => vec![*body, *after],
            Step::LookEnd { after, .. } => vec![*after],
            Step::Label { next, .. }
            | Step::Save { next, .. }
            | Step::CaptureSpan { next, .. }
            | Step::CheckProgress { next, .. }
            | Step::CheckContiguous { next, .. }
            | Step::CheckNoText { next, .. }
            | Step::Contains { next, .. }
            | Step::AtomicStart { next, .. }
            | Step::AtomicEnd { next, .. } => vec![*next],
        }
    }

    /// Short opcode name used in dumps and traces.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Step::Accept => "accept",
            Step::Label { .. } => "label",
            Step::Split { .. } => "split",
            Step::Save { .. } => "save",
            Step::CaptureSpan { .. } => "group",
            Step::CheckProgress { .. } => "progress",
            Step::CheckContiguous { .. } => "contiguous",
            Step::CheckNoText { .. } => "notext",
            Step::Contains { .. } => "contains",
            Step::AtomicStart { .. } => "atomic",
            Step::AtomicEnd { .. } => "cut",
            Step::LookStart { negative: false, .. } => "look",
            Step::LookStart { negative: true, .. } => "look!",
            Step::LookEnd { .. } => "lookend",
        }
    }
}
