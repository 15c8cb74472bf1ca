//! Lowering of analyzed expressions into a matcher [`Program`].
//!
//! Construction is continuation-passing: every expression is compiled
//! against the step that follows it (its exit) and returns its own entry
//! step. Steps are therefore emitted back to front, with `Accept` at index 0.
//! Loops reserve their `Split` first and patch it once the body exists.
//!
//! # Module Organization
//!
//! - `expressions`: type matches, captures, groups, pins, containment, lookahead
//! - `sequences`: sequences, `->` gaps and alternation
//! - `quantifier`: greedy, lazy and possessive repetition
//! - `leading`: the set of label steps that can start a match

mod expressions;
mod leading;
mod quantifier;
mod sequences;


use indexmap::IndexSet;

use labex_core::{CaptureId, LabelTest, Program, ProgramParts, SlotId, Step, StepId};

use crate::analyze::{Analysis, Repeat};
use crate::parser::ast::{Expr, Quantifier, TypeMatch};
use crate::parser::Root;

pub use leading::leading_steps;

/// Upper bound on program size. Bounded repetition multiplies step counts,
/// so nested `{m,n}` can blow up quickly.
pub const MAX_STEPS: usize = 1 << 18;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("program exceeds {MAX_STEPS} steps")]
    TooManySteps,

    #[error("program needs more than {} registers", u16::MAX)]
    TooManySlots,

    #[error("more than {} distinct capture names", u16::MAX)]
    TooManyCaptures,
}

/// Compiler state for one expression.
pub struct Compiler<'a> {
    analysis: &'a Analysis,
    pub(super) steps: Vec<Step>,
    slot_count: usize,
    captures: IndexSet<String>,
    error: Option<CompileError>,
}

impl<'a> Compiler<'a> {
    pub fn new(analysis: &'a Analysis) -> Self {
        Self {
            analysis,
            steps: vec![Step::Accept],
            slot_count: 0,
            captures: IndexSet::new(),
            error: None,
        }
    }

    /// Compiles `ast` into a program whose dump shows `source`.
    pub fn compile(
        ast: &Root,
        analysis: &'a Analysis,
        source: &str,
    ) -> Result<Program, CompileError> {
        let mut compiler = Self::new(analysis);
        let accept = StepId::new(0);

        let entry = match ast.body() {
            Some(body) => compiler.compile_expr(&body, accept),
            None => accept,
        };
        if let Some(error) = compiler.error {
            return Err(error);
        }

        let leading = leading_steps(&compiler.steps, entry);
        Ok(Program::from_parts(ProgramParts {
            source: source.to_owned(),
            steps: compiler.steps,
            entry: Some(entry),
            slot_count: compiler.slot_count,
            captures: compiler.captures.into_iter().collect(),
            leading,
        }))
    }

    /// Compiles `expr` so that it continues at `exit`. Returns its entry.
    pub(super) fn compile_expr(&mut self, expr: &Expr, exit: StepId) -> StepId {
        if self.error.is_some() {
            return exit;
        }
        match expr {
            Expr::TypeMatch(node) => self.compile_type_match(node, None, exit),
            Expr::Capture(node) => self.compile_capture(node, exit),
            Expr::Seq(seq) => self.compile_seq(seq, exit),
            Expr::Alt(alt) => self.compile_alt(alt, exit),
            Expr::Group(group) => match group.body() {
                Some(body) => self.compile_expr(&body, exit),
                None => exit,
            },
            Expr::NamedGroup(group) => self.compile_named_group(group, exit),
            Expr::Pin(pin) => self.compile_pin(pin, exit),
            Expr::Lookahead(look) => self.compile_lookahead(look, exit),
            Expr::Quantifier(quant) => self.compile_quantifier(quant, exit),
            Expr::Contains(contains) => self.compile_contains(contains, exit),
            // Gaps are lowered together with the item that follows them
            Expr::TextGap(_) => exit,
        }
    }

    pub(super) fn emit(&mut self, step: Step) -> StepId {
        if self.steps.len() >= MAX_STEPS {
            self.fail(CompileError::TooManySteps);
            return StepId::new(0);
        }
        let id = StepId::new(self.steps.len() as u32);
        self.steps.push(step);
        id
    }

    /// Reserves a step to be filled in by [`Compiler::patch`].
    pub(super) fn reserve(&mut self) -> StepId {
        self.emit(Step::Accept)
    }

    pub(super) fn patch(&mut self, id: StepId, step: Step) {
        if let Some(slot) = self.steps.get_mut(id.index())
            && self.error.is_none()
        {
            *slot = step;
        }
    }

    pub(super) fn new_slot(&mut self) -> SlotId {
        if self.slot_count >= u16::MAX as usize {
            self.fail(CompileError::TooManySlots);
            return SlotId::new(0);
        }
        let slot = SlotId::new(self.slot_count as u16);
        self.slot_count += 1;
        slot
    }

    /// Capture names share one table; repeated names share one id.
    pub(super) fn capture_id(&mut self, name: &str) -> CaptureId {
        let (index, _) = self.captures.insert_full(name.to_owned());
        if index >= u16::MAX as usize {
            self.fail(CompileError::TooManyCaptures);
            return CaptureId::new(0);
        }
        CaptureId::new(index as u16)
    }

    pub(super) fn label_test(&self, node: &TypeMatch) -> LabelTest {
        self.analysis
            .tests
            .get(node)
            .cloned()
            .expect("type matches are resolved before lowering")
    }

    pub(super) fn repeat(&self, node: &Quantifier) -> Option<Repeat> {
        self.analysis.repeats.get(node).copied()
    }

    fn fail(&mut self, error: CompileError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}
