//! Virtual machine for executing compiled labex programs.
//!
//! One call to [`VM::attempt`] runs a single anchored attempt: the first
//! label it consumes must begin exactly at the start position, later label
//! steps take the next label of their type at or after the current end.

use labex_core::{Label, LabelSource, LabelTest, Program, SlotId, Span, Step, StepId};

use super::checkpoint::{Checkpoint, CheckpointStack, Resume};
use super::effect::{EffectLog, RuntimeEffect};
use super::error::RuntimeError;
use super::registers::{Register, Registers};
use super::trace::{NoopTracer, Tracer};

/// Runtime limits for one search call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FuelLimits {
    /// Maximum steps per search call (default: unlimited).
    pub exec_fuel: Option<u32>,
    /// Maximum open checkpoints (default: 65,536).
    pub checkpoint_limit: u32,
}

impl Default for FuelLimits {
    fn default() -> Self {
        Self {
            exec_fuel: None,
            checkpoint_limit: 65_536,
        }
    }
}

impl FuelLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = Some(fuel);
        self
    }

    pub fn checkpoint_limit(mut self, limit: u32) -> Self {
        self.checkpoint_limit = limit;
        self
    }
}

/// Virtual machine state for pattern execution.
///
/// Buffers are kept between attempts; the step count is only cleared by
/// [`VM::refuel`], so a searcher can bound a whole search call.
pub struct VM<'s> {
    program: &'s Program,
    source: &'s dyn LabelSource,
    step: StepId,
    /// Where the current attempt is anchored.
    start: usize,
    /// End of the last consumed label, or `start`.
    pos: usize,
    /// Labels consumed on the current path.
    trail: Vec<&'s Label>,
    /// Co-starting labels to skip when a label step is re-entered.
    skip: usize,
    registers: Registers,
    checkpoints: CheckpointStack,
    effects: EffectLog<'s>,

    /// Steps executed since the last refuel.
    steps: u32,
    limits: FuelLimits,
}

impl<'s> VM<'s> {
    pub fn new(program: &'s Program, source: &'s dyn LabelSource, limits: FuelLimits) -> Self {
        Self {
            program,
            source,
            step: program.entry(),
            start: 0,
            pos: 0,
            trail: Vec::new(),
            skip: 0,
            registers: Registers::new(program.slot_count()),
            checkpoints: CheckpointStack::new(limits.checkpoint_limit),
            effects: EffectLog::new(),
            steps: 0,
            limits,
        }
    }

    pub fn limits(&self) -> FuelLimits {
        self.limits
    }

    /// Refill execution fuel.
    pub fn refuel(&mut self) {
        self.steps = 0;
    }

    /// Steps executed since the last refuel.
    pub fn fuel_consumed(&self) -> u32 {
        self.steps
    }

    /// Capture bindings of the last successful attempt.
    pub fn effects(&self) -> &EffectLog<'s> {
        &self.effects
    }

    /// Run one anchored attempt at `start`, returning the matched span.
    ///
    /// This is a convenience method that uses `NoopTracer`.
    pub fn attempt(&mut self, start: usize) -> Result<Option<Span>, RuntimeError> {
        self.attempt_with(start, &mut NoopTracer)
    }

    /// Run one anchored attempt with a tracer for debugging.
    pub fn attempt_with<T: Tracer>(
        &mut self,
        start: usize,
        tracer: &mut T,
    ) -> Result<Option<Span>, RuntimeError> {
        self.reset(start);
        tracer.trace_attempt(start);

        let program = self.program;
        loop {
            if let Some(fuel) = self.limits.exec_fuel
                && self.steps >= fuel
            {
                return Err(RuntimeError::ExecFuelExhausted(fuel));
            }
            self.steps = self.steps.saturating_add(1);

            let id = self.step;
            let step = program.step(id);
            tracer.trace_step(id, step);

            match self.exec(id, step, tracer) {
                Ok(()) | Err(RuntimeError::Backtracked) => continue,
                Err(RuntimeError::Accept) => {
                    let span = Span::new(self.start, self.pos);
                    tracer.trace_accept(span);
                    return Ok(Some(span));
                }
                Err(RuntimeError::NoMatch) => {
                    tracer.trace_no_match();
                    return Ok(None);
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn reset(&mut self, start: usize) {
        self.step = self.program.entry();
        self.start = start;
        self.pos = start;
        self.skip = 0;
        self.trail.clear();
        self.registers.reset();
        self.checkpoints.clear();
        self.effects.clear();
    }

    fn exec<T: Tracer>(
        &mut self,
        id: StepId,
        step: &'s Step,
        tracer: &mut T,
    ) -> Result<(), RuntimeError> {
        match step {
            Step::Accept => Err(RuntimeError::Accept),
            Step::Label {
                test,
                capture,
                next,
            } => {
                let label = self.take_label(id, test, tracer)?;
                if let Some(capture) = *capture {
                    self.emit(RuntimeEffect::Label { capture, label }, tracer);
                }
                self.step = *next;
                Ok(())
            }
            Step::Split { primary, alternate } => {
                self.push_checkpoint(id, Resume::Step(*alternate), tracer)?;
                self.step = *primary;
                Ok(())
            }
            Step::Save { slot, next } | Step::AtomicStart { slot, next } => {
                self.save(*slot);
                self.step = *next;
                Ok(())
            }
            Step::CaptureSpan {
                capture,
                slot,
                next,
            } => {
                let span = self.consumed_since(self.registers.get(*slot));
                self.emit(
                    RuntimeEffect::Span {
                        capture: *capture,
                        span,
                    },
                    tracer,
                );
                self.step = *next;
                Ok(())
            }
            Step::CheckProgress { slot, next } => {
                let passed = self.registers.get(*slot).pos != self.pos;
                self.check(passed, step, *next, tracer)
            }
            Step::CheckContiguous { slot, next } => {
                let passed = self.is_contiguous(*slot)?;
                self.check(passed, step, *next, tracer)
            }
            Step::CheckNoText { slot, next } => {
                let passed = self.is_gap_blank(*slot);
                self.check(passed, step, *next, tracer)
            }
            Step::Contains { slot, test, next } => {
                let passed = self.contains(*slot, test)?;
                self.check(passed, step, *next, tracer)
            }
            Step::AtomicEnd { slot, next } => {
                let depth = self.registers.get(*slot).depth;
                self.checkpoints.cut(depth);
                tracer.trace_cut(depth);
                self.step = *next;
                Ok(())
            }
            Step::LookStart {
                slot,
                negative,
                body,
                after,
            } => {
                self.save(*slot);
                let resume = Resume::Lookahead {
                    negative: *negative,
                    after: *after,
                };
                self.push_checkpoint(id, resume, tracer)?;
                self.step = *body;
                Ok(())
            }
            Step::LookEnd {
                slot,
                negative,
                after,
            } => self.exec_look_end(*slot, *negative, *after, tracer),
        }
    }

    /// Consume the next label passing `test`, or backtrack.
    fn take_label<T: Tracer>(
        &mut self,
        id: StepId,
        test: &LabelTest,
        tracer: &mut T,
    ) -> Result<&'s Label, RuntimeError> {
        let skip = std::mem::take(&mut self.skip);
        let source = self.source;
        let pos = self.pos;

        // Zero-width labels at `pos` already on the trail stay consumed
        let consumed: Vec<&Label> = self
            .trail
            .iter()
            .rev()
            .take_while(|label| label.begin() == pos && label.end() == pos)
            .copied()
            .collect();
        let mut labels = source
            .labels_from(test.ty, pos)
            .filter(|label| !consumed.iter().any(|taken| std::ptr::eq(*taken, *label)))
            .peekable();
        let Some(first) = labels.peek().map(|label| label.span()) else {
            tracer.trace_label_failure(test, pos);
            return Err(self.backtrack(tracer));
        };
        if first.begin < pos {
            return Err(RuntimeError::label_before(first, pos));
        }
        let begin = first.begin;
        // The first label of an attempt is anchored at its start
        if self.trail.is_empty() && begin != self.start {
            tracer.trace_label_failure(test, pos);
            return Err(self.backtrack(tracer));
        }

        let mut co_starting = labels
            .take_while(|label| label.begin() == begin)
            .filter(|label| test.accepts(label));
        let Some(label) = co_starting.nth(skip) else {
            tracer.trace_label_failure(test, pos);
            return Err(self.backtrack(tracer));
        };
        if co_starting.next().is_some() {
            let resume = Resume::Label {
                step: id,
                skip: skip + 1,
            };
            self.push_checkpoint(id, resume, tracer)?;
        }

        tracer.trace_label_success(test, label);
        self.trail.push(label);
        self.pos = label.end();
        Ok(label)
    }

    fn exec_look_end<T: Tracer>(
        &mut self,
        slot: SlotId,
        negative: bool,
        after: StepId,
        tracer: &mut T,
    ) -> Result<(), RuntimeError> {
        let depth = self.registers.get(slot).depth;
        let Some(barrier) = self.checkpoints.cut(depth) else {
            return Err(RuntimeError::InvariantViolation(format!(
                "lookahead barrier for {slot} missing at depth {depth}"
            )));
        };
        tracer.trace_cut(depth);

        if negative {
            return Err(self.backtrack(tracer));
        }
        self.restore(&barrier);
        self.step = after;
        Ok(())
    }

    fn check<T: Tracer>(
        &mut self,
        passed: bool,
        step: &Step,
        next: StepId,
        tracer: &mut T,
    ) -> Result<(), RuntimeError> {
        if !passed {
            tracer.trace_check_failure(step);
            return Err(self.backtrack(tracer));
        }
        self.step = next;
        Ok(())
    }

    /// Labels consumed since `slot` was saved chain without gaps.
    fn is_contiguous(&self, slot: SlotId) -> Result<bool, RuntimeError> {
        let since = self.registers.get(slot).trail_len;
        let pinned = self.trail.get(since..).unwrap_or_default();
        for pair in pinned.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.begin() < prev.end() {
                return Err(RuntimeError::InvariantViolation(format!(
                    "pinned label {} begins before its predecessor ends at {}",
                    next.span(),
                    prev.end()
                )));
            }
            if next.begin() != prev.end() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Only whitespace between the saved position and the first label
    /// consumed after it.
    fn is_gap_blank(&self, slot: SlotId) -> bool {
        let saved = self.registers.get(slot);
        let Some(first) = self.trail.get(saved.trail_len) else {
            return true;
        };
        self.source
            .text()
            .get(saved.pos..first.begin())
            .is_some_and(|gap| gap.chars().all(char::is_whitespace))
    }

    /// Some label passing `test` lies within the span consumed since `slot`.
    fn contains(&self, slot: SlotId, test: &LabelTest) -> Result<bool, RuntimeError> {
        let span = self.consumed_since(self.registers.get(slot));
        if span.is_empty() {
            return Ok(false);
        }
        for label in self.source.labels_from(test.ty, span.begin) {
            if label.begin() < span.begin {
                return Err(RuntimeError::label_before(label.span(), span.begin));
            }
            if label.begin() >= span.end {
                break;
            }
            if span.contains_span(label.span()) && test.accepts(label) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Span from the first label consumed after `saved` to the current
    /// position; empty when nothing was consumed.
    fn consumed_since(&self, saved: Register) -> Span {
        match self.trail.get(saved.trail_len) {
            Some(first) => Span::new(first.begin(), self.pos),
            None => Span::empty(self.pos),
        }
    }

    fn save(&mut self, slot: SlotId) {
        let value = Register {
            pos: self.pos,
            trail_len: self.trail.len(),
            depth: self.checkpoints.len(),
        };
        self.registers.set(slot, value);
    }

    fn emit<T: Tracer>(&mut self, effect: RuntimeEffect<'s>, tracer: &mut T) {
        tracer.trace_effect(&effect);
        self.effects.push(effect);
    }

    fn push_checkpoint<T: Tracer>(
        &mut self,
        id: StepId,
        resume: Resume,
        tracer: &mut T,
    ) -> Result<(), RuntimeError> {
        self.checkpoints.push(Checkpoint {
            pos: self.pos,
            trail_len: self.trail.len(),
            effect_watermark: self.effects.len(),
            undo_watermark: self.registers.watermark(),
            resume,
        })?;
        tracer.trace_checkpoint_created(id);
        Ok(())
    }

    fn restore(&mut self, checkpoint: &Checkpoint) {
        self.pos = checkpoint.pos;
        self.trail.truncate(checkpoint.trail_len);
        self.effects.truncate(checkpoint.effect_watermark);
        self.registers.rollback(checkpoint.undo_watermark);
    }

    /// Restore the most recent resumable checkpoint.
    ///
    /// Returns the control-flow signal for the dispatch loop:
    /// `Backtracked` when execution resumes, `NoMatch` when the attempt is
    /// out of alternatives.
    fn backtrack<T: Tracer>(&mut self, tracer: &mut T) -> RuntimeError {
        loop {
            let Some(checkpoint) = self.checkpoints.pop() else {
                return RuntimeError::NoMatch;
            };
            tracer.trace_backtrack();
            self.restore(&checkpoint);

            match checkpoint.resume {
                Resume::Step(next) => self.step = next,
                Resume::Label { step, skip } => {
                    self.step = step;
                    self.skip = skip;
                }
                Resume::Lookahead {
                    negative: true,
                    after,
                } => self.step = after,
                // Positive lookahead body failed
                Resume::Lookahead {
                    negative: false, ..
                } => continue,
            }
            return RuntimeError::Backtracked;
        }
    }
}
