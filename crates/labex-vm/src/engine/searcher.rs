//! Match-by-match search over a label source.
//!
//! Each [`Searcher::search`] call runs anchored attempts from the cursor,
//! moving to the next candidate start after every failed attempt:
//!
//! ```text
//! SCANNING -> MATCHING -> SUCCESS
//!     ^          |
//!     +----------+ (no match: next candidate)
//!     |
//!     +-> EXHAUSTED (no candidate inside the bounding span)
//! ```

use labex_core::{Label, LabelSource, Program, Span, Step};

use super::error::RuntimeError;
use super::materializer::{CaptureMaterializer, Captures, Materializer};
use super::trace::{NoopTracer, Tracer};
use super::value::MatchValue;
use super::vm::{FuelLimits, VM};

/// Per-(program, document) search state.
pub struct Searcher<'s> {
    program: &'s Program,
    source: &'s dyn LabelSource,
    vm: VM<'s>,
    cursor: usize,
    found: Option<Span>,
    captures: Captures<'s>,
}

impl<'s> Searcher<'s> {
    pub fn new(program: &'s Program, source: &'s dyn LabelSource) -> Self {
        Self::with_limits(program, source, FuelLimits::default())
    }

    pub fn with_limits(
        program: &'s Program,
        source: &'s dyn LabelSource,
        limits: FuelLimits,
    ) -> Self {
        Self {
            program,
            source,
            vm: VM::new(program, source, limits),
            cursor: source.bounding_span().begin,
            found: None,
            captures: Captures::empty(program),
        }
    }

    /// Find the next match at or after the cursor.
    ///
    /// Returns `Ok(false)` once no candidate start is left.
    pub fn search(&mut self) -> Result<bool, RuntimeError> {
        self.search_with(&mut NoopTracer)
    }

    pub fn search_with<T: Tracer>(&mut self, tracer: &mut T) -> Result<bool, RuntimeError> {
        self.clear_match();
        self.vm.refuel();
        let bounds = self.source.bounding_span();

        loop {
            if self.cursor > bounds.end {
                tracer.trace_exhausted();
                return Ok(false);
            }
            if self.attempt(tracer)? {
                return Ok(true);
            }
            let Some(next) = self.next_candidate()? else {
                tracer.trace_exhausted();
                return Ok(false);
            };
            tracer.trace_candidate(next);
            self.cursor = next;
        }
    }

    /// Try a single anchored match at the cursor, without moving to later
    /// candidates.
    pub fn match_at_cursor(&mut self) -> Result<bool, RuntimeError> {
        self.match_at_cursor_with(&mut NoopTracer)
    }

    pub fn match_at_cursor_with<T: Tracer>(
        &mut self,
        tracer: &mut T,
    ) -> Result<bool, RuntimeError> {
        self.clear_match();
        self.vm.refuel();
        if self.cursor > self.source.bounding_span().end {
            tracer.trace_exhausted();
            return Ok(false);
        }
        self.attempt(tracer)
    }

    fn attempt<T: Tracer>(&mut self, tracer: &mut T) -> Result<bool, RuntimeError> {
        let Some(span) = self.vm.attempt_with(self.cursor, tracer)? else {
            return Ok(false);
        };
        let materializer = CaptureMaterializer::new(self.program);
        self.captures = materializer.materialize(self.vm.effects().as_slice());
        self.found = Some(span);
        // Zero-width matches must still make progress
        self.cursor = if span.is_empty() {
            span.end + 1
        } else {
            span.end
        };
        Ok(true)
    }

    /// Smallest position after the cursor where an attempt can succeed.
    ///
    /// With a leading set, only labels passing one of the leading steps'
    /// tests qualify. A pattern that can match without consuming falls back
    /// to the first label of any type it references.
    fn next_candidate(&self) -> Result<Option<usize>, RuntimeError> {
        let after = self.cursor + 1;
        let source = self.source;
        let program = self.program;

        let mut best: Option<usize> = None;
        let mut offer = |label: &Label| -> Result<(), RuntimeError> {
            if label.begin() < after {
                return Err(RuntimeError::label_before(label.span(), after));
            }
            best = Some(best.map_or(label.begin(), |b| b.min(label.begin())));
            Ok(())
        };

        match program.leading() {
            Some(leading) => {
                for &id in leading {
                    let Step::Label { test, .. } = program.step(id) else {
                        continue;
                    };
                    let first = source.labels_from(test.ty, after).find(|l| test.accepts(l));
                    if let Some(label) = first {
                        offer(label)?;
                    }
                }
            }
            None => {
                for &ty in program.referenced_types() {
                    if let Some(label) = source.first_at_or_after(ty, after) {
                        offer(label)?;
                    }
                }
            }
        }
        Ok(best)
    }

    fn clear_match(&mut self) {
        self.found = None;
        self.captures.clear();
    }

    /// Forget the last match and move the cursor back to the start of the
    /// bounding span.
    pub fn reset(&mut self) {
        self.clear_match();
        self.cursor = self.source.bounding_span().begin;
    }

    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the last `search`/`match_at_cursor` call matched.
    pub fn found(&self) -> bool {
        self.found.is_some()
    }

    pub fn span(&self) -> Option<Span> {
        self.found
    }

    pub fn begin(&self) -> Option<usize> {
        self.found.map(|span| span.begin)
    }

    pub fn end(&self) -> Option<usize> {
        self.found.map(|span| span.end)
    }

    pub fn captures(&self) -> &Captures<'s> {
        &self.captures
    }

    pub fn capture_span(&self, name: &str) -> Option<Span> {
        self.captures.span(name)
    }

    pub fn capture_label(&self, name: &str) -> Option<&'s Label> {
        self.captures.label(name)
    }

    /// The last match as a serializable record.
    pub fn match_value(&self) -> Option<MatchValue> {
        let span = self.found?;
        Some(MatchValue::new(self.source.text(), span, &self.captures))
    }

    /// Steps executed by the last search call.
    pub fn fuel_consumed(&self) -> u32 {
        self.vm.fuel_consumed()
    }

    pub fn limits(&self) -> FuelLimits {
        self.vm.limits()
    }

    pub fn program(&self) -> &'s Program {
        self.program
    }
}
