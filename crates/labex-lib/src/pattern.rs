//! Compiled, shareable patterns.

use std::sync::Arc;

use labex_core::{LabelSource, Program, Span};
use labex_vm::{FuelLimits, MatchValue, RuntimeError, Searcher};

/// A compiled pattern.
///
/// Cloning is cheap and the program is immutable, so one pattern can be
/// searched from many threads at once; each search owns its [`Searcher`].
#[derive(Debug, Clone)]
pub struct Pattern {
    program: Arc<Program>,
}

impl Pattern {
    pub fn new(program: Program) -> Self {
        Self {
            program: Arc::new(program),
        }
    }

    /// The expression text the pattern was compiled from.
    pub fn source(&self) -> &str {
        self.program.source()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn searcher<'s>(&'s self, source: &'s dyn LabelSource) -> Searcher<'s> {
        Searcher::new(&self.program, source)
    }

    pub fn searcher_with_limits<'s>(
        &'s self,
        source: &'s dyn LabelSource,
        limits: FuelLimits,
    ) -> Searcher<'s> {
        Searcher::with_limits(&self.program, source, limits)
    }

    /// Spans of every match, left to right.
    pub fn find_all(&self, source: &dyn LabelSource) -> Result<Vec<Span>, RuntimeError> {
        self.collect(source, FuelLimits::default(), |searcher| searcher.span())
    }

    /// Every match with its captures, left to right.
    pub fn matches(
        &self,
        source: &dyn LabelSource,
        limits: FuelLimits,
    ) -> Result<Vec<MatchValue>, RuntimeError> {
        self.collect(source, limits, |searcher| searcher.match_value())
    }

    fn collect<T>(
        &self,
        source: &dyn LabelSource,
        limits: FuelLimits,
        mut extract: impl FnMut(&Searcher<'_>) -> Option<T>,
    ) -> Result<Vec<T>, RuntimeError> {
        let mut searcher = self.searcher_with_limits(source, limits);
        let mut found = Vec::new();
        loop {
            match searcher.search() {
                Ok(true) => found.extend(extract(&searcher)),
                Ok(false) => break,
                Err(err) => {
                    tracing::debug!(pattern = self.source(), error = %err, "search aborted");
                    return Err(err);
                }
            }
        }
        tracing::debug!(
            pattern = self.source(),
            matches = found.len(),
            "search finished"
        );
        Ok(found)
    }
}
