//! Runtime engine for executing compiled labex patterns.
//!
//! The VM runs one anchored attempt at a time, producing an effect log
//! that is materialized into captures. The searcher drives attempts from
//! candidate start to candidate start.

mod checkpoint;
mod effect;
mod error;
mod materializer;
mod registers;
mod searcher;
mod trace;
mod value;
mod vm;

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod trace_tests;

pub use effect::{EffectLog, RuntimeEffect};
pub use error::RuntimeError;
pub use materializer::{Capture, CaptureMaterializer, Captures, Materializer};
pub use searcher::Searcher;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use value::{CaptureValue, MatchValue};
pub use vm::{FuelLimits, VM};
