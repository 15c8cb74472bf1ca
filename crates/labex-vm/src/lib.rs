//! Backtracking search runtime for compiled labex patterns.
//!
//! A [`Searcher`] runs one [`Program`](labex_core::Program) against one
//! [`LabelSource`](labex_core::LabelSource), reporting matches in position
//! order. Execution uses an explicit checkpoint stack, so deep patterns
//! never grow the call stack, and every search call is bounded by
//! [`FuelLimits`].

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

pub use engine::{
    Capture, CaptureMaterializer, CaptureValue, Captures, EffectLog, FuelLimits, MatchValue,
    Materializer, NoopTracer, PrintTracer, RuntimeEffect, RuntimeError, Searcher, Tracer, VM,
    Verbosity,
};
