//! Tracing infrastructure for debugging VM execution.
//!
//! The tracer is a zero-cost abstraction: [`NoopTracer`] methods are empty
//! `#[inline(always)]` functions, so the searcher's generic code compiles
//! them away. [`PrintTracer`] collects a human-readable execution log.
//!
//! Tracing-only state (the step that created each checkpoint, for
//! backtrack display) lives in the tracer, never in the VM.

use labex_core::program::format_step;
use labex_core::{Colors, Label, LabelTest, Program, Span, Step, StepId};

use super::effect::RuntimeEffect;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Steps, label outcomes, failed checks, backtracks.
    #[default]
    Default,
    /// Adds label text and capture bindings.
    Verbose,
    /// Adds checkpoint creation and cuts.
    VeryVerbose,
}

/// Tracer trait for VM execution instrumentation.
///
/// Methods receive raw data the VM already has; formatting happens in the
/// implementation.
pub trait Tracer {
    /// Called when an anchored attempt begins.
    fn trace_attempt(&mut self, start: usize);

    /// Called before executing a step.
    fn trace_step(&mut self, id: StepId, step: &Step);

    /// Called after a label step consumed `label`.
    fn trace_label_success(&mut self, test: &LabelTest, label: &Label);

    /// Called when no label passing `test` is available from `pos`.
    fn trace_label_failure(&mut self, test: &LabelTest, pos: usize);

    /// Called when a progress, contiguity, text or containment check fails.
    fn trace_check_failure(&mut self, step: &Step);

    /// Called after a capture binding is recorded.
    fn trace_effect(&mut self, effect: &RuntimeEffect<'_>);

    /// Called when a checkpoint is pushed by step `id`.
    fn trace_checkpoint_created(&mut self, id: StepId);

    /// Called when checkpoints at or above `depth` are discarded.
    fn trace_cut(&mut self, depth: usize);

    /// Called when a checkpoint is restored.
    fn trace_backtrack(&mut self);

    /// Called when an attempt matched.
    fn trace_accept(&mut self, span: Span);

    /// Called when an attempt ran out of alternatives.
    fn trace_no_match(&mut self);

    /// Called when the searcher moves to the next candidate start.
    fn trace_candidate(&mut self, pos: usize);

    /// Called when no candidate start is left.
    fn trace_exhausted(&mut self);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_attempt(&mut self, _start: usize) {}

    #[inline(always)]
    fn trace_step(&mut self, _id: StepId, _step: &Step) {}

    #[inline(always)]
    fn trace_label_success(&mut self, _test: &LabelTest, _label: &Label) {}

    #[inline(always)]
    fn trace_label_failure(&mut self, _test: &LabelTest, _pos: usize) {}

    #[inline(always)]
    fn trace_check_failure(&mut self, _step: &Step) {}

    #[inline(always)]
    fn trace_effect(&mut self, _effect: &RuntimeEffect<'_>) {}

    #[inline(always)]
    fn trace_checkpoint_created(&mut self, _id: StepId) {}

    #[inline(always)]
    fn trace_cut(&mut self, _depth: usize) {}

    #[inline(always)]
    fn trace_backtrack(&mut self) {}

    #[inline(always)]
    fn trace_accept(&mut self, _span: Span) {}

    #[inline(always)]
    fn trace_no_match(&mut self) {}

    #[inline(always)]
    fn trace_candidate(&mut self, _pos: usize) {}

    #[inline(always)]
    fn trace_exhausted(&mut self) {}
}

/// Sub-line symbols.
mod symbols {
    pub const LABEL_SUCCESS: &str = "●";
    pub const LABEL_FAILURE: &str = "○";
    pub const CHECK_FAILURE: &str = "✗";
    pub const EFFECT: &str = "⬥";
    pub const CHECKPOINT: &str = "◇";
    pub const CUT: &str = "✂";
    pub const BACKTRACK: &str = "❮❮❮";
}

/// Longest label text shown before truncation.
const TEXT_BUDGET: usize = 32;

/// Tracer that collects an execution log for debugging.
pub struct PrintTracer<'s> {
    program: &'s Program,
    /// Document text, for label excerpts.
    text: &'s str,
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
    /// Parallel stack of checkpoint creation steps (for backtrack display).
    checkpoint_steps: Vec<StepId>,
}

impl<'s> PrintTracer<'s> {
    pub fn new(program: &'s Program, text: &'s str, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            program,
            text,
            verbosity,
            colors,
            lines: Vec::new(),
            checkpoint_steps: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All collected lines, newline-terminated.
    pub fn output(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    fn add_subline(&mut self, symbol: &str, content: &str) {
        self.lines.push(format!("      {symbol} {content}"));
    }

    /// Label type and span, plus the covered text when verbose.
    fn describe_label(&self, label: &Label, type_name: &str) -> String {
        let c = &self.colors;
        let mut out = format!("{type_name} {}{}{}", c.dim, label.span(), c.reset);
        if self.verbosity >= Verbosity::Verbose {
            let excerpt = self.text.get(label.span().range()).unwrap_or("?");
            out.push_str(&format!(
                " {}{}{}",
                c.green,
                truncate_text(excerpt, TEXT_BUDGET),
                c.reset
            ));
        }
        out
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_attempt(&mut self, start: usize) {
        let c = self.colors;
        if !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.lines.push(format!("{}attempt{} {start}", c.blue, c.reset));
        self.checkpoint_steps.clear();
    }

    fn trace_step(&mut self, id: StepId, step: &Step) {
        let c = self.colors;
        let content = format_step(self.program, step, &c);
        self.lines.push(format!("  {}{id}{}  {content}", c.dim, c.reset));
    }

    fn trace_label_success(&mut self, test: &LabelTest, label: &Label) {
        let content = self.describe_label(label, &test.type_name);
        self.add_subline(symbols::LABEL_SUCCESS, &content);
    }

    fn trace_label_failure(&mut self, test: &LabelTest, pos: usize) {
        let c = self.colors;
        let content = format!("{} {}from {pos}{}", test.type_name, c.dim, c.reset);
        self.add_subline(symbols::LABEL_FAILURE, &content);
    }

    fn trace_check_failure(&mut self, step: &Step) {
        let c = self.colors;
        let content = format!("{}{}{}", c.red, step.mnemonic(), c.reset);
        self.add_subline(symbols::CHECK_FAILURE, &content);
    }

    fn trace_effect(&mut self, effect: &RuntimeEffect<'_>) {
        if self.verbosity < Verbosity::Verbose {
            return;
        }
        let c = self.colors;
        let name = self.program.capture_name(effect.capture());
        let content = format!("@{}{name}{} = {}", c.blue, c.reset, effect.span());
        self.add_subline(symbols::EFFECT, &content);
    }

    fn trace_checkpoint_created(&mut self, id: StepId) {
        self.checkpoint_steps.push(id);
        if self.verbosity == Verbosity::VeryVerbose {
            let depth = self.checkpoint_steps.len();
            self.add_subline(symbols::CHECKPOINT, &format!("checkpoint #{depth}"));
        }
    }

    fn trace_cut(&mut self, depth: usize) {
        let dropped = self.checkpoint_steps.len().saturating_sub(depth);
        self.checkpoint_steps.truncate(depth);
        if self.verbosity == Verbosity::VeryVerbose {
            self.add_subline(symbols::CUT, &format!("dropped {dropped} checkpoints"));
        }
    }

    fn trace_backtrack(&mut self) {
        let c = self.colors;
        let created_at = self
            .checkpoint_steps
            .pop()
            .map_or_else(|| "??".to_owned(), |id| id.to_string());
        self.lines.push(format!(
            "  {}{created_at}{} {}{}{}",
            c.dim,
            c.reset,
            c.red,
            symbols::BACKTRACK,
            c.reset
        ));
    }

    fn trace_accept(&mut self, span: Span) {
        let c = self.colors;
        self.lines.push(format!("{}match{} {span}", c.green, c.reset));
    }

    fn trace_no_match(&mut self) {
        let c = self.colors;
        self.lines.push(format!("{}no match{}", c.red, c.reset));
    }

    fn trace_candidate(&mut self, pos: usize) {
        let c = self.colors;
        self.lines.push(format!("{}next candidate{} {pos}", c.dim, c.reset));
    }

    fn trace_exhausted(&mut self) {
        let c = self.colors;
        self.lines.push(format!("{}exhausted{}", c.dim, c.reset));
    }
}

/// Truncate text to `max_len` characters with an ellipsis.
fn truncate_text(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_owned()
    } else {
        let truncated: String = s.chars().take(max_len - 1).collect();
        format!("{truncated}…")
    }
}
