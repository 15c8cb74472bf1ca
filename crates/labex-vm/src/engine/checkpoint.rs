//! Checkpoints for backtracking.
//!
//! When the VM reaches a choice (a `Split`, several labels sharing a
//! begin, a lookahead) it saves a checkpoint for the alternative. On
//! failure it restores the most recent checkpoint and continues.

use labex_core::StepId;

use super::error::RuntimeError;

/// What to do once a checkpoint is restored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resume {
    /// Continue at a step.
    Step(StepId),
    /// Re-run a label step, skipping the co-starting labels already tried.
    Label { step: StepId, skip: usize },
    /// Lookahead barrier. Reaching it by backtracking means the body
    /// failed: a negative lookahead then continues at `after`, a positive
    /// one keeps backtracking.
    Lookahead { negative: bool, after: StepId },
}

/// Checkpoint for backtracking.
#[derive(Clone, Copy, Debug)]
pub struct Checkpoint {
    /// Match position.
    pub pos: usize,
    /// Consumed-label count.
    pub trail_len: usize,
    /// Effect log length.
    pub effect_watermark: usize,
    /// Register undo log length.
    pub undo_watermark: usize,
    pub resume: Resume,
}

/// Stack of checkpoints with a hard size limit.
#[derive(Debug)]
pub struct CheckpointStack {
    stack: Vec<Checkpoint>,
    limit: u32,
}

impl CheckpointStack {
    pub fn new(limit: u32) -> Self {
        Self {
            stack: Vec::new(),
            limit,
        }
    }

    /// Push a checkpoint, failing once the limit is reached.
    pub fn push(&mut self, checkpoint: Checkpoint) -> Result<(), RuntimeError> {
        if self.stack.len() >= self.limit as usize {
            return Err(RuntimeError::CheckpointLimitExceeded(self.limit));
        }
        self.stack.push(checkpoint);
        Ok(())
    }

    /// Pop and return the most recent checkpoint.
    pub fn pop(&mut self) -> Option<Checkpoint> {
        self.stack.pop()
    }

    /// Drop every checkpoint at or above `depth`, returning the one that
    /// sat exactly at `depth`.
    pub fn cut(&mut self, depth: usize) -> Option<Checkpoint> {
        let at = self.stack.get(depth).copied();
        self.stack.truncate(depth);
        at
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }
}
