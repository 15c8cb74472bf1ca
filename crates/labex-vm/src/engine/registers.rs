//! Per-slot registers with an undo log.
//!
//! Constructs that need to remember where they started (groups, pins,
//! lookaheads, atomic regions, loop guards) write a register on entry.
//! Every write records the previous value so a checkpoint can roll the
//! whole register file back with a single watermark.

use labex_core::SlotId;

/// Snapshot taken by a `Save`-like step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Register {
    /// Match position at the time of the save.
    pub pos: usize,
    /// Number of consumed labels at the time of the save.
    pub trail_len: usize,
    /// Checkpoint stack depth at the time of the save.
    pub depth: usize,
}

#[derive(Debug, Default)]
pub struct Registers {
    slots: Vec<Register>,
    undo: Vec<(SlotId, Register)>,
}

impl Registers {
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![Register::default(); count],
            undo: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        self.slots.fill(Register::default());
        self.undo.clear();
    }

    #[inline]
    pub fn get(&self, slot: SlotId) -> Register {
        self.slots[slot.index()]
    }

    pub fn set(&mut self, slot: SlotId, value: Register) {
        let previous = std::mem::replace(&mut self.slots[slot.index()], value);
        self.undo.push((slot, previous));
    }

    /// Current undo log length.
    #[inline]
    pub fn watermark(&self) -> usize {
        self.undo.len()
    }

    /// Undo every write made after `watermark`, newest first.
    pub fn rollback(&mut self, watermark: usize) {
        while self.undo.len() > watermark {
            let Some((slot, previous)) = self.undo.pop() else {
                break;
            };
            self.slots[slot.index()] = previous;
        }
    }
}
