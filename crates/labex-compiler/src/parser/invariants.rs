//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;
use super::cst::SyntaxKind;

impl Parser<'_> {
    /// Panics when the grammar keeps looking ahead without consuming.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        let left = self.stall_guard.get();
        assert!(left != 0, "parser is stuck: too many lookaheads");
        self.stall_guard.set(left - 1);
    }

    #[inline]
    pub(super) fn assert_current(&mut self, expected_kind: SyntaxKind) {
        let current_kind = self.current();
        assert_eq!(
            current_kind, expected_kind,
            "production entered at {current_kind:?}, caller must check for {expected_kind:?}"
        );
    }
}
