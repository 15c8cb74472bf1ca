//! Sequence and alternation lowering.
//!
//! - Sequences: items chained back to front
//! - `A -> B`: `Save`, then `B`, then `CheckNoText` on the gap before `B`
//! - Alternations: a right-leaning chain of `Split`s, first branch preferred

use labex_core::{Step, StepId};

use crate::parser::ast::{Alt, Expr, Seq};

use super::Compiler;

impl Compiler<'_> {
    pub(super) fn compile_seq(&mut self, seq: &Seq, exit: StepId) -> StepId {
        // Each item paired with whether a `->` precedes it
        let mut items: Vec<(Expr, bool)> = Vec::new();
        let mut gap = false;
        for item in seq.items() {
            if let Expr::TextGap(_) = item {
                gap = true;
                continue;
            }
            items.push((item, gap));
            gap = false;
        }

        let mut next = exit;
        for (item, gap_before) in items.iter().rev() {
            next = if *gap_before {
                self.compile_after_gap(item, next)
            } else {
                self.compile_expr(item, next)
            };
        }
        next
    }

    fn compile_after_gap(&mut self, item: &Expr, exit: StepId) -> StepId {
        let slot = self.new_slot();
        let check = self.emit(Step::CheckNoText { slot, next: exit });
        let body = self.compile_expr(item, check);
        self.emit(Step::Save { slot, next: body })
    }

    pub(super) fn compile_alt(&mut self, alt: &Alt, exit: StepId) -> StepId {
        let branches: Vec<Seq> = alt.branches().collect();
        let entries: Vec<StepId> = branches
            .iter()
            .map(|branch| self.compile_seq(branch, exit))
            .collect();

        let Some((&last, rest)) = entries.split_last() else {
            return exit;
        };
        rest.iter().rev().fold(last, |alternate, &primary| {
            self.emit(Step::Split { primary, alternate })
        })
    }
}
