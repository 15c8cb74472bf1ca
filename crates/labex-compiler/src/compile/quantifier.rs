//! Quantifier lowering.
//!
//! `inner{m,n}` becomes `m` mandatory copies of `inner` followed by either
//! `n - m` nested optional copies or, when unbounded, one loop:
//!
//! ```text
//! loop: split save | exit        (lazy: split exit | save)
//! save: save s -> inner
//! inner ... -> progress s -> loop
//! ```
//!
//! The progress check fails an iteration that consumed nothing, so a
//! nullable body cannot spin. Possessive quantifiers wrap everything in an
//! atomic region that discards the loop's choice points on exit.

use labex_core::{Step, StepId};

use crate::parser::Binding;
use crate::parser::ast::{Expr, Quantifier};

use super::Compiler;

impl Compiler<'_> {
    pub(super) fn compile_quantifier(&mut self, quant: &Quantifier, exit: StepId) -> StepId {
        let Some(inner) = quant.inner() else {
            return exit;
        };
        let Some(repeat) = self.repeat(quant) else {
            return self.compile_expr(&inner, exit);
        };

        if repeat.binding != Binding::Possessive {
            let lazy = repeat.binding == Binding::Lazy;
            return self.compile_repeat(&inner, repeat.min, repeat.max, lazy, exit);
        }

        let slot = self.new_slot();
        let cut = self.emit(Step::AtomicEnd { slot, next: exit });
        let body = self.compile_repeat(&inner, repeat.min, repeat.max, false, cut);
        self.emit(Step::AtomicStart { slot, next: body })
    }

    fn compile_repeat(
        &mut self,
        inner: &Expr,
        min: u32,
        max: Option<u32>,
        lazy: bool,
        exit: StepId,
    ) -> StepId {
        let mut next = match max {
            None => self.compile_loop(inner, lazy, exit),
            Some(max) => {
                let mut next = exit;
                for _ in min..max {
                    if self.error.is_some() {
                        return exit;
                    }
                    let body = self.compile_expr(inner, next);
                    next = self.split(body, exit, lazy);
                }
                next
            }
        };

        for _ in 0..min {
            if self.error.is_some() {
                return exit;
            }
            next = self.compile_expr(inner, next);
        }
        next
    }

    fn compile_loop(&mut self, inner: &Expr, lazy: bool, exit: StepId) -> StepId {
        let head = self.reserve();
        let slot = self.new_slot();

        let progress = self.emit(Step::CheckProgress { slot, next: head });
        let body = self.compile_expr(inner, progress);
        let save = self.emit(Step::Save { slot, next: body });

        let split = self.split_step(save, exit, lazy);
        self.patch(head, split);
        head
    }

    /// Chooses between another iteration and leaving.
    fn split(&mut self, iterate: StepId, leave: StepId, lazy: bool) -> StepId {
        let step = self.split_step(iterate, leave, lazy);
        self.emit(step)
    }

    fn split_step(&self, iterate: StepId, leave: StepId, lazy: bool) -> Step {
        if lazy {
            Step::Split {
                primary: leave,
                alternate: iterate,
            }
        } else {
            Step::Split {
                primary: iterate,
                alternate: leave,
            }
        }
    }
}
