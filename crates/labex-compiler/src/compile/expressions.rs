//! Leaf and wrapper expression lowering.

use labex_core::{CaptureId, Step, StepId};

use crate::parser::ast::{Capture, Contains, Lookahead, NamedGroup, Pin, TypeMatch};

use super::Compiler;

impl Compiler<'_> {
    /// `Type<...>`: one `Label` step.
    pub(super) fn compile_type_match(
        &mut self,
        node: &TypeMatch,
        capture: Option<CaptureId>,
        exit: StepId,
    ) -> StepId {
        let test = self.label_test(node);
        self.emit(Step::Label {
            test,
            capture,
            next: exit,
        })
    }

    /// `name:Type<...>`: the label step binds the consumed label.
    pub(super) fn compile_capture(&mut self, node: &Capture, exit: StepId) -> StepId {
        let Some(type_match) = node.type_match() else {
            return exit;
        };
        let capture = node.name().map(|name| self.capture_id(name.text()));
        self.compile_type_match(&type_match, capture, exit)
    }

    /// `(?<name> body)`: `Save`, body, `CaptureSpan`.
    pub(super) fn compile_named_group(&mut self, group: &NamedGroup, exit: StepId) -> StepId {
        let Some(name) = group.name() else {
            return exit;
        };
        let capture = self.capture_id(name.text());
        let slot = self.new_slot();

        let bind = self.emit(Step::CaptureSpan {
            capture,
            slot,
            next: exit,
        });
        let body = match group.body() {
            Some(body) => self.compile_expr(&body, bind),
            None => bind,
        };
        self.emit(Step::Save { slot, next: body })
    }

    /// `[body]`: `Save`, body, `CheckContiguous`.
    pub(super) fn compile_pin(&mut self, pin: &Pin, exit: StepId) -> StepId {
        let slot = self.new_slot();
        let check = self.emit(Step::CheckContiguous { slot, next: exit });
        let body = match pin.body() {
            Some(body) => self.compile_expr(&body, check),
            None => check,
        };
        self.emit(Step::Save { slot, next: body })
    }

    /// `item[^T]`: `Save`, item, `Contains`.
    pub(super) fn compile_contains(&mut self, contains: &Contains, exit: StepId) -> StepId {
        let Some(target) = contains.target() else {
            return exit;
        };
        let test = self.label_test(&target);
        let slot = self.new_slot();

        let check = self.emit(Step::Contains {
            slot,
            test,
            next: exit,
        });
        let inner = match contains.inner() {
            Some(inner) => self.compile_expr(&inner, check),
            None => check,
        };
        self.emit(Step::Save { slot, next: inner })
    }

    /// `(?= body)` / `(?! body)`: the body runs between `LookStart` and
    /// `LookEnd`; matching resumes at `exit` from the saved position.
    pub(super) fn compile_lookahead(&mut self, look: &Lookahead, exit: StepId) -> StepId {
        let negative = look.is_negative();
        let slot = self.new_slot();

        let end = self.emit(Step::LookEnd {
            slot,
            negative,
            after: exit,
        });
        let body = match look.body() {
            Some(body) => self.compile_expr(&body, end),
            None => end,
        };
        self.emit(Step::LookStart {
            slot,
            negative,
            body,
            after: exit,
        })
    }
}
