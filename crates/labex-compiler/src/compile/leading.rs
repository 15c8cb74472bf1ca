//! Leading-set computation for fallback re-alignment.

use labex_core::{Step, StepId};

/// `Label` steps that can consume the first label of a match, in discovery
/// order.
///
/// Walks every step reachable from `entry` without consuming a label.
/// Lookahead bodies are skipped since they never consume. Returns `None`
/// when `Accept` is reachable that way: the pattern can then match without
/// consuming anything and every position is a candidate.
pub fn leading_steps(steps: &[Step], entry: StepId) -> Option<Vec<StepId>> {
    let mut visited = vec![false; steps.len()];
    let mut stack = vec![entry];
    let mut leading = Vec::new();

    while let Some(id) = stack.pop() {
        let Some(seen) = visited.get_mut(id.index()) else {
            continue;
        };
        if *seen {
            continue;
        }
        *seen = true;

        match &steps[id.index()] {
            Step::Accept => return None,
            Step::Label { .. } => leading.push(id),
            Step::Split { primary, alternate } => {
                stack.push(*alternate);
                stack.push(*primary);
            }
            Step::LookStart { after, .. } | Step::LookEnd { after, .. } => stack.push(*after),
            Step::Save { next, .. }
            | Step::CaptureSpan { next, .. }
            | Step::CheckProgress { next, .. }
            | Step::CheckContiguous { next, .. }
            | Step::CheckNoText { next, .. }
            | Step::Contains { next, .. }
            | Step::AtomicStart { next, .. }
            | Step::AtomicEnd { next, .. } => stack.push(*next),
        }
    }

    Some(leading)
}
