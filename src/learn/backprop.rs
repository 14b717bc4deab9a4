//! Value backpropagation.
//!
//! Drains the traversal history, moving each recorded ancestor's value a
//! fraction `alpha` of the way toward its child's value:
//!
//! `ancestor.value += alpha * (child.value - ancestor.value)`
//!
//! `alpha` is expected in `(0, 1]`. Anything else is applied as given and
//! makes the estimates overshoot or drift.

use log::debug;

use super::history::TraversalHistory;
use crate::tree::GameTree;

/// Apply every pending update, newest first. Returns the number applied.
///
/// An empty history is a no-op.
pub fn update_values(tree: &mut GameTree, history: &mut TraversalHistory, alpha: f32) -> usize {
    let mut applied = 0;

    while let Some((child, ancestor)) = history.pop() {
        let target = tree.get(child).value;
        let node = tree.get_mut(ancestor);
        node.value += alpha * (target - node.value);
        applied += 1;
    }

    if applied > 0 {
        debug!("applied {} value updates (alpha {})", applied, alpha);
    }
    applied
}
