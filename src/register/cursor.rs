use std::{cell::Cell, rc::Rc};

use crate::ledger::{Ledger, SplitId, TransactionId};

/// A row group's coordinates: physical line and logical entry index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPosition {
    pub phys_row: usize,
    pub virt_row: usize,
}

/// Remembers where the user is, keyed by the split under the cursor.
///
/// Row numbers move on every relayout; the split identity does not. When the
/// cursor sits on a row with no split, the last position and the expand hint
/// stand in for it.
#[derive(Debug, Clone, Default)]
pub struct CursorPositionTracker {
    current_split: Option<SplitId>,
    position: Option<RowPosition>,
    expand_hint: Option<TransactionId>,
}

impl CursorPositionTracker {
    pub fn current_split(&self) -> Option<SplitId> {
        self.current_split
    }

    pub fn position(&self) -> Option<RowPosition> {
        self.position
    }

    pub fn expand_hint(&self) -> Option<TransactionId> {
        self.expand_hint
    }

    pub fn set_current(&mut self, split: Option<SplitId>, position: RowPosition) {
        self.current_split = split;
        self.position = Some(position);
    }

    /// Parks the cursor on a split-less row of `transaction`, which dynamic
    /// layouts keep expanded while nothing else is under edit.
    pub fn hint_expand(&mut self, transaction: Option<TransactionId>, position: RowPosition) {
        self.current_split = None;
        self.position = Some(position);
        if transaction.is_some() {
            self.expand_hint = transaction;
        }
    }

    /// True when `split` belongs to the transaction under edit, or to the
    /// hinted transaction while nothing is under edit.
    pub fn is_hot(&self, ledger: &Ledger, split: SplitId) -> bool {
        match self.current_split {
            Some(current) => ledger.is_peer(split, current),
            None => {
                self.expand_hint.is_some()
                    && ledger.split(split).map(|s| s.parent()) == self.expand_hint
            }
        }
    }
}

/// Shared flag that silences the user-navigation hook while the register
/// populates the grid.
#[derive(Debug, Clone, Default)]
pub struct NavigationGate(Rc<Cell<bool>>);

impl NavigationGate {
    pub fn is_suppressed(&self) -> bool {
        self.0.get()
    }

    /// Suppresses navigation until the returned guard drops.
    pub fn suppress(&self) -> SuppressionGuard {
        let previous = self.0.replace(true);
        SuppressionGuard {
            gate: Rc::clone(&self.0),
            previous,
        }
    }
}

/// Restores the gate's prior state on every exit path.
#[must_use = "navigation is re-enabled as soon as the guard drops"]
pub struct SuppressionGuard {
    gate: Rc<Cell<bool>>,
    previous: bool,
}

impl Drop for SuppressionGuard {
    fn drop(&mut self) {
        self.gate.set(self.previous);
    }
}
