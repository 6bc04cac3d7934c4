//! Row layout: how many grid rows a list of register entries occupies under
//! a display mode, and where the edit cursor lands afterwards.

use tracing::debug;

use super::cursor::{CursorPositionTracker, RowPosition};
use super::mode::{CursorHeights, CursorKind, DisplayMode};
use crate::ledger::{Ledger, SplitId, TransactionId};

/// One cursor placement on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowGroup {
    pub cursor: CursorKind,
    pub phys_row: usize,
    pub virt_row: usize,
    pub height: usize,
    /// Split shown on the row; `None` for the header and for the empty
    /// "add a split" rows.
    pub split: Option<SplitId>,
    /// Transaction the row belongs to, when known.
    pub transaction: Option<TransactionId>,
}

impl RowGroup {
    pub fn position(&self) -> RowPosition {
        RowPosition {
            phys_row: self.phys_row,
            virt_row: self.virt_row,
        }
    }

    pub fn covers(&self, phys_row: usize) -> bool {
        phys_row >= self.phys_row && phys_row < self.phys_row + self.height
    }
}

/// Grid extents and the cursor position recovered for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCounts {
    pub phys_rows: usize,
    pub virt_rows: usize,
    pub cursor_phys_row: usize,
    pub cursor_virt_row: usize,
}

/// Every row group of a register, header first, indexed by virtual row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    pub groups: Vec<RowGroup>,
    pub counts: RowCounts,
}

impl RowLayout {
    pub fn group(&self, virt_row: usize) -> Option<&RowGroup> {
        self.groups.get(virt_row)
    }

    /// Row group covering a physical line.
    pub fn group_at_phys(&self, phys_row: usize) -> Option<&RowGroup> {
        self.groups.iter().find(|group| group.covers(phys_row))
    }

    /// Row group showing `split`, if any.
    pub fn group_of(&self, split: SplitId) -> Option<&RowGroup> {
        self.groups.iter().find(|group| group.split == Some(split))
    }

    pub fn cursor_group(&self) -> Option<&RowGroup> {
        self.group(self.counts.cursor_virt_row)
    }
}

/// Computes row layouts; never mutates the ledger.
#[derive(Debug, Clone, Copy)]
pub struct RowLayoutEngine<'a> {
    mode: DisplayMode,
    heights: &'a CursorHeights,
}

impl<'a> RowLayoutEngine<'a> {
    pub fn new(mode: DisplayMode, heights: &'a CursorHeights) -> Self {
        Self { mode, heights }
    }

    /// Extents and cursor coordinates only; safe to call speculatively.
    pub fn count_rows(
        &self,
        ledger: &Ledger,
        entries: &[SplitId],
        blank: Option<SplitId>,
        tracker: &CursorPositionTracker,
    ) -> RowCounts {
        self.plan(ledger, entries, blank, tracker).counts
    }

    /// Lays out every row group for `entries` followed by the blank entry.
    pub fn plan(
        &self,
        ledger: &Ledger,
        entries: &[SplitId],
        blank: Option<SplitId>,
        tracker: &CursorPositionTracker,
    ) -> RowLayout {
        let mut builder = Builder::new(self.heights, tracker);
        let lead = self.mode.lead_cursor();

        for &split in entries {
            if Some(split) == blank {
                continue;
            }
            let Some(txn) = ledger.split(split).map(|s| s.parent()) else {
                debug!(%split, "skipping entry for unknown split");
                continue;
            };

            if self.mode.expands(tracker.is_hot(ledger, split)) {
                builder.push(CursorKind::Transaction, Some(split), Some(txn));
                // One row per split except the anchor, then one empty row.
                let mut index = 0;
                loop {
                    let secondary = ledger.split_at(txn, index);
                    if secondary != Some(split) {
                        builder.push(CursorKind::Split, secondary, Some(txn));
                    }
                    if secondary.is_none() {
                        break;
                    }
                    index += 1;
                }
            } else {
                builder.push(lead, Some(split), Some(txn));
            }
        }

        let blank_txn = blank.and_then(|id| ledger.split(id)).map(|s| s.parent());
        if self.mode == DisplayMode::MultiLine {
            builder.push(CursorKind::Transaction, blank, blank_txn);
            let second = blank_txn.and_then(|txn| ledger.split_at(txn, 1));
            builder.push(CursorKind::Split, second, blank_txn);
        } else {
            builder.push(lead, blank, blank_txn);
        }

        builder.finish()
    }
}

struct Builder<'a> {
    heights: &'a CursorHeights,
    tracker: &'a CursorPositionTracker,
    groups: Vec<RowGroup>,
    next_phys: usize,
    latched: Option<RowPosition>,
}

impl<'a> Builder<'a> {
    fn new(heights: &'a CursorHeights, tracker: &'a CursorPositionTracker) -> Self {
        let header = RowGroup {
            cursor: CursorKind::Header,
            phys_row: 0,
            virt_row: 0,
            height: heights.header,
            split: None,
            transaction: None,
        };
        Self {
            heights,
            tracker,
            groups: vec![header],
            next_phys: heights.header,
            latched: None,
        }
    }

    fn push(
        &mut self,
        cursor: CursorKind,
        split: Option<SplitId>,
        transaction: Option<TransactionId>,
    ) {
        let group = RowGroup {
            cursor,
            phys_row: self.next_phys,
            virt_row: self.groups.len(),
            height: self.heights.rows(cursor),
            split,
            transaction,
        };
        if self.latched.is_none() && self.is_sought(&group) {
            self.latched = Some(group.position());
        }
        self.next_phys += group.height;
        self.groups.push(group);
    }

    fn is_sought(&self, group: &RowGroup) -> bool {
        match (self.tracker.current_split(), group.split) {
            (Some(current), Some(split)) => current == split,
            // Parked on the empty row of the hinted transaction.
            (None, None) => {
                group.cursor == CursorKind::Split
                    && group.transaction.is_some()
                    && group.transaction == self.tracker.expand_hint()
            }
            _ => false,
        }
    }

    fn finish(self) -> RowLayout {
        let phys_rows = self.next_phys;
        let virt_rows = self.groups.len();
        let header_rows = self.heights.header;

        let mut cursor = self.latched.or(self.tracker.position());
        if let Some(position) = cursor {
            if position.phys_row >= phys_rows || position.virt_row >= virt_rows {
                cursor = self.groups.last().map(RowGroup::position);
            }
        }
        let cursor = match cursor {
            Some(position) if position.phys_row >= header_rows && position.virt_row >= 1 => {
                position
            }
            _ => RowPosition {
                phys_row: header_rows,
                virt_row: 1,
            },
        };

        RowLayout {
            groups: self.groups,
            counts: RowCounts {
                phys_rows,
                virt_rows,
                cursor_phys_row: cursor.phys_row,
                cursor_virt_row: cursor.virt_row,
            },
        }
    }
}
