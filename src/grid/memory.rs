use tracing::warn;

use super::RegisterGrid;
use crate::register::{CursorKind, EntryFields};

/// A row group as stored by [`MemoryGrid`].
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub cursor: CursorKind,
    pub phys_row: usize,
    pub fields: Option<EntryFields>,
}

/// Backing store for a register without any drawing.
#[derive(Debug, Clone, Default)]
pub struct MemoryGrid {
    phys_rows: usize,
    cols: usize,
    rows: Vec<Option<GridRow>>,
    placed: Option<usize>,
    focus: Option<(usize, usize)>,
}

impl MemoryGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phys_rows(&self) -> usize {
        self.phys_rows
    }

    pub fn virt_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, virt_row: usize) -> Option<&GridRow> {
        self.rows.get(virt_row).and_then(Option::as_ref)
    }

    /// Placed row groups in virtual row order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &GridRow)> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(index, row)| row.as_ref().map(|row| (index, row)))
    }

    /// Number of row groups that received a cursor.
    pub fn placed_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_some()).count()
    }

    pub fn focus(&self) -> Option<(usize, usize)> {
        self.focus
    }
}

impl RegisterGrid for MemoryGrid {
    fn resize(&mut self, phys_rows: usize, cols: usize, virt_rows: usize) {
        self.phys_rows = phys_rows;
        self.cols = cols;
        self.rows = vec![None; virt_rows];
        self.placed = None;
        self.focus = None;
    }

    fn place_cursor(&mut self, cursor: CursorKind, phys_row: usize, virt_row: usize) {
        let Some(slot) = self.rows.get_mut(virt_row) else {
            warn!(virt_row, "cursor placed outside the grid");
            self.placed = None;
            return;
        };
        *slot = Some(GridRow {
            cursor,
            phys_row,
            fields: None,
        });
        self.placed = Some(virt_row);
    }

    fn commit_cursor(&mut self, fields: &EntryFields) {
        let row = self
            .placed
            .and_then(|index| self.rows.get_mut(index))
            .and_then(Option::as_mut);
        match row {
            Some(row) => row.fields = Some(fields.clone()),
            None => warn!("commit without a placed cursor"),
        }
    }

    fn move_focus(&mut self, phys_row: usize, col: usize) {
        self.focus = Some((phys_row, col));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_fills_last_placed_row() {
        let mut grid = MemoryGrid::new();
        grid.resize(3, 8, 3);
        grid.place_cursor(CursorKind::Header, 0, 0);
        grid.place_cursor(CursorKind::Single, 1, 1);
        let fields = EntryFields {
            memo: "lunch".into(),
            ..EntryFields::default()
        };
        grid.commit_cursor(&fields);

        assert_eq!(grid.placed_count(), 2);
        assert!(grid.row(0).unwrap().fields.is_none());
        assert_eq!(grid.row(1).unwrap().fields.as_ref().unwrap().memo, "lunch");
        assert!(grid.row(2).is_none());
    }

    #[test]
    fn resize_discards_previous_rows() {
        let mut grid = MemoryGrid::new();
        grid.resize(2, 8, 2);
        grid.place_cursor(CursorKind::Single, 1, 1);
        grid.move_focus(1, 0);
        grid.resize(5, 8, 4);
        assert_eq!(grid.placed_count(), 0);
        assert_eq!(grid.virt_rows(), 4);
        assert_eq!(grid.phys_rows(), 5);
        assert_eq!(grid.focus(), None);
    }
}
