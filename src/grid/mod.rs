//! The table-widget contract the register populates, with an in-memory
//! implementation and a plain-text renderer.

pub mod memory;
pub mod render;

pub use memory::{GridRow, MemoryGrid};
pub use render::render_grid;

use crate::register::{CursorKind, EntryFields};

/// Grid widget driven by the register.
///
/// A load calls `resize` once, then `place_cursor` for every row group in
/// order (followed by `commit_cursor` for data rows), and finally
/// `move_focus` to the recovered cursor row.
pub trait RegisterGrid {
    fn resize(&mut self, phys_rows: usize, cols: usize, virt_rows: usize);
    fn place_cursor(&mut self, cursor: CursorKind, phys_row: usize, virt_row: usize);
    /// Flushes populated fields into the row group last placed.
    fn commit_cursor(&mut self, fields: &EntryFields);
    fn move_focus(&mut self, phys_row: usize, col: usize);
}
