mod common;

use common::{load, register, row_of, Books, ALL_MODES};
use split_register::{
    grid::MemoryGrid,
    register::{CursorKind, DisplayMode},
};

#[test]
fn counted_rows_match_populated_grid_in_every_mode() {
    let expected = [
        (DisplayMode::SingleLine, 4, 4),
        (DisplayMode::DoubleLine, 7, 4),
        (DisplayMode::MultiLine, 8, 8),
        (DisplayMode::SingleDynamic, 4, 4),
        (DisplayMode::DoubleDynamic, 7, 4),
    ];
    for (mode, phys_rows, virt_rows) in expected {
        let mut books = Books::new();
        let mut reg = register(mode);
        let mut grid = MemoryGrid::new();

        let counted = reg.count_rows(&books.ledger, &books.entries());
        let entries = books.entries();
        let loaded = reg
            .load_register(&mut books.ledger, &mut grid, &entries, books.checking)
            .unwrap();

        assert_eq!(counted, loaded, "{mode:?}");
        assert_eq!((loaded.phys_rows, loaded.virt_rows), (phys_rows, virt_rows), "{mode:?}");
        assert_eq!(grid.phys_rows(), loaded.phys_rows);
        assert_eq!(grid.virt_rows(), loaded.virt_rows);
        assert_eq!(grid.placed_count(), loaded.virt_rows);
        assert_eq!(grid.focus(), Some((loaded.cursor_phys_row, 0)));
    }
}

#[test]
fn row_groups_tile_the_grid_after_every_load() {
    for mode in ALL_MODES {
        let mut books = Books::new();
        books.add_three_way();
        let mut reg = register(mode);
        let mut grid = MemoryGrid::new();
        load(&mut reg, &mut books, &mut grid);
        reg.move_to(&books.ledger, row_of(&reg, books.t2_checking))
            .unwrap();
        load(&mut reg, &mut books, &mut grid);

        let layout = reg.layout().unwrap();
        let heights: usize = layout.groups.iter().map(|group| group.height).sum();
        assert_eq!(heights, layout.counts.phys_rows, "{mode:?}");
        assert_eq!(layout.groups[0].cursor, CursorKind::Header);
        let cursor = reg.cursor().unwrap();
        assert!(cursor.virt_row >= 1 && cursor.virt_row < layout.counts.virt_rows);
        assert!(cursor.phys_row < layout.counts.phys_rows);
    }
}

#[test]
fn single_dynamic_expands_only_the_edited_transaction() {
    let mut books = Books::new();
    let mut reg = register(DisplayMode::SingleDynamic);
    let mut grid = MemoryGrid::new();
    load(&mut reg, &mut books, &mut grid);

    reg.move_to(&books.ledger, row_of(&reg, books.t2_checking))
        .unwrap();
    load(&mut reg, &mut books, &mut grid);

    let layout = reg.layout().unwrap();
    // header + T1 + (T2 line + food split + empty row) + blank
    assert_eq!(layout.counts.virt_rows, 6);
    let kinds: Vec<CursorKind> = layout.groups.iter().map(|group| group.cursor).collect();
    assert_eq!(
        kinds,
        vec![
            CursorKind::Header,
            CursorKind::Single,
            CursorKind::Transaction,
            CursorKind::Split,
            CursorKind::Split,
            CursorKind::Single,
        ]
    );
    assert_eq!(layout.groups[3].split, Some(books.t2_food));
    assert_eq!(layout.groups[4].split, None);
    assert_eq!(
        (layout.counts.cursor_phys_row, layout.counts.cursor_virt_row),
        (2, 2)
    );
}

#[test]
fn multi_line_rows_show_every_split() {
    let mut books = Books::new();
    let (_, anchor) = books.add_three_way();
    let mut reg = register(DisplayMode::MultiLine);
    let mut grid = MemoryGrid::new();
    load(&mut reg, &mut books, &mut grid);

    let row = row_of(&reg, anchor);
    let layout = reg.layout().unwrap();
    assert_eq!(layout.groups[row].cursor, CursorKind::Transaction);
    // food, rent, then the empty row
    assert!(layout.groups[row + 1].split.is_some());
    assert!(layout.groups[row + 2].split.is_some());
    assert_eq!(layout.groups[row + 3].split, None);

    let fields = grid.row(row).unwrap().fields.as_ref().unwrap();
    assert_eq!(fields.mirror_transfer, "-- Split Transaction --");
}
