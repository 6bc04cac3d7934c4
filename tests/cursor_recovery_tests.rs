mod common;

use common::{date, load, register, row_of, Books, ALL_MODES};
use split_register::{
    grid::MemoryGrid,
    register::{DisplayMode, FieldEdit},
};

#[test]
fn cursor_follows_split_across_reordering() {
    for mode in ALL_MODES {
        let mut books = Books::new();
        let (_, anchor) = books.add_three_way();
        let mut reg = register(mode);
        let mut grid = MemoryGrid::new();
        load(&mut reg, &mut books, &mut grid);
        reg.move_to(&books.ledger, row_of(&reg, books.t2_checking))
            .unwrap();

        let orders = [
            vec![anchor, books.t2_checking, books.t1_split],
            vec![books.t2_checking, books.t1_split, anchor],
            vec![books.t1_split, anchor, books.t2_checking],
        ];
        for entries in orders {
            let checking = books.checking;
            let counts = reg
                .load_register(&mut books.ledger, &mut grid, &entries, checking)
                .unwrap();
            assert_eq!(
                counts.cursor_virt_row,
                row_of(&reg, books.t2_checking),
                "{mode:?}"
            );
            assert_eq!(reg.current_split(), Some(books.t2_checking));
        }
    }
}

#[test]
fn cursor_follows_split_after_unrelated_insert() {
    let mut books = Books::new();
    let mut reg = register(DisplayMode::SingleLine);
    let mut grid = MemoryGrid::new();
    load(&mut reg, &mut books, &mut grid);
    reg.move_to(&books.ledger, row_of(&reg, books.t2_checking))
        .unwrap();
    assert_eq!(reg.cursor().map(|pos| pos.virt_row), Some(2));

    let earlier = books.ledger.create_transaction(date(1, 15));
    let split = books.ledger.split_at(earlier, 0).unwrap();
    books.ledger.insert_split(books.checking, split).unwrap();
    load(&mut reg, &mut books, &mut grid);

    assert_eq!(reg.cursor().map(|pos| pos.virt_row), Some(3));
    assert_eq!(grid.focus(), Some((3, 0)));
    assert_eq!(reg.current_split(), Some(books.t2_checking));
}

#[test]
fn pending_edits_survive_a_relayout() {
    let mut books = Books::new();
    let mut reg = register(DisplayMode::SingleLine);
    let mut grid = MemoryGrid::new();
    load(&mut reg, &mut books, &mut grid);
    reg.move_to(&books.ledger, row_of(&reg, books.t2_checking))
        .unwrap();

    reg.edit(FieldEdit::Memo("weekly shop".into()));
    load(&mut reg, &mut books, &mut grid);

    assert_eq!(reg.buffer().memo, "weekly shop");
    assert!(!reg.dirty().is_empty());
    assert_eq!(books.ledger.split(books.t2_checking).unwrap().memo, "");
}

#[test]
fn removed_split_leaves_cursor_inside_the_grid() {
    for mode in ALL_MODES {
        let mut books = Books::new();
        let mut reg = register(mode);
        let mut grid = MemoryGrid::new();
        load(&mut reg, &mut books, &mut grid);
        reg.move_to(&books.ledger, row_of(&reg, books.t2_checking))
            .unwrap();
        load(&mut reg, &mut books, &mut grid);

        books.ledger.destroy(books.t2).unwrap();
        let counts = {
            let entries = books.entries();
            let checking = books.checking;
            reg.load_register(&mut books.ledger, &mut grid, &entries, checking)
                .unwrap()
        };

        assert!(counts.cursor_virt_row >= 1, "{mode:?}");
        assert!(counts.cursor_virt_row < counts.virt_rows, "{mode:?}");
        assert!(counts.cursor_phys_row < counts.phys_rows, "{mode:?}");
        assert_ne!(reg.current_split(), Some(books.t2_checking));
    }
}
