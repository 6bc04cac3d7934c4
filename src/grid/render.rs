use super::memory::{GridRow, MemoryGrid};
use crate::register::{CursorKind, DebitCredit, EntryFields};

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// A register column: title, width bounds, and alignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub min_width: usize,
    pub max_width: usize,
    pub alignment: Alignment,
}

const fn column(header: &'static str, min_width: usize, max_width: usize, alignment: Alignment) -> Column {
    Column {
        header,
        min_width,
        max_width,
        alignment,
    }
}

const COLUMNS: [Column; 9] = [
    column("", 1, 1, Alignment::Left),
    column("Date", 10, 10, Alignment::Left),
    column("Num", 3, 8, Alignment::Left),
    column("Description", 11, 32, Alignment::Left),
    column("Transfer", 8, 24, Alignment::Left),
    column("R", 1, 1, Alignment::Left),
    column("Debit", 5, 12, Alignment::Right),
    column("Credit", 6, 12, Alignment::Right),
    column("Balance", 7, 12, Alignment::Right),
];

/// Renders the populated grid as plain text, one line per physical row.
/// The focused row group is marked with `>`.
pub fn render_grid(grid: &MemoryGrid) -> String {
    let focus = grid.focus().map(|(phys_row, _)| phys_row);
    let mut lines: Vec<Vec<String>> = Vec::new();
    for (_, row) in grid.rows() {
        let focused = focus == Some(row.phys_row);
        lines.extend(row_lines(row, focused));
    }

    let widths = compute_widths(&lines);
    let header: Vec<String> = COLUMNS.iter().map(|c| c.header.to_string()).collect();
    let mut out = render_line(&header, &widths);
    out.push('\n');
    out.push_str(&horizontal_rule(&widths));
    for line in &lines {
        out.push('\n');
        out.push_str(&render_line(line, &widths));
    }
    out
}

fn row_lines(row: &GridRow, focused: bool) -> Vec<Vec<String>> {
    let marker = String::from(if focused { ">" } else { "" });
    let Some(fields) = row.fields.as_ref() else {
        return Vec::new();
    };
    match row.cursor {
        CursorKind::Header => Vec::new(),
        CursorKind::Single => vec![transaction_line(marker, fields, &fields.mirror_transfer)],
        CursorKind::Double => vec![
            transaction_line(marker, fields, &fields.mirror_transfer),
            note_line(fields),
        ],
        CursorKind::Transaction => vec![transaction_line(marker, fields, "")],
        CursorKind::Split => vec![split_line(marker, fields)],
    }
}

fn transaction_line(marker: String, fields: &EntryFields, transfer: &str) -> Vec<String> {
    let (debit, credit) = amount_cells(&fields.direct);
    vec![
        marker,
        fields.date.map(|d| d.to_string()).unwrap_or_default(),
        fields.num.clone(),
        fields.description.clone(),
        transfer.to_string(),
        reconcile_cell(fields),
        debit,
        credit,
        if fields.date.is_some() {
            format!("{:.2}", fields.balance)
        } else {
            String::new()
        },
    ]
}

fn note_line(fields: &EntryFields) -> Vec<String> {
    let mut line = vec![String::new(); COLUMNS.len()];
    line[2] = fields.action.clone();
    line[3] = fields.memo.clone();
    line
}

fn split_line(marker: String, fields: &EntryFields) -> Vec<String> {
    let (debit, credit) = amount_cells(&fields.mirrored);
    vec![
        marker,
        String::new(),
        fields.action.clone(),
        fields.memo.clone(),
        fields.transfer.clone(),
        reconcile_cell(fields),
        debit,
        credit,
        String::new(),
    ]
}

fn reconcile_cell(fields: &EntryFields) -> String {
    fields
        .reconcile
        .map(|flag| flag.as_char().to_string())
        .unwrap_or_default()
}

fn amount_cells(pair: &DebitCredit) -> (String, String) {
    let cell = |amount: f64| {
        if amount == 0.0 {
            String::new()
        } else {
            format!("{amount:.2}")
        }
    };
    (cell(pair.debit), cell(pair.credit))
}

fn compute_widths(lines: &[Vec<String>]) -> Vec<usize> {
    COLUMNS
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let mut width = column.header.chars().count().max(column.min_width);
            for line in lines {
                if let Some(cell) = line.get(idx) {
                    width = width.max(cell.chars().count());
                }
            }
            width.min(column.max_width)
        })
        .collect()
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let rendered: Vec<String> = COLUMNS
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let text = cells.get(idx).map(String::as_str).unwrap_or("");
            render_cell(text, widths[idx], column.alignment)
        })
        .collect();
    rendered.join(" ").trim_end().to_string()
}

fn truncate_text(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut fitted: String = text.chars().take(width - 1).collect();
    fitted.push('…');
    fitted
}

fn render_cell(text: &str, width: usize, alignment: Alignment) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(fitted.chars().count());
    match alignment {
        Alignment::Left => format!("{fitted}{}", " ".repeat(remaining)),
        Alignment::Right => format!("{}{fitted}", " ".repeat(remaining)),
    }
}

fn horizontal_rule(widths: &[usize]) -> String {
    let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
    "-".repeat(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::RegisterGrid;
    use chrono::NaiveDate;

    #[test]
    fn truncates_long_cells() {
        assert_eq!(truncate_text("Groceries and more", 6), "Groce…");
        assert_eq!(truncate_text("Rent", 6), "Rent");
        assert_eq!(render_cell("7", 3, Alignment::Right), "  7");
    }

    #[test]
    fn renders_focused_single_row() {
        let mut grid = MemoryGrid::new();
        grid.resize(2, COLUMNS.len(), 2);
        grid.place_cursor(CursorKind::Header, 0, 0);
        grid.place_cursor(CursorKind::Single, 1, 1);
        grid.commit_cursor(&EntryFields {
            date: NaiveDate::from_ymd_opt(2024, 5, 2),
            description: "Coffee".into(),
            direct: DebitCredit::from_amount(-3.5),
            balance: -3.5,
            ..EntryFields::default()
        });
        grid.move_focus(1, 0);

        let text = render_grid(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Description"));
        assert!(lines[2].starts_with('>'));
        assert!(lines[2].contains("2024-05-02"));
        assert!(lines[2].contains("Coffee"));
        assert!(lines[2].contains("3.50"));
        assert!(lines[2].ends_with("-3.50"));
    }
}
