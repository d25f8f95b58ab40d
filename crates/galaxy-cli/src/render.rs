//! Shared terminal rendering: tables, navigation bars and hint boxes.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table as TextTable};
use galaxy_model::{MASTERY_THRESHOLD, Mode, ModeHint, Table, facts_of, stars};
use galaxy_persistence::ProgressMap;

/// Marker for a mastered table.
pub const MASTERED_MARK: &str = "★";

pub fn apply_table_style(table: &mut TextTable) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_all(table: &mut TextTable, alignment: CellAlignment) {
    for column in table.column_iter_mut() {
        column.set_cell_alignment(alignment);
    }
}

/// The full 10×10 table with the selected row marked.
pub fn multiplication_grid(selected: Table) -> TextTable {
    let mut grid = TextTable::new();
    apply_table_style(&mut grid);

    let mut header = vec![header_cell("×")];
    header.extend(Table::all().map(|n| header_cell(&n.to_string())));
    grid.set_header(header);

    for row in Table::all() {
        let is_selected = row == selected;
        let label = if is_selected {
            format!("▶ {row}")
        } else {
            row.to_string()
        };
        let mut cells = vec![header_cell(&label)];
        cells.extend(facts_of(row).map(|fact| {
            let cell = Cell::new(fact.product());
            if is_selected {
                cell.fg(Color::Yellow).add_attribute(Attribute::Bold)
            } else {
                cell
            }
        }));
        grid.add_row(cells);
    }
    align_all(&mut grid, CellAlignment::Right);
    grid
}

/// Best score, stars and mastery for every table.
pub fn progress_table(progress: &ProgressMap) -> TextTable {
    let mut table = TextTable::new();
    table.set_header(vec![
        header_cell("جدول"),
        header_cell("بهترین امتیاز"),
        header_cell("ستاره"),
        header_cell("استاد"),
    ]);
    apply_table_style(&mut table);

    for t in Table::all() {
        let best = progress.best(t);
        let mastered = progress.is_mastered(t);
        table.add_row(vec![
            Cell::new(t),
            Cell::new(best),
            Cell::new(star_string(best)),
            if mastered {
                Cell::new(MASTERED_MARK).fg(Color::Yellow)
            } else {
                Cell::new("-").fg(Color::DarkGrey)
            },
        ]);
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

/// `★★☆` style rating for a score.
pub fn star_string(score: u32) -> String {
    let earned = stars(score) as usize;
    let max = galaxy_model::MAX_STARS as usize;
    format!("{}{}", "★".repeat(earned), "☆".repeat(max - earned))
}

/// Table selector line: `[2] 3 4★ ...` with the selected table bracketed and
/// mastered tables starred.
pub fn table_bar(selected: Table, progress: &ProgressMap) -> String {
    Table::all()
        .map(|t| {
            let mark = if progress.best(t) >= MASTERY_THRESHOLD {
                MASTERED_MARK
            } else {
                ""
            };
            if t == selected {
                format!("[{t}{mark}]")
            } else {
                format!("{t}{mark}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Navigation line with the active mode bracketed.
pub fn mode_bar(active: Mode) -> String {
    Mode::ALL
        .iter()
        .map(|&mode| {
            if mode == active {
                format!("[{}:{}]", mode.label(), mode.key())
            } else {
                format!("{}:{}", mode.label(), mode.key())
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// A first-visit hint with the dismiss instruction.
pub fn hint_box(hint: ModeHint) -> String {
    format!(
        "💡 {}\n   {}\n   (برای بستن بنویس: ok  -  فهمیدم!)",
        hint.title, hint.message
    )
}
