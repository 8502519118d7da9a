//! Terminal rendering of the seat grid.
use crate::core::grid::Grid;
use crate::models::seat::Seat;
use crate::utils::colors::{RESET, bg, colorize_optional, fg_for};
use crate::utils::table::{Column, Table, fit};

const CELL_WIDTH: usize = 12;

fn label(seat: &Seat) -> String {
    if seat.content.name.is_empty() {
        format!("({})", seat.position)
    } else {
        seat.content.name.clone()
    }
}

fn cell(seat: &Seat, colored: bool) -> String {
    let text = format!(
        "{} {}",
        fit(&label(seat), CELL_WIDTH - 2),
        seat.attendance.marker()
    );
    if colored {
        format!(
            "{}{}{}{}",
            bg(&seat.content.color),
            fg_for(&seat.content.color),
            text,
            RESET
        )
    } else {
        format!("[{}]", text)
    }
}

/// One line per grid row, cells painted with the seat color.
pub fn render_grid(grid: &Grid, colored: bool) -> String {
    if grid.is_empty() {
        return "(empty grid)\n".to_string();
    }

    let mut out = String::new();
    for r in 0..grid.rows() {
        let cells: Vec<String> = grid.row(r).iter().map(|s| cell(s, colored)).collect();
        out.push_str(&format!("{:>3} {}\n", r, cells.join(" ")));
    }
    out
}

/// Per-seat listing with every field, `sketch` flags seats with a drawing.
pub fn render_details(grid: &Grid, with_sketch: &[bool], colored: bool) -> String {
    let mut table = Table::new(vec![
        Column::new("SEAT", 6),
        Column::new("NAME", 16),
        Column::new("MEMO", 24),
        Column::new("COLOR", 8),
        Column::new("ATTENDANCE", 10),
        Column::new("SKETCH", 6),
    ]);

    for (i, seat) in grid.seats().iter().enumerate() {
        let sketch = if with_sketch.get(i).copied().unwrap_or(false) {
            "yes"
        } else {
            "-"
        };
        table.add_row(vec![
            seat.position.to_string(),
            seat.content.name.clone(),
            seat.content.memo.clone(),
            seat.content.color.to_string(),
            seat.attendance.to_string(),
            sketch.to_string(),
        ]);
    }

    let rendered = table.render();
    if colored {
        rendered
            .lines()
            .map(|l| {
                if l.trim_end().ends_with(" -") {
                    format!("{}\n", colorize_optional(l))
                } else {
                    format!("{}\n", l)
                }
            })
            .collect()
    } else {
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::SeatStore;
    use crate::models::position::Position;
    use crate::models::seat::SeatField;

    #[test]
    fn plain_render_shows_names_and_placeholders() {
        let mut store = SeatStore::in_memory("seat10").unwrap();
        store.set(Position::new(0, 1), SeatField::Name, "Alice").unwrap();
        store
            .set(Position::new(1, 0), SeatField::Attendance, "absent")
            .unwrap();
        let grid = Grid::build(&store, 2, 2).unwrap();

        let out = render_grid(&grid, false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("(0-0)"));
        assert!(lines[0].contains("Alice"));
        assert!(lines[1].contains("×"));
    }

    #[test]
    fn empty_grid_renders_a_notice() {
        let store = SeatStore::in_memory("seat10").unwrap();
        let grid = Grid::build(&store, 0, 3).unwrap();
        assert_eq!(render_grid(&grid, false), "(empty grid)\n");
    }
}
