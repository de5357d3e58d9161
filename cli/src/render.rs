use std::fmt::Write;

use samegame_core::GameState;

/// Draws the board with column and row headers, one symbol per tile.
pub(crate) fn render_text(state: &GameState) -> String {
    let grid = state.grid();
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..grid.col_count() {
        let _ = write!(out, " {}", col % 10);
    }
    out.push('\n');

    for row in 0..grid.row_count() {
        let _ = write!(out, "{row:>3}");
        for cell in grid.row(row) {
            let _ = write!(out, " {}", cell.tile.symbol());
        }
        out.push('\n');
    }

    if state.is_terminal() {
        out.push_str("Game over!\n");
    }
    out
}

pub(crate) fn render_json(state: &GameState) -> serde_json::Result<String> {
    serde_json::to_string(state)
}
