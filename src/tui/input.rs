//! Keyboard cursor movement and mouse hit-testing.

use crate::game::Position;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use strum::IntoEnumIterator;

/// Moves the board cursor based on arrow keys.
pub(super) fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    use Position::*;

    match (cursor, key) {
        // Right movement
        (TopLeft, KeyCode::Right) => TopCenter,
        (TopCenter, KeyCode::Right) => TopRight,
        (MiddleLeft, KeyCode::Right) => Center,
        (Center, KeyCode::Right) => MiddleRight,
        (BottomLeft, KeyCode::Right) => BottomCenter,
        (BottomCenter, KeyCode::Right) => BottomRight,

        // Left movement
        (TopCenter, KeyCode::Left) => TopLeft,
        (TopRight, KeyCode::Left) => TopCenter,
        (Center, KeyCode::Left) => MiddleLeft,
        (MiddleRight, KeyCode::Left) => Center,
        (BottomCenter, KeyCode::Left) => BottomLeft,
        (BottomRight, KeyCode::Left) => BottomCenter,

        // Down movement
        (TopLeft, KeyCode::Down) => MiddleLeft,
        (TopCenter, KeyCode::Down) => Center,
        (TopRight, KeyCode::Down) => MiddleRight,
        (MiddleLeft, KeyCode::Down) => BottomLeft,
        (Center, KeyCode::Down) => BottomCenter,
        (MiddleRight, KeyCode::Down) => BottomRight,

        // Up movement
        (MiddleLeft, KeyCode::Up) => TopLeft,
        (Center, KeyCode::Up) => TopCenter,
        (MiddleRight, KeyCode::Up) => TopRight,
        (BottomLeft, KeyCode::Up) => MiddleLeft,
        (BottomCenter, KeyCode::Up) => Center,
        (BottomRight, KeyCode::Up) => MiddleRight,

        // No change for other keys or edge cases
        _ => cursor,
    }
}

/// Finds the board cell containing the given screen coordinate.
pub(super) fn hit_cell(cells: &[Rect; 9], column: u16, row: u16) -> Option<Position> {
    Position::iter().find(|pos| contains(cells[pos.to_index()], column, row))
}

/// Finds the history entry at the given screen coordinate.
///
/// `area` is the inner area of the history list and `offset` its scroll
/// offset; each entry occupies one row.
pub(super) fn hit_history_entry(
    area: Rect,
    offset: usize,
    len: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    if !contains(area, column, row) {
        return None;
    }
    let index = offset + (row - area.y) as usize;
    (index < len).then_some(index)
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
