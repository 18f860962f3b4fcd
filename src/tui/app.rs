//! Application state and logic.

use crate::game::{Position, Timeline};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tracing::debug;

use super::input;

/// Which panel receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move the history selection.
    History,
}

/// Main application state.
pub struct App {
    timeline: Timeline,
    cursor: Position,
    focus: Focus,
    history_state: ListState,
    // Screen areas recorded during the last draw, for mouse hit-testing.
    cell_areas: [Rect; 9],
    history_area: Rect,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        let mut history_state = ListState::default();
        history_state.select(Some(0));
        Self {
            timeline: Timeline::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            history_state,
            cell_areas: [Rect::default(); 9],
            history_area: Rect::default(),
        }
    }

    /// Gets the current timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub(super) fn history_state_mut(&mut self) -> &mut ListState {
        &mut self.history_state
    }

    pub(super) fn set_cell_area(&mut self, pos: Position, area: Rect) {
        self.cell_areas[pos.to_index()] = area;
    }

    pub(super) fn set_history_area(&mut self, area: Rect) {
        self.history_area = area;
    }

    /// Handles a key press. Returns true when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Keys 1-9 place directly, row-major from the top-left.
                if let Some(pos) = c
                    .to_digit(10)
                    .filter(|d| (1..=9).contains(d))
                    .and_then(|d| Position::from_index(d as usize - 1))
                {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.place(self.cursor),
                Focus::History => self.jump_to_selected(),
            },
            KeyCode::Up | KeyCode::Down if self.focus == Focus::History => {
                self.move_selection(code);
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            _ => {}
        }
        false
    }

    /// Handles a mouse event. Only left-button presses do anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(pos) = input::hit_cell(&self.cell_areas, mouse.column, mouse.row) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.place(pos);
        } else if let Some(index) = input::hit_history_entry(
            self.history_area,
            self.history_state.offset(),
            self.timeline.len(),
            mouse.column,
            mouse.row,
        ) {
            self.focus = Focus::History;
            self.jump(index);
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        self.timeline.restart();
        self.cursor = Position::Center;
        self.focus = Focus::Board;
        self.history_state.select(Some(0));
    }

    fn place(&mut self, pos: Position) {
        // Occupied squares and finished games are quiet no-ops.
        if let Err(e) = self.timeline.play(pos) {
            debug!(?pos, error = %e, "Move ignored");
            return;
        }
        self.history_state.select(Some(self.timeline.current()));
    }

    fn jump(&mut self, index: usize) {
        self.timeline.jump_to(index);
        self.history_state.select(Some(index));
    }

    fn jump_to_selected(&mut self) {
        if let Some(index) = self.history_state.selected() {
            self.jump(index);
        }
    }

    fn move_selection(&mut self, code: KeyCode) {
        let last = self.timeline.len() - 1;
        let selected = self
            .history_state
            .selected()
            .unwrap_or_else(|| self.timeline.current());
        let next = match code {
            KeyCode::Up => selected.saturating_sub(1),
            KeyCode::Down => (selected + 1).min(last),
            _ => selected,
        };
        self.history_state.select(Some(next));
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                // Start browsing from the entry on display.
                self.history_state.select(Some(self.timeline.current()));
                Focus::History
            }
            Focus::History => Focus::Board,
        };
    }
}
