//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use dragdrop::DndSignals;

use crate::board::{DropAction, LeagueBoard};

/// App-wide state provided via context: the league board signal pair
/// plus the shared drag-and-drop signals.
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Current board state - read
    pub board: ReadSignal<LeagueBoard>,
    /// Current board state - write
    set_board: WriteSignal<LeagueBoard>,
    /// Drag-and-drop signals shared by all cards and zones
    pub dnd: DndSignals,
}

impl BoardContext {
    pub fn new(
        board: (ReadSignal<LeagueBoard>, WriteSignal<LeagueBoard>),
        dnd: DndSignals,
    ) -> Self {
        Self {
            board: board.0,
            set_board: board.1,
            dnd,
        }
    }

    /// Route a completed drop gesture into the board
    pub fn dispatch_drop(&self, moved_id: &str, target_id: Option<&str>) {
        let mut action = DropAction::Ignore;
        self.set_board.update(|board| {
            action = board.handle_drop(moved_id, target_id);
        });
        web_sys::console::log_1(
            &format!(
                "[BOARD] drop moved={} target={:?} -> {:?}",
                moved_id, target_id, action
            )
            .into(),
        );
    }

    /// Move an archived league back to the active list
    pub fn unarchive(&self, id: &str) {
        self.set_board.update(|board| {
            board.unarchive(id);
        });
    }
}
