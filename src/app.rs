//! League Board App
//!
//! Root component: header, active league list, collapsible archived
//! section and footer navigation. Owns the board signal and wires the
//! global drop handler into it.

use leptos::prelude::*;

use dragdrop::{bind_global_mouseup, create_dnd_signals};

use crate::board::LeagueBoard;
use crate::components::{ArchiveSection, LeagueList, Navigation};
use crate::context::BoardContext;

#[component]
pub fn App() -> impl IntoView {
    let (board, set_board) = signal(LeagueBoard::seeded());
    let dnd = create_dnd_signals();

    let ctx = BoardContext::new((board, set_board), dnd);
    provide_context(ctx);

    // One completed gesture -> one dispatch into the board
    bind_global_mouseup(dnd, move |dragged_id, target_id| {
        ctx.dispatch_drop(&dragged_id, target_id.as_deref());
    });

    view! {
        <div class="page">
            <div class="board">
                <header class="board-header">
                    <div class="board-title">
                        <img src="/assets/img/logo.svg" alt="Logo" width="16" height="16" />
                        <h1>"Leagues"</h1>
                    </div>
                    // Placeholder: league creation is not wired up
                    <button class="create-league-btn">"+ Create League"</button>
                </header>

                <LeagueList />
                <ArchiveSection />

                <Navigation />
            </div>
        </div>
    }
}
