//! League List Component
//!
//! The active league list. The container is a named drop zone only for
//! hover styling; dropping on the container itself moves nothing.

use leptos::prelude::*;

use dragdrop::make_on_zone_mouseenter;

use crate::board::ACTIVE_ZONE_ID;
use crate::components::LeagueCard;
use crate::context::BoardContext;

/// Active league list with DnD support
#[component]
pub fn LeagueList() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let dnd = ctx.dnd;

    let on_mouseenter = make_on_zone_mouseenter(dnd, ACTIVE_ZONE_ID);
    let is_over = move || dnd.drop_target_read.get().as_deref() == Some(ACTIVE_ZONE_ID);
    let list_class = move || {
        if is_over() { "league-list drop-over" } else { "league-list" }
    };

    view! {
        <div class=list_class on:mouseenter=on_mouseenter>
            <For
                each=move || ctx.board.get().active
                key=|league| (league.id.clone(), league.status)
                children=move |league| {
                    view! { <LeagueCard league=league /> }
                }
            />
        </div>
    }
}
