//! League Card Component
//!
//! One draggable league row: logo, name, status badge, provider and
//! year, with a hover tooltip and drag-handle affordance. Archived
//! cards get a restore button instead of the tooltip.

use leptos::prelude::*;

use dragdrop::{make_on_card_mouseenter, make_on_mousedown, make_on_mouseleave};

use crate::context::BoardContext;
use crate::models::{League, LeagueStatus};

/// League card component
#[component]
pub fn LeagueCard(league: League) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let dnd = ctx.dnd;

    let id = league.id.clone();
    let is_archived = league.status == LeagueStatus::Archived;
    let (show_tooltip, set_show_tooltip) = signal(false);

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let enter_target = make_on_card_mouseenter(dnd, id.clone());
    let leave_target = make_on_mouseleave(dnd);
    let on_mouseenter = move |ev: web_sys::MouseEvent| {
        set_show_tooltip.set(true);
        enter_target(ev);
    };
    let on_mouseleave = move |ev: web_sys::MouseEvent| {
        set_show_tooltip.set(false);
        leave_target(ev);
    };

    // Visual state
    let is_dragging = {
        let id = id.clone();
        move || dnd.dragging_id_read.get().as_deref() == Some(id.as_str())
    };
    let is_drop_target = {
        let id = id.clone();
        move || dnd.drop_target_read.get().as_deref() == Some(id.as_str())
    };
    let card_class = move || {
        let mut c = String::from("league-card");
        if is_dragging() { c.push_str(" dragging"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    let badge_class = format!("status-badge {}", league.status.css_class());
    let show_hint = move || show_tooltip.get() && !is_archived;

    let on_restore = {
        let id = id.clone();
        move |_| ctx.unarchive(&id)
    };

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <img class="card-logo" src=league.logo.clone() alt=format!("{} logo", league.name) />

            <div class="card-info">
                <div class="card-headline">
                    <span class="card-name">{league.name.clone()}</span>
                    <span class=badge_class>{league.status.label()}</span>
                </div>
                <div class="card-meta">
                    <span class="meta-entry">
                        <img src="/assets/img/espn.svg" alt="provider logo" width="12" height="12" />
                        {league.provider.clone()}
                    </span>
                    <span class="meta-entry">
                        <img src="/assets/img/calendar.svg" alt="calendar" width="12" height="12" />
                        {league.year.clone()}
                    </span>
                </div>
            </div>

            <Show when=show_hint>
                <div class="drag-handle">
                    <img src="/assets/img/drag.svg" alt="drag" width="16" height="16" />
                </div>
                <div class="drag-tooltip">"Drag to re-order or move to Archive"</div>
            </Show>

            <Show when=move || is_archived>
                <button class="restore-btn" on:click=on_restore.clone()>
                    "Restore"
                </button>
            </Show>
        </div>
    }
}
