//! Archive Section Component
//!
//! Collapsible "Archived" section with a dashed drop zone. Dropping an
//! active league here archives it; archived cards can be reordered or
//! restored.

use leptos::prelude::*;

use dragdrop::{make_on_mouseleave, make_on_zone_mouseenter};

use crate::board::ARCHIVE_ZONE_ID;
use crate::components::LeagueCard;
use crate::context::BoardContext;

/// Archived leagues section with DnD support
#[component]
pub fn ArchiveSection() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let dnd = ctx.dnd;

    // Open by default
    let (visible, set_visible) = signal(true);

    let on_mouseenter = make_on_zone_mouseenter(dnd, ARCHIVE_ZONE_ID);
    let on_mouseleave = make_on_mouseleave(dnd);
    let is_over = move || dnd.drop_target_read.get().as_deref() == Some(ARCHIVE_ZONE_ID);
    let zone_class = move || {
        if is_over() { "archive-zone active" } else { "archive-zone" }
    };

    let is_empty = move || ctx.board.get().archived.is_empty();

    view! {
        <div class="archive-section">
            <div
                class="archive-header"
                on:click=move |_| {
                    // A drop landing on the header still fires a click;
                    // don't let it toggle the collapse.
                    if dnd.drag_just_ended_read.get_untracked() {
                        return;
                    }
                    set_visible.set(!visible.get());
                }
            >
                <span class="archive-chevron">
                    {move || if visible.get() { "\u{25be}" } else { "\u{25b8}" }}
                </span>
                <span>"Archived"</span>
            </div>

            <Show when=move || visible.get()>
                <div
                    class=zone_class
                    on:mouseenter=on_mouseenter
                    on:mouseleave=on_mouseleave
                >
                    <Show
                        when=move || !is_empty()
                        fallback=|| view! {
                            <div class="archive-placeholder">"Drag leagues here to archive"</div>
                        }
                    >
                        <For
                            each=move || ctx.board.get().archived
                            key=|league| (league.id.clone(), league.status)
                            children=move |league| {
                                view! { <LeagueCard league=league /> }
                            }
                        />
                    </Show>
                </div>
            </Show>
        </div>
    }
}
