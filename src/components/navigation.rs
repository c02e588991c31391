//! Bottom Navigation Component
//!
//! Fixed footer icon bar. Purely presentational: clicking an icon only
//! moves the highlight, there is no routing behind it.

use leptos::prelude::*;

const NAV_ITEMS: [(&str, &str); 4] = [
    ("shield", "/assets/img/shield.svg"),
    ("profile", "/assets/img/profile.svg"),
    ("yahoo", "/assets/img/yahoo.svg"),
    ("espn", "/assets/img/espn.svg"),
];

/// Footer navigation bar
#[component]
pub fn Navigation() -> impl IntoView {
    let (active_item, set_active_item) = signal("shield");

    let nav_buttons = NAV_ITEMS
        .into_iter()
        .map(|(name, icon)| {
            let btn_class = move || {
                if active_item.get() == name { "nav-btn active" } else { "nav-btn" }
            };
            view! {
                <button class=btn_class on:click=move |_| set_active_item.set(name)>
                    <img src=icon alt=name width="16" height="16" />
                </button>
            }
        })
        .collect_view();

    let hexagon_class = move || {
        if active_item.get() == "hexagon" { "nav-btn active" } else { "nav-btn" }
    };
    let search_class = move || {
        if active_item.get() == "search" { "nav-search active" } else { "nav-search" }
    };

    view! {
        <div class="bottom-nav">
            <div class="nav-group">
                {nav_buttons}
                <div class="nav-divider"></div>
                <button class=hexagon_class on:click=move |_| set_active_item.set("hexagon")>
                    <img src="/assets/img/hexagon.svg" alt="hexagon" width="16" height="16" />
                </button>
            </div>
            <button class=search_class on:click=move |_| set_active_item.set("search")>
                <img src="/assets/img/search.svg" alt="search" width="16" height="16" />
            </button>
        </div>
    }
}
