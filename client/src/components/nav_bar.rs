//! Top navigation bar listing the registered routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The nav reads the injected route table instead of hard-coding links, so
//! it stays in lockstep with whatever the registration point declares.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use routes::{RouteTable, normalize_path};

use crate::router::PageView;

/// Top navigation bar. Highlights the link matching the current location.
#[component]
pub fn NavBar() -> impl IntoView {
    let table = expect_context::<RouteTable<PageView>>();
    let location = use_location();

    let links: Vec<(String, String)> = table
        .entries()
        .iter()
        .map(|entry| (entry.path.clone(), entry.name.clone()))
        .collect();

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__title">"Advent of Code 2020"</span>
            {links
                .into_iter()
                .map(|(path, name)| {
                    let href = path.clone();
                    let is_active = move || {
                        normalize_path(&location.pathname.get()) == normalize_path(&path)
                    };
                    view! {
                        <a
                            href=href
                            class="nav-bar__link"
                            class=("nav-bar__link--active", is_active)
                        >
                            {name}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
