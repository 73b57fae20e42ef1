//! Fallback page for paths the route table cannot resolve.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Not-found view rendered by the outlet on resolution misses.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p>
                "Nothing is routed at " <code>{move || location.pathname.get()}</code>
                "."
            </p>
            <a href="/">"Back to the calendar"</a>
        </div>
    }
}
