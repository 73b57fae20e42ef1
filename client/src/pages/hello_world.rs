//! Landing page for the calendar.

use leptos::prelude::*;

/// Welcome view bound to `/`.
#[component]
pub fn HelloWorldPage() -> impl IntoView {
    view! {
        <div class="hello-page">
            <h1>"Hello, Advent of Code 2020"</h1>
            <p>
                "Puzzle notes and interactive solvers for the December 2020 "
                "calendar, one page per day."
            </p>
            <p>"Day 1 is up so far. Pick it from the navigation above or jump straight in:"</p>
            <a class="hello-page__cta" href="/1">
                "Day 1: Report Repair"
            </a>
        </div>
    }
}
