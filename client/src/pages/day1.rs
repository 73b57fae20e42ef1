//! Day 1 page: interactive Report Repair solver.
//!
//! Paste an expense report and the page shows the entry count plus both
//! part answers, or the parse error for malformed input.

#[cfg(test)]
#[path = "day1_test.rs"]
mod day1_test;

use leptos::prelude::*;
use puzzles::ReportError;

/// Solved values for a parsed report.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Solution {
    entry_count: usize,
    part_one: Option<u64>,
    part_two: Option<u64>,
}

/// Parse and solve a pasted report.
fn solve(input: &str) -> Result<Solution, ReportError> {
    let entries = puzzles::parse_report(input)?;
    Ok(Solution {
        entry_count: entries.len(),
        part_one: puzzles::part_one(&entries),
        part_two: puzzles::part_two(&entries),
    })
}

fn format_part(value: Option<u64>) -> String {
    value.map_or_else(|| "no combination found".to_owned(), |v| v.to_string())
}

/// Day 1 solver view bound to `/1`.
#[component]
pub fn Day1Page() -> impl IntoView {
    let report = RwSignal::new(String::new());

    view! {
        <div class="day-page">
            <h1>"Day 1: Report Repair"</h1>
            <p>
                "Paste your expense report, one entry per line. Part one "
                "multiplies the two entries that sum to 2020, part two the "
                "three."
            </p>
            <textarea
                class="day-page__input"
                rows="10"
                placeholder="1721\n979\n366\n299\n675\n1456"
                prop:value=move || report.get()
                on:input=move |ev| report.set(event_target_value(&ev))
            ></textarea>
            <Show when=move || !report.get().trim().is_empty()>
                {move || match solve(&report.get()) {
                    Ok(solution) => {
                        view! {
                            <div class="day-page__results">
                                <p class="day-page__count">{solution.entry_count} " entries"</p>
                                <p>"Part one: " <strong>{format_part(solution.part_one)}</strong></p>
                                <p>"Part two: " <strong>{format_part(solution.part_two)}</strong></p>
                            </div>
                        }
                            .into_any()
                    }
                    Err(err) => view! { <p class="day-page__error">{err.to_string()}</p> }.into_any(),
                }}
            </Show>
        </div>
    }
}
