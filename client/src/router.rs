//! Route table construction and the resolving outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table is built once at startup and handed to the outlet and nav
//! explicitly; nothing here registers routes on a framework-wide singleton.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use routes::{ConfigurationError, RouteEntry, RouteTable};

use crate::pages::day1::Day1Page;
use crate::pages::hello_world::HelloWorldPage;
use crate::pages::not_found::NotFoundPage;

/// Renderable view handle stored in the route table.
///
/// Non-capturing `view!` closures coerce to this pointer type, so the table
/// stays cheap to clone and `routes` needs no UI-framework dependency.
pub type PageView = fn() -> AnyView;

/// Build the application route table.
///
/// This is the single registration point for the whole client.
///
/// # Errors
///
/// Returns [`ConfigurationError`] if the entry list carries a duplicate path
/// or name.
pub fn build_route_table() -> Result<RouteTable<PageView>, ConfigurationError> {
    let entries: Vec<RouteEntry<PageView>> = vec![
        RouteEntry::new("/", "HelloWorld", || view! { <HelloWorldPage/> }.into_any()),
        RouteEntry::new("/1", "Day1", || view! { <Day1Page/> }.into_any()),
    ];
    RouteTable::register(entries)
}

/// Resolve the current location against the injected table and render the
/// matched view, or the not-found page when nothing matches.
#[component]
pub fn RouteOutlet(table: RouteTable<PageView>) -> impl IntoView {
    let location = use_location();
    move || {
        let path = location.pathname.get();
        match table.resolve(&path) {
            Ok(entry) => (entry.view)(),
            Err(err) => {
                log::warn!("{err}");
                view! { <NotFoundPage/> }.into_any()
            }
        }
    }
}
