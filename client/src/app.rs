//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::nav_bar::NavBar;
use crate::router::{RouteOutlet, build_route_table};

/// Root application component.
///
/// Builds the route table once, provides it to navigation chrome via
/// context, and passes it to the outlet. A rejected route set is a startup
/// configuration bug: it is logged and rendered inline instead of mounting
/// the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let table = match build_route_table() {
        Ok(table) => table,
        Err(err) => {
            log::error!("route registration failed: {err}");
            return view! {
                <div class="startup-error">
                    <h1>"Startup failed"</h1>
                    <p>{err.to_string()}</p>
                </div>
            }
            .into_any();
        }
    };
    log::info!("registered {} routes", table.len());
    provide_context(table.clone());

    view! {
        <Title text="Advent of Code 2020"/>

        <Router>
            <NavBar/>
            <main class="page-body">
                <RouteOutlet table=table/>
            </main>
        </Router>
    }
    .into_any()
}
