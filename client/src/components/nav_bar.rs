//! Top navigation bar with one link per registered route.
//!
//! DESIGN
//! ======
//! Links are generated from the route table so the bar never drifts from the
//! registered paths. `<A>` marks the active link with `aria-current="page"`.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::RouteTable;

#[component]
pub fn NavBar(table: Arc<RouteTable>) -> impl IntoView {
    let links = table
        .entries()
        .iter()
        .map(|entry| {
            let (href, title) = (entry.path, entry.view.title());
            view! {
                <A href=href attr:class="nav-bar__link">
                    {title}
                </A>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="nav-bar" aria-label="Main">
            <span class="nav-bar__brand">"Portal"</span>
            {links}
        </nav>
    }
}
