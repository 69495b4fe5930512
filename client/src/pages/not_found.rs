//! Fallback for paths with no route entry.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found-page">
            <p>"Page not found."</p>
            <A href="/">"Back to start"</A>
        </section>
    }
}
