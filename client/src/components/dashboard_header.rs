//! Header strip shared by both dashboards.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DashboardHeader(title: &'static str) -> impl IntoView {
    view! {
        <header class="dashboard-page__header toolbar">
            <span class="toolbar__title">{title}</span>
            <span class="toolbar__spacer"></span>
            <A href="/" attr:class="btn toolbar__home">"Home"</A>
        </header>
    }
}
