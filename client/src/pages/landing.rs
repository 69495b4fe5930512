//! Landing page: entry point linking to both dashboards.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <section class="landing-page">
            <h1>"Portal"</h1>
            <p class="landing-page__subtitle">"Choose where you want to go."</p>
            <div class="landing-page__cards">
                <A href="/dashboard/customer" attr:class="portal-card">
                    <span class="portal-card__title">"Customer dashboard"</span>
                    <span class="portal-card__hint">"Orders, requests, and account details"</span>
                </A>
                <A href="/dashboard/staff" attr:class="portal-card">
                    <span class="portal-card__title">"Staff dashboard"</span>
                    <span class="portal-card__hint">"Queues and customer follow-ups"</span>
                </A>
            </div>
        </section>
    }
}
