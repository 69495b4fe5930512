//! Customer-facing dashboard. Resolved on first navigation to
//! `/dashboard/customer`.

use leptos::prelude::*;

use crate::components::dashboard_header::DashboardHeader;

#[component]
pub fn CustomerDashboardPage() -> impl IntoView {
    view! {
        <section class="dashboard-page dashboard-page--customer">
            <DashboardHeader title="Customer dashboard"/>
            <div class="dashboard-page__grid">
                <article class="dashboard-panel">
                    <h2>"Your requests"</h2>
                    <p>"Nothing open right now."</p>
                </article>
                <article class="dashboard-panel">
                    <h2>"Account"</h2>
                    <p>"Profile and contact details."</p>
                </article>
            </div>
        </section>
    }
}
