//! Staff dashboard. Resolved on first navigation to `/dashboard/staff`.

use leptos::prelude::*;

use crate::components::dashboard_header::DashboardHeader;

#[component]
pub fn StaffDashboardPage() -> impl IntoView {
    view! {
        <section class="dashboard-page dashboard-page--staff">
            <DashboardHeader title="Staff dashboard"/>
            <div class="dashboard-page__grid">
                <article class="dashboard-panel">
                    <h2>"Queue"</h2>
                    <p>"No customers waiting."</p>
                </article>
                <article class="dashboard-panel">
                    <h2>"Follow-ups"</h2>
                    <p>"All caught up."</p>
                </article>
            </div>
        </section>
    }
}
