//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::nav_bar::NavBar;
use crate::pages::not_found::NotFoundPage;
use crate::routes::ROUTES;
use crate::routes::loader::ModuleCache;
use crate::routes::navigator::{Navigator, Outlet};

/// Root application component.
///
/// Registers the route table, resolves eager views, and declares one
/// `<Route>` per entry in [`ROUTES`]. `leptos_router` picks the route; the
/// route's view hands its path to the [`Navigator`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let navigator = match Navigator::register(&ROUTES, ModuleCache::compiled()) {
        Ok(nav) => nav,
        Err(e) => {
            log::error!("route registration failed: {e}");
            return view! { <p class="boot-error">{format!("Routing unavailable: {e}")}</p> }.into_any();
        }
    };
    let table = navigator.table().clone();
    let unmatched = navigator.clone();

    view! {
        <Title text="Portal"/>

        <Router>
            <NavBar table=table/>
            <main class="portal-main">
                <Routes fallback=move || {
                    unmatched.unmount();
                    view! { <NotFoundPage/> }
                }>
                    <Route path=path!("/") view=route_view(&navigator, "/")/>
                    <Route
                        path=path!("/dashboard/customer")
                        view=route_view(&navigator, "/dashboard/customer")
                    />
                    <Route path=path!("/dashboard/staff") view=route_view(&navigator, "/dashboard/staff")/>
                </Routes>
            </main>
        </Router>
    }
    .into_any()
}

fn route_view(navigator: &Navigator, path: &'static str) -> impl Fn() -> AnyView + Clone + Send + 'static + use<> {
    let navigator = navigator.clone();
    move || view! { <RouteView path=path navigator=navigator.clone()/> }.into_any()
}

/// Navigates to `path` and renders the resulting [`Outlet`].
///
/// While a lazy module is fetched the previously mounted view stays on
/// screen. A failed fetch keeps it there under an error notice.
#[component]
fn RouteView(path: &'static str, navigator: Navigator) -> impl IntoView {
    let previous = navigator.current();
    let pending = navigator.clone();

    view! {
        <Suspense fallback=move || render_outlet(&pending, &Outlet::pending(previous))>
            {move || {
                let nav = navigator.clone();
                Suspend::new(async move {
                    let outcome = nav.navigate(path).await;
                    if let Err(e) = &outcome {
                        log::warn!("navigation to {path} failed: {e}");
                    }
                    render_outlet(&nav, &Outlet::settle(outcome, previous))
                })
            }}
        </Suspense>
    }
}

fn render_outlet(navigator: &Navigator, outlet: &Outlet) -> AnyView {
    let visible = outlet.visible().and_then(|view| navigator.cache().get(view)).map(|module| module.render());
    match outlet {
        Outlet::Show(_) => visible.into_any(),
        Outlet::Loading { .. } => view! {
            <p class="route-loading">"Loading..."</p>
            {visible}
        }
        .into_any(),
        Outlet::Kept { error, .. } => view! {
            <p class="route-error">{format!("Could not load this page: {error}")}</p>
            {visible}
        }
        .into_any(),
        Outlet::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
