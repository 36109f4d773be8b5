//! CCD Admin App
//!
//! Shell with navigation, alert banner and hash-routed pages.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{AlertBanner, IndexPage, NavBar, ReportsPage, SettingsPage};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::route::Route;

fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Route::parse(&hash))
        .unwrap_or(Route::Index)
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let (route, set_route) = signal(current_route());
    let hash_handle = window_event_listener(ev::hashchange, move |_| {
        let next = current_route();
        log::debug!("[APP] Route changed: {:?}", next);
        set_route.set(next);
    });
    on_cleanup(move || hash_handle.remove());

    // Provide context to all children
    let ctx = AppContext::new(route, config);
    provide_context(ctx);

    // Pages only remount when the page changes, not on query changes
    let page = Memo::new(move |_| route.get().name());

    view! {
        <div class="app-layout">
            <NavBar />
            <AlertBanner alert=ctx.alert on_close=move |_| ctx.dismiss_alert() />
            <main class="main-content">
                {move || match page.get() {
                    "reports" => view! { <ReportsPage /> }.into_any(),
                    "settings" => view! { <SettingsPage /> }.into_any(),
                    _ => view! { <IndexPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
