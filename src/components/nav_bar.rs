//! Navigation Bar

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::Route;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let link_class = move |name: &'static str| {
        move || {
            if ctx.route.get().name() == name {
                "nav-link active"
            } else {
                "nav-link"
            }
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-title">"CCD Admin"</span>
            <a class=link_class("index") href=Route::Index.href()>"Home"</a>
            <a class=link_class("reports") href=Route::Reports { profile_id: None }.href()>"Reports"</a>
            <a class=link_class("settings") href=Route::Settings.href()>"Settings"</a>
        </nav>
    }
}
