//! Index Page
//!
//! Landing page: API hello check and the profile overview.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::sanitize::clean_fragment;

#[component]
pub fn IndexPage() -> impl IntoView {
    let ctx = use_app_context();
    let (response_message, set_response_message) = signal(String::new());
    let (reports_html, set_reports_html) = signal(String::new());

    // Load profile overview on mount
    Effect::new(move |_| {
        let base = ctx.api_base();
        spawn_local(async move {
            match api::get_distinct_profile_ids(&base).await {
                Ok(html) => set_reports_html.set(clean_fragment(&html)),
                Err(e) => log::error!("[INDEX] Error fetching reports: {}", e),
            }
        });
    });

    let call_hello = move |_| {
        log::info!("[INDEX] Calling hello");
        let base = ctx.api_base();
        spawn_local(async move {
            match api::get_hello(&base).await {
                Ok(res) => {
                    log::info!("[INDEX] Response from API: {}", res);
                    set_response_message.set(res);
                }
                Err(e) => log::error!("[INDEX] Error calling API: {}", e),
            }
        });
    };

    view! {
        <section class="index-page">
            <h1>"CCD Reports"</h1>
            <button class="hello-btn" on:click=call_hello>"Say Hello"</button>
            <Show when=move || !response_message.get().is_empty()>
                <p class="response-message">{move || response_message.get()}</p>
            </Show>
            <div class="reports-overview" inner_html=move || reports_html.get()></div>
        </section>
    }
}
