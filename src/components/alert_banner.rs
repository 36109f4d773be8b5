//! Alert Banner Component
//!
//! Dismissible notification strip.

use leptos::prelude::*;

use crate::alert::AlertMessage;

/// Alert banner
///
/// Renders nothing while `alert` is `None`. The × button calls `on_close`;
/// timed dismissal is left to whoever owns the signal.
#[component]
pub fn AlertBanner(
    #[prop(into)] alert: Signal<Option<AlertMessage>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    move || {
        alert.get().map(|alert| {
            view! {
                <div class=format!("alert-banner {}", alert.kind.class()) role="alert">
                    <span class="alert-text">{alert.message}</span>
                    <button class="close-btn" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
