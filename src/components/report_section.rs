//! Report Section
//!
//! One collapsible CCD section on the reports page.

use leptos::prelude::*;

use crate::sections::SectionKey;
use crate::store::{store_toggle_section, use_reports_store, ReportsStateStoreFields};

#[component]
pub fn ReportSection(section: SectionKey) -> impl IntoView {
    let store = use_reports_store();
    let visible = move || store.visibility().read().is_visible(section);
    let html = move || store.sections().read().get(&section).cloned().unwrap_or_default();

    view! {
        <div class="report-section" id=format!("section-{}", section.key())>
            <button
                class=move || if visible() { "section-toggle open" } else { "section-toggle" }
                on:click=move |_| store_toggle_section(&store, section)
            >
                {section.display()}
            </button>
            <Show when=visible>
                <div class="section-body" inner_html=html></div>
            </Show>
        </div>
    }
}
