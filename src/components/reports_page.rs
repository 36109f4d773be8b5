//! Reports Page
//!
//! Profile picker, the 19 CCD report sections and Excel export.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::collapsible;
use crate::components::ReportSection;
use crate::context::use_app_context;
use crate::dialog;
use crate::export;
use crate::options::parse_option_values;
use crate::route::Route;
use crate::sanitize::clean_fragment;
use crate::sections::SectionKey;
use crate::store::{
    store_select_profile, store_set_profile_ids, store_set_section, ReportsState, ReportsStateStoreFields,
    ReportsStore,
};

#[component]
pub fn ReportsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store: ReportsStore = Store::new(ReportsState::default());
    provide_context(store);

    // One request per section for the selected profile
    let load_report_data = move || {
        let Some(profile_id) = store.selected_profile_id().try_get_untracked() else {
            return;
        };
        if profile_id.is_empty() {
            return;
        }
        log::info!("[REPORTS] Loading {} sections for {}", SectionKey::ALL.len(), profile_id);
        let base = ctx.api_base();
        for section in SectionKey::ALL {
            let base = base.clone();
            let profile_id = profile_id.clone();
            spawn_local(async move {
                match api::get_qs(&base, section, &profile_id).await {
                    Ok(html) => store_set_section(&store, &profile_id, section, clean_fragment(&html)),
                    Err(e) => log::error!("[REPORTS] Error loading {} for {}: {}", section.key(), profile_id, e),
                }
            });
        }
    };

    // Profile from the URL (`#/reports?profileID=..`)
    Effect::new(move |_| {
        if let Route::Reports { profile_id } = ctx.route.get() {
            let profile_id = profile_id
                .or_else(|| store.profile_ids().with_untracked(|ids| ids.first().cloned()))
                .unwrap_or_default();
            store_select_profile(&store, profile_id);
            load_report_data();
        }
    });

    // Profile list; picks the first profile when the URL named none
    Effect::new(move |_| {
        let base = ctx.api_base();
        spawn_local(async move {
            match api::get_distinct_report_profile_ids(&base).await {
                Ok(html) => {
                    let profile_ids = parse_option_values(&html);
                    log::info!("[REPORTS] Loaded {} profile IDs", profile_ids.len());
                    if store_set_profile_ids(&store, profile_ids) {
                        load_report_data();
                    }
                }
                Err(e) => log::error!("[REPORTS] Error loading profile IDs: {}", e),
            }
        });
    });

    let click_handle = window_event_listener(ev::click, move |ev| collapsible::handle_click(&ev));
    on_cleanup(move || click_handle.remove());

    let on_profile_change = move |ev: web_sys::Event| {
        store_select_profile(&store, event_target_value(&ev));
        load_report_data();
    };

    let export_report = move |_| {
        let profile_id = store.selected_profile_id().get_untracked();
        if profile_id.is_empty() {
            dialog::alert("No profile selected for export.");
            return;
        }
        let base = ctx.api_base();
        spawn_local(async move {
            match api::generate_excel_report(&base, &profile_id).await {
                Ok(payload) => {
                    if let Err(e) = export::download_report(&profile_id, &payload) {
                        log::error!("[REPORTS] Download failed: {}", e);
                    }
                }
                Err(e) => log::error!("[REPORTS] Error exporting {}: {}", profile_id, e),
            }
        });
    };

    view! {
        <section class="reports-page">
            <div class="reports-toolbar">
                <label for="profileID">"Profile ID"</label>
                <select
                    id="profileID"
                    class="profile-select"
                    prop:value=move || store.selected_profile_id().get()
                    on:change=on_profile_change
                >
                    <For
                        each=move || store.profile_ids().get()
                        key=|id| id.clone()
                        children=move |id| {
                            let label = id.clone();
                            view! { <option value=id>{label}</option> }
                        }
                    />
                </select>
                <button class="export-btn" on:click=export_report>"Export to Excel"</button>
            </div>

            <div class="report-sections">
                {SectionKey::ALL
                    .into_iter()
                    .map(|section| view! { <ReportSection section=section /> })
                    .collect_view()}
            </div>
        </section>
    }
}
