//! Settings Page
//!
//! XSLT editing, XSLT trial runs against sample data, and data deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::alert::AlertKind;
use crate::api;
use crate::context::use_app_context;
use crate::dialog;
use crate::options::parse_option_values;

const APPLY_ERROR_OUTPUT: &str = "Error: Failed to load CCD file or apply XSLT.";

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_app_context();

    let (xslt_block, set_xslt_block) = signal(ctx.config(|c| c.xslt_block.clone()));
    let (xslt_content, set_xslt_content) = signal(String::new());
    let (sample_data, set_sample_data) = signal(String::new());
    let (transformed_output, set_transformed_output) = signal(String::new());
    let (profile_ids, set_profile_ids) = signal(Vec::<String>::new());
    let (selected_profile_id, set_selected_profile_id) = signal(String::new());

    let load_profile_ids = move || {
        let base = ctx.api_base();
        spawn_local(async move {
            match api::populate_profile_ids(&base).await {
                Ok(html) => {
                    let ids = parse_option_values(&html);
                    set_selected_profile_id.set(ids.first().cloned().unwrap_or_default());
                    set_profile_ids.set(ids);
                }
                Err(e) => {
                    log::error!("[SETTINGS] Error loading profile IDs: {}", e);
                    ctx.show_alert(AlertKind::Error, "Failed to load profile IDs.");
                }
            }
        });
    };

    let load_xslt_content = move || {
        let base = ctx.api_base();
        let block = xslt_block.get_untracked();
        spawn_local(async move {
            match api::get_xslt_content(&base, &block).await {
                Ok(content) => set_xslt_content.set(content),
                Err(e) => {
                    log::error!("[SETTINGS] Error loading XSLT content for {}: {}", block, e);
                    ctx.show_alert(AlertKind::Error, "Failed to load XSLT content.");
                }
            }
        });
    };

    // Initial load
    Effect::new(move |_| {
        load_profile_ids();
        load_xslt_content();
    });

    let save_xslt = move |_| {
        let block = xslt_block.get_untracked();
        let message = format!("Overwrite XSLT content for block \"{}\"? This cannot be undone.", block);
        if !dialog::confirm(&message) {
            ctx.show_alert(AlertKind::Warning, "Save action canceled.");
            return;
        }
        let base = ctx.api_base();
        let content = xslt_content.get_untracked();
        spawn_local(async move {
            match api::save_xslt_content(&base, &block, &content).await {
                Ok(_) => ctx.show_alert(AlertKind::Success, "XSLT file saved successfully!"),
                Err(e) => {
                    log::error!("[SETTINGS] Error saving XSLT content: {}", e);
                    ctx.show_alert(AlertKind::Error, "Error saving XSLT content.");
                }
            }
        });
    };

    let apply_xslt = move |_| {
        let base = ctx.api_base();
        let block = xslt_block.get_untracked();
        let sample = sample_data.get_untracked();
        spawn_local(async move {
            match api::apply_xslt(&base, &sample, &block).await {
                Ok(output) => set_transformed_output.set(output),
                Err(e) => {
                    log::error!("[SETTINGS] Error applying XSLT: {}", e);
                    set_transformed_output.set(APPLY_ERROR_OUTPUT.to_string());
                }
            }
        });
    };

    let delete_profile_data = move |_| {
        let profile_id = selected_profile_id.get_untracked();
        if profile_id.is_empty() {
            ctx.show_alert(AlertKind::Warning, "Please select a Profile ID first.");
            return;
        }
        let message = format!("Delete all data for Profile ID \"{}\"? This cannot be undone.", profile_id);
        if !dialog::confirm(&message) {
            return;
        }
        let base = ctx.api_base();
        spawn_local(async move {
            match api::delete_data_by_profile(&base, &profile_id).await {
                Ok(response) => {
                    ctx.show_alert(AlertKind::Success, response);
                    load_profile_ids();
                }
                Err(e) => {
                    log::error!("[SETTINGS] Error deleting data for {}: {}", profile_id, e);
                    ctx.show_alert(AlertKind::Error, "Failed to delete profile data.");
                }
            }
        });
    };

    let delete_all_data = move |_| {
        if !dialog::confirm("Are you sure you want to delete all data? This cannot be undone.") {
            return;
        }
        let base = ctx.api_base();
        spawn_local(async move {
            match api::delete_all_data(&base).await {
                Ok(response) => {
                    ctx.show_alert(AlertKind::Success, response);
                    load_profile_ids();
                }
                Err(e) => {
                    log::error!("[SETTINGS] Error deleting all data: {}", e);
                    ctx.show_alert(AlertKind::Error, "Failed to delete all data.");
                }
            }
        });
    };

    view! {
        <section class="settings-page">
            <h1>"Settings"</h1>

            <div class="xslt-panel">
                <div class="xslt-header">
                    <label for="xsltBlock">"XSLT Block"</label>
                    <input
                        id="xsltBlock"
                        type="text"
                        prop:value=xslt_block
                        on:change=move |ev| {
                            set_xslt_block.set(event_target_value(&ev));
                            load_xslt_content();
                        }
                    />
                </div>
                <textarea
                    class="xslt-editor"
                    spellcheck="false"
                    prop:value=xslt_content
                    on:input=move |ev| set_xslt_content.set(event_target_value(&ev))
                ></textarea>
                <div class="xslt-actions">
                    <button class="save-btn" on:click=save_xslt>"Save XSLT"</button>
                    <button
                        class="chatgpt-btn"
                        on:click=move |_| dialog::alert("ChatGPT functionality not implemented yet.")
                    >
                        "Ask ChatGPT"
                    </button>
                </div>
            </div>

            <div class="sample-panel">
                <label for="sampleData">"Sample CCD Data"</label>
                <textarea
                    id="sampleData"
                    class="sample-editor"
                    spellcheck="false"
                    prop:value=sample_data
                    on:input=move |ev| set_sample_data.set(event_target_value(&ev))
                ></textarea>
                <button class="apply-btn" on:click=apply_xslt>"Apply XSLT"</button>
                <pre id="transformedOutput" class="transformed-output">{move || transformed_output.get()}</pre>
            </div>

            <div class="data-panel">
                <label for="settingsProfileID">"Profile ID"</label>
                <select
                    id="settingsProfileID"
                    prop:value=move || selected_profile_id.get()
                    on:change=move |ev| set_selected_profile_id.set(event_target_value(&ev))
                >
                    <For
                        each=move || profile_ids.get()
                        key=|id| id.clone()
                        children=move |id| {
                            let label = id.clone();
                            view! { <option value=id>{label}</option> }
                        }
                    />
                </select>
                <button class="delete-btn" on:click=delete_profile_data>"Delete Profile Data"</button>
                <button class="delete-all-btn" on:click=delete_all_data>"Delete All Data"</button>
            </div>
        </section>
    }
}
