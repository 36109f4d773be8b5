//! Reports Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::sections::{SectionKey, SectionVisibility};

/// Reports page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ReportsState {
    /// Profile IDs that have report data
    pub profile_ids: Vec<String>,
    /// Profile the sections belong to ("" = none)
    pub selected_profile_id: String,
    /// Cleaned HTML per loaded section
    pub sections: HashMap<SectionKey, String>,
    pub visibility: SectionVisibility,
}

/// Type alias for the store
pub type ReportsStore = Store<ReportsState>;

/// Get the reports store from context
pub fn use_reports_store() -> ReportsStore {
    expect_context::<ReportsStore>()
}

/// Profile to select after a fresh list arrives, if the page has none yet
pub fn initial_profile(selected: &str, profile_ids: &[String]) -> Option<String> {
    if selected.is_empty() {
        profile_ids.first().cloned()
    } else {
        None
    }
}

// ========================
// Store Helper Functions
// ========================

/// Replace the profile list. Returns true when this picked a profile.
///
/// Called after an await, so a disposed store (page left) is a no-op.
pub fn store_set_profile_ids(store: &ReportsStore, profile_ids: Vec<String>) -> bool {
    let Some(selected) = store.selected_profile_id().try_get_untracked() else {
        return false;
    };
    let picked = initial_profile(&selected, &profile_ids);
    if store.profile_ids().try_set(profile_ids).is_some() {
        return false;
    }
    match picked {
        Some(profile_id) => store.selected_profile_id().try_set(profile_id).is_none(),
        None => false,
    }
}

/// Select a profile, dropping sections loaded for the previous one
pub fn store_select_profile(store: &ReportsStore, profile_id: String) {
    let Some(selected) = store.selected_profile_id().try_get_untracked() else {
        return;
    };
    if selected != profile_id {
        store.sections().try_update(|sections| sections.clear());
    }
    store.selected_profile_id().try_set(profile_id);
}

/// Store a section fragment if it still belongs to the selected profile
pub fn store_set_section(store: &ReportsStore, profile_id: &str, section: SectionKey, html: String) {
    if store.selected_profile_id().try_get_untracked().as_deref() != Some(profile_id) {
        return;
    }
    store.sections().try_update(|sections| {
        sections.insert(section, html);
    });
}

pub fn store_toggle_section(store: &ReportsStore, section: SectionKey) {
    store.visibility().try_update(|visibility| {
        visibility.toggle(section);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_initial_profile_picks_first() {
        assert_eq!(initial_profile("", &ids(&["P1", "P2"])), Some("P1".to_string()));
    }

    #[test]
    fn test_initial_profile_keeps_selection() {
        assert_eq!(initial_profile("P2", &ids(&["P1", "P2"])), None);
    }

    #[test]
    fn test_initial_profile_empty_list() {
        assert_eq!(initial_profile("", &[]), None);
    }

    #[test]
    fn test_default_state() {
        let state = ReportsState::default();
        assert!(state.selected_profile_id.is_empty());
        assert!(state.sections.is_empty());
        assert!(SectionKey::ALL.iter().all(|s| !state.visibility.is_visible(*s)));
    }

    fn loaded_store(owner: &Owner, profile_id: &str) -> ReportsStore {
        owner.with(|| {
            let store = Store::new(ReportsState::default());
            store_select_profile(&store, profile_id.to_string());
            store_set_section(&store, profile_id, SectionKey::Allergy, "<p>allergy</p>".to_string());
            store
        })
    }

    #[test]
    fn test_set_profile_ids_picks_first() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(ReportsState::default());
            assert!(store_set_profile_ids(&store, ids(&["P1", "P2"])));
            assert_eq!(store.selected_profile_id().get_untracked(), "P1");
            assert_eq!(store.profile_ids().get_untracked(), ids(&["P1", "P2"]));

            // Existing selection is kept
            assert!(!store_set_profile_ids(&store, ids(&["P3"])));
            assert_eq!(store.selected_profile_id().get_untracked(), "P1");
        });
    }

    #[test]
    fn test_select_new_profile_clears_sections() {
        let owner = Owner::new();
        let store = loaded_store(&owner, "P1");
        owner.with(|| {
            store_select_profile(&store, "P1".to_string());
            assert_eq!(store.sections().with_untracked(|s| s.len()), 1);

            store_select_profile(&store, "P2".to_string());
            assert!(store.sections().with_untracked(|s| s.is_empty()));
            assert_eq!(store.selected_profile_id().get_untracked(), "P2");
        });
    }

    #[test]
    fn test_stale_section_is_dropped() {
        let owner = Owner::new();
        let store = loaded_store(&owner, "P2");
        owner.with(|| {
            store_set_section(&store, "P1", SectionKey::Goals, "<p>old</p>".to_string());
            let sections = store.sections().get_untracked();
            assert!(!sections.contains_key(&SectionKey::Goals));
            assert_eq!(sections.get(&SectionKey::Allergy).map(String::as_str), Some("<p>allergy</p>"));
        });
    }

    #[test]
    fn test_toggle_section() {
        let owner = Owner::new();
        let store = loaded_store(&owner, "P1");
        owner.with(|| {
            store_toggle_section(&store, SectionKey::Payer);
            assert!(store.visibility().with_untracked(|v| v.is_visible(SectionKey::Payer)));
        });
    }

    #[test]
    fn test_helpers_after_page_disposed() {
        let owner = Owner::new();
        let store = loaded_store(&owner, "P1");
        owner.cleanup();

        assert!(!store_set_profile_ids(&store, ids(&["P1"])));
        store_select_profile(&store, "P2".to_string());
        store_set_section(&store, "P1", SectionKey::Goals, "<p>late</p>".to_string());
        store_toggle_section(&store, SectionKey::Goals);
        assert_eq!(store.selected_profile_id().try_get_untracked(), None);
    }
}
