//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::alert::{AlertKind, AlertMessage};
use crate::config::AppConfig;
use crate::route::Route;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current hash route
    pub route: ReadSignal<Route>,
    /// Banner currently on screen
    pub alert: RwSignal<Option<AlertMessage>>,
    /// Bumped per alert so stale timers leave newer alerts alone
    alert_generation: StoredValue<u64>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(route: ReadSignal<Route>, config: AppConfig) -> Self {
        Self {
            route,
            alert: RwSignal::new(None),
            alert_generation: StoredValue::new(0),
            config: StoredValue::new(config),
        }
    }

    /// Read a value out of the runtime config
    pub fn config<T>(&self, f: impl FnOnce(&AppConfig) -> T) -> T {
        self.config.with_value(f)
    }

    pub fn api_base(&self) -> String {
        self.config(|c| c.api_base_url.clone())
    }

    /// Show a banner, auto-dismissed after `alert_dismiss_ms`
    pub fn show_alert(&self, kind: AlertKind, message: impl Into<String>) {
        let generation = self.raise_alert(kind, message);
        let ctx = *self;
        let dismiss_ms = self.config(|c| c.alert_dismiss_ms);
        spawn_local(async move {
            TimeoutFuture::new(dismiss_ms).await;
            ctx.expire_alert(generation);
        });
    }

    /// Put an alert on screen, returning its generation
    fn raise_alert(&self, kind: AlertKind, message: impl Into<String>) -> u64 {
        let generation = self.alert_generation.get_value() + 1;
        self.alert_generation.set_value(generation);
        self.alert.set(Some(AlertMessage::new(kind, message)));
        generation
    }

    /// Timer expiry: clears the banner only if no newer alert replaced it
    fn expire_alert(&self, generation: u64) {
        if self.alert_generation.try_get_value() == Some(generation) {
            self.alert.try_set(None);
        }
    }

    pub fn dismiss_alert(&self) {
        self.alert.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_context(f: impl FnOnce(AppContext)) {
        let owner = Owner::new();
        owner.with(|| {
            let (route, _) = signal(Route::Index);
            f(AppContext::new(route, AppConfig::default()));
        });
    }

    #[test]
    fn test_alert_expires() {
        with_context(|ctx| {
            let generation = ctx.raise_alert(AlertKind::Success, "XSLT file saved successfully!");
            assert_eq!(ctx.alert.get_untracked().map(|a| a.kind), Some(AlertKind::Success));
            ctx.expire_alert(generation);
            assert_eq!(ctx.alert.get_untracked(), None);
        });
    }

    #[test]
    fn test_earlier_timer_keeps_later_alert() {
        with_context(|ctx| {
            let first = ctx.raise_alert(AlertKind::Warning, "Save action canceled.");
            let second = ctx.raise_alert(AlertKind::Error, "Error saving XSLT content.");

            ctx.expire_alert(first);
            let shown = ctx.alert.get_untracked();
            assert_eq!(shown, Some(AlertMessage::new(AlertKind::Error, "Error saving XSLT content.")));

            ctx.expire_alert(second);
            assert_eq!(ctx.alert.get_untracked(), None);
        });
    }

    #[test]
    fn test_dismiss_alert() {
        with_context(|ctx| {
            ctx.raise_alert(AlertKind::Error, "Failed to load profile IDs.");
            ctx.dismiss_alert();
            assert_eq!(ctx.alert.get_untracked(), None);
        });
    }
}
