//! UI Components
//!
//! Pages and reusable Leptos components.

mod alert_banner;
mod index_page;
mod nav_bar;
mod report_section;
mod reports_page;
mod settings_page;

pub use alert_banner::AlertBanner;
pub use index_page::IndexPage;
pub use nav_bar::NavBar;
pub use report_section::ReportSection;
pub use reports_page::ReportsPage;
pub use settings_page::SettingsPage;
