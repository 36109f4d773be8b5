//! Report Endpoints
//!
//! Profile listings, per-section report fragments and the Excel export.

use crate::sections::SectionKey;
use super::{endpoint, read_bytes, request_text, send, ApiError, Method};

pub async fn get_hello(base: &str) -> Result<String, ApiError> {
    request_text(Method::Get, &endpoint(base, "hello", &[]), None).await
}

/// `<option>` list of every profile ID known to the backend
pub async fn get_distinct_profile_ids(base: &str) -> Result<String, ApiError> {
    request_text(Method::Get, &endpoint(base, "getDistinctProfileIDs", &[]), None).await
}

/// `<option>` list of profile IDs that have report data
pub async fn get_distinct_report_profile_ids(base: &str) -> Result<String, ApiError> {
    request_text(Method::Get, &endpoint(base, "getDistinctReportProfileIDs", &[]), None).await
}

/// Pre-rendered HTML for one report section
pub async fn get_qs(base: &str, section: SectionKey, profile_id: &str) -> Result<String, ApiError> {
    let url = endpoint(base, "getQS", &[("section", section.key()), ("profileID", profile_id)]);
    request_text(Method::Get, &url, None).await
}

/// Raw `.xls` payload for a profile
pub async fn generate_excel_report(base: &str, profile_id: &str) -> Result<Vec<u8>, ApiError> {
    let url = endpoint(base, "generateExcelReport", &[("profileID", profile_id)]);
    let response = send(Method::Get, &url, None).await?;
    read_bytes(&response).await
}
