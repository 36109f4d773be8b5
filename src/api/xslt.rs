//! XSLT Endpoints
//!
//! Settings-page bindings: the profile dropdown and the editable XSLT block.

use super::{endpoint, request_text, ApiError, Method};

/// `<option>` list for the settings dropdown
pub async fn populate_profile_ids(base: &str) -> Result<String, ApiError> {
    request_text(Method::Get, &endpoint(base, "populateProfileIDs", &[]), None).await
}

pub async fn get_xslt_content(base: &str, block: &str) -> Result<String, ApiError> {
    request_text(Method::Get, &endpoint(base, "getXSLTContent", &[("block", block)]), None).await
}

/// Overwrite the stored XSLT for `block`
pub async fn save_xslt_content(base: &str, block: &str, content: &str) -> Result<String, ApiError> {
    let url = endpoint(base, "saveXSLTContent", &[("block", block)]);
    request_text(Method::Post, &url, Some(content)).await
}

/// Run `block` against sample CCD data; returns the transformed output
pub async fn apply_xslt(base: &str, sample_data: &str, block: &str) -> Result<String, ApiError> {
    let url = endpoint(base, "applyXSLT", &[("block", block)]);
    request_text(Method::Post, &url, Some(sample_data)).await
}
