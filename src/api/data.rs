//! Data Maintenance Endpoints

use super::{endpoint, request_text, ApiError, Method};

/// Delete everything stored for one profile. Returns the server's message.
pub async fn delete_data_by_profile(base: &str, profile_id: &str) -> Result<String, ApiError> {
    let url = endpoint(base, "deleteDataByProfile", &[("profileID", profile_id)]);
    request_text(Method::Delete, &url, None).await
}

pub async fn delete_all_data(base: &str) -> Result<String, ApiError> {
    request_text(Method::Delete, &endpoint(base, "deleteAllData", &[]), None).await
}
