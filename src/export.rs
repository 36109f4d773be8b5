//! Report Export
//!
//! Saves an Excel payload through a temporary download link.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const EXCEL_MIME: &str = "application/vnd.ms-excel;charset=utf-8;";

/// Delay before the temporary link and object URL are released
const LINK_CLEANUP_MS: u32 = 100;

pub fn report_file_name(profile_id: &str) -> String {
    format!("Report_{}.xls", profile_id)
}

/// Trigger a browser download of `payload` as `Report_{profile_id}.xls`
pub fn download_report(profile_id: &str, payload: &[u8]) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no body")?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(payload));
    let options = BlobPropertyBag::new();
    options.set_type(EXCEL_MIME);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("{:?}", e))?;
    let href = Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))?;

    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into()
        .map_err(|_| "anchor cast failed".to_string())?;
    link.set_href(&href);
    link.set_download(&report_file_name(profile_id));

    body.append_child(&link).map_err(|e| format!("{:?}", e))?;
    link.click();

    spawn_local(async move {
        TimeoutFuture::new(LINK_CLEANUP_MS).await;
        link.remove();
        if let Err(e) = Url::revoke_object_url(&href) {
            log::warn!("[EXPORT] revoke object URL failed: {:?}", e);
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_file_name() {
        assert_eq!(report_file_name("P-0042"), "Report_P-0042.xls");
        assert_eq!(report_file_name(""), "Report_.xls");
    }
}
