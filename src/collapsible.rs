//! Collapsible Report Blocks
//!
//! Report fragments mark toggles with `class="collapsible"` and put the
//! body in the following sibling. Their own `onclick` handlers are stripped,
//! so the reports page handles the toggle with one delegated listener.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub const COLLAPSIBLE_CLASS: &str = "collapsible";
pub const ACTIVE_CLASS: &str = "active";

/// `display` value for the body once the toggle was clicked
pub fn body_display(was_active: bool) -> &'static str {
    if was_active {
        "none"
    } else {
        "block"
    }
}

/// Delegated click handler: toggle the clicked block, if it is one
pub fn handle_click(ev: &web_sys::Event) {
    let Some(target) = ev.target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) else {
        return;
    };
    let classes = target.class_list();
    if !classes.contains(COLLAPSIBLE_CLASS) {
        return;
    }
    let Some(content) = target
        .next_element_sibling()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let was_active = classes.contains(ACTIVE_CLASS);
    if let Err(e) = classes.toggle_with_force(ACTIVE_CLASS, !was_active) {
        log::warn!("[REPORTS] toggle class failed: {:?}", e);
        return;
    }
    if let Err(e) = content.style().set_property("display", body_display(was_active)) {
        log::warn!("[REPORTS] set display failed: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_display() {
        assert_eq!(body_display(false), "block");
        assert_eq!(body_display(true), "none");
    }
}
