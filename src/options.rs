//! Profile ID Options
//!
//! The profile-list endpoints answer with a fragment of `<option>` tags.

use scraper::{Html, Selector};
use std::sync::OnceLock;

fn option_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("option").expect("valid option selector"))
}

/// Extract option values in document order.
///
/// An option without a `value` attribute contributes its trimmed text.
pub fn parse_option_values(html: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);
    fragment
        .select(option_selector())
        .map(|option| match option.value().attr("value") {
            Some(value) => value.to_string(),
            None => option.text().collect::<String>().trim().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_in_document_order() {
        let html = r#"<option value="P-003">Three</option><option value="P-001">One</option>"#;
        assert_eq!(parse_option_values(html), vec!["P-003", "P-001"]);
    }

    #[test]
    fn test_inside_select() {
        let html = r#"<select id="profileID"><option value="a">A</option><option value="b">B</option></select>"#;
        assert_eq!(parse_option_values(html), vec!["a", "b"]);
    }

    #[test]
    fn test_missing_value_uses_text() {
        let html = "<option>  P-9  </option><option value=\"\">blank</option>";
        assert_eq!(parse_option_values(html), vec!["P-9", ""]);
    }

    #[test]
    fn test_entities_are_decoded() {
        let html = r#"<option value="A&amp;B">A&amp;B</option>"#;
        assert_eq!(parse_option_values(html), vec!["A&B"]);
    }

    #[test]
    fn test_no_options() {
        assert!(parse_option_values("").is_empty());
        assert!(parse_option_values("<p>No profiles found</p>").is_empty());
    }
}
