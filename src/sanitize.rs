//! HTML Fragment Cleaning
//!
//! Report sections arrive pre-rendered with inline click handlers and
//! hidden bodies. The page drives collapsing itself, so both are stripped
//! before the fragment is injected.

use regex::Regex;
use std::sync::OnceLock;

fn onclick_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"onclick="[^"]*""#).expect("valid onclick regex"))
}

fn display_none_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)style="display:\s*none;?""#).expect("valid display regex"))
}

/// Strip `onclick="..."` attributes and `style="display:none"` from a fragment
pub fn clean_fragment(html: &str) -> String {
    let without_handlers = onclick_regex().replace_all(html, "");
    display_none_regex().replace_all(&without_handlers, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_onclick() {
        let html = r#"<button class="collapsible" onclick="toggle(this)">Allergy</button>"#;
        assert_eq!(clean_fragment(html), r#"<button class="collapsible" >Allergy</button>"#);
    }

    #[test]
    fn test_strips_every_onclick() {
        let html = r#"<a onclick="a()">x</a><a onclick="">y</a>"#;
        assert_eq!(clean_fragment(html), "<a >x</a><a >y</a>");
    }

    #[test]
    fn test_strips_display_none_variants() {
        assert_eq!(clean_fragment(r#"<div style="display:none">"#), "<div >");
        assert_eq!(clean_fragment(r#"<div style="display: none;">"#), "<div >");
        assert_eq!(clean_fragment(r#"<div STYLE="Display:  NONE">"#), "<div >");
    }

    #[test]
    fn test_keeps_other_styles_and_attributes() {
        let html = r#"<div class="content" style="display: block;"><td style="color: red">1</td></div>"#;
        assert_eq!(clean_fragment(html), html);
        // Combined declarations are not a bare display-none style
        let combined = r#"<div style="display:none; color: red">"#;
        assert_eq!(clean_fragment(combined), combined);
    }

    #[test]
    fn test_full_section() {
        let html = concat!(
            r#"<button type="button" class="collapsible" onclick="this.classList.toggle('active')">Vitals</button>"#,
            r#"<div class="content" style="display:none;"><table><tr><td>BP</td></tr></table></div>"#,
        );
        let cleaned = clean_fragment(html);
        assert!(!cleaned.contains("onclick"));
        assert!(!cleaned.contains("display:none"));
        assert!(cleaned.contains(r#"<div class="content" ><table>"#));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_fragment(""), "");
    }
}
