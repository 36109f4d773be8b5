//! Hash Routing
//!
//! Pages live behind the URL fragment: `#/`, `#/reports?profileID=..`,
//! `#/settings`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Index,
    Reports { profile_id: Option<String> },
    Settings,
}

impl Route {
    /// Parse `location.hash` (with or without the leading `#`)
    pub fn parse(hash: &str) -> Route {
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        let (path, query) = match hash.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (hash, None),
        };

        match path.trim_matches('/') {
            "reports" => Route::Reports {
                profile_id: query
                    .and_then(|q| query_param(q, "profileID"))
                    .filter(|id| !id.is_empty()),
            },
            "settings" => Route::Settings,
            _ => Route::Index,
        }
    }

    /// Fragment to navigate to this route
    pub fn href(&self) -> String {
        match self {
            Route::Index => "#/".to_string(),
            Route::Reports { profile_id: None } => "#/reports".to_string(),
            Route::Reports { profile_id: Some(id) } => {
                format!("#/reports?profileID={}", utf8_percent_encode(id, NON_ALPHANUMERIC))
            }
            Route::Settings => "#/settings".to_string(),
        }
    }

    /// Query-less name, used for nav highlighting
    pub fn name(&self) -> &'static str {
        match self {
            Route::Index => "index",
            Route::Reports { .. } => "reports",
            Route::Settings => "settings",
        }
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            percent_decode_str(&value).decode_utf8_lossy().into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        assert_eq!(Route::parse(""), Route::Index);
        assert_eq!(Route::parse("#"), Route::Index);
        assert_eq!(Route::parse("#/"), Route::Index);
        assert_eq!(Route::parse("#/index"), Route::Index);
        assert_eq!(Route::parse("#/nowhere"), Route::Index);
    }

    #[test]
    fn test_parse_reports() {
        assert_eq!(Route::parse("#/reports"), Route::Reports { profile_id: None });
        assert_eq!(
            Route::parse("#/reports?profileID=abc"),
            Route::Reports { profile_id: Some("abc".to_string()) }
        );
        assert_eq!(
            Route::parse("#/reports/?foo=1&profileID=P%2012"),
            Route::Reports { profile_id: Some("P 12".to_string()) }
        );
        assert_eq!(Route::parse("#/reports?profileID="), Route::Reports { profile_id: None });
        assert_eq!(Route::parse("#/reports?profileID"), Route::Reports { profile_id: None });
    }

    #[test]
    fn test_plus_decodes_as_space() {
        assert_eq!(
            Route::parse("#/reports?profileID=a+b"),
            Route::Reports { profile_id: Some("a b".to_string()) }
        );
        assert_eq!(
            Route::parse("#/reports?profileID=a%2Bb"),
            Route::Reports { profile_id: Some("a+b".to_string()) }
        );
    }

    #[test]
    fn test_parse_settings() {
        assert_eq!(Route::parse("#/settings"), Route::Settings);
        assert_eq!(Route::parse("/settings"), Route::Settings);
    }

    #[test]
    fn test_href_parses_back() {
        let routes = [
            Route::Index,
            Route::Settings,
            Route::Reports { profile_id: None },
            Route::Reports { profile_id: Some("P/1 & 2".to_string()) },
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.href()), route);
        }
    }
}
