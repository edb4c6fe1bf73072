//! Application routes
//!
//! `/` is the home editor, `/{lang}-diff` a language landing page and any
//! other single segment a diff identifier. Full share links are accepted too.

use crate::languages::Language;
use code_diff_client::DiffId;
use std::fmt;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Language(Language),
    Diff(DiffId),
}

impl Route {
    /// Parse a path (`/abc123`) or a share link (`https://host/abc123`)
    pub fn parse(input: &str) -> Route {
        let input = input.trim();
        let path = match Url::parse(input) {
            Ok(url) if url.has_host() => url.path().to_string(),
            _ => input.to_string(),
        };

        let segment = path.trim_matches('/');
        if segment.is_empty() {
            return Route::Home;
        }
        if let Some(language) = Language::from_route_slug(segment) {
            return Route::Language(language);
        }
        Route::Diff(DiffId::new(segment))
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Language(language) => format!("/{}", language.route_slug()),
            Route::Diff(id) => format!("/{}", id),
        }
    }

    pub fn diff_id(&self) -> Option<&DiffId> {
        match self {
            Route::Diff(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_home() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("https://diff.example.com/"), Route::Home);
    }

    #[test]
    fn test_parse_language() {
        assert_eq!(Route::parse("/python-diff"), Route::Language(Language::Python));
        assert_eq!(Route::parse("rust-diff/"), Route::Language(Language::Rust));
    }

    #[test]
    fn test_parse_identifier() {
        assert_eq!(Route::parse("/abc123"), Route::Diff(DiffId::new("abc123")));
        assert_eq!(
            Route::parse("http://localhost:3000/abc123"),
            Route::Diff(DiffId::new("abc123"))
        );
        // Unknown language slugs are treated as identifiers
        assert_eq!(
            Route::parse("/cobol-diff"),
            Route::Diff(DiffId::new("cobol-diff"))
        );
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Home,
            Route::Language(Language::Go),
            Route::Diff(DiffId::new("xyz")),
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
