//! Page location and reset-token extraction.

/// Query prefix carrying the reset token.
const TOKEN_PREFIX: &str = "?token=";

/// The page's current location.
///
/// Only the pieces the flow reads are modeled: the path and the raw query
/// component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Path component.
    pub path: String,
    /// Raw query component, including the leading `?` when present.
    pub search: String,
}

impl Location {
    /// Creates a location with an empty query component.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            search: String::new(),
        }
    }

    /// Sets the raw query component.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Extracts the reset token from the query component.
    ///
    /// The token is everything after the literal `?token=` prefix, taken
    /// as an opaque string. A missing prefix or an empty remainder yields
    /// `None`.
    #[must_use]
    pub fn reset_token(&self) -> Option<String> {
        match self.search.strip_prefix(TOKEN_PREFIX) {
            Some(token) if !token.is_empty() => Some(token.to_string()),
            _ => None,
        }
    }
}
