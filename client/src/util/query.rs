//! Query-string assembly for list and lookup endpoints.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Ordered `key=value` pairs, percent-encoded on output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_owned(), value.to_string()));
        self
    }

    /// Add the pair only when `value` is non-empty after trimming.
    #[must_use]
    pub fn with_nonempty(self, key: &str, value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() { self } else { self.with(key, value) }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `path?query`, or just `path` when there are no pairs.
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_owned()
        } else {
            format!("{path}?{}", self.encode())
        }
    }
}
