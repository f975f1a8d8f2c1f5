//! Query builder for list endpoints
//!
//! Collects `key=value` pairs and drops every field left empty, so an
//! unfiltered request carries no query string at all.

/// Builder for GET query parameters
#[derive(Debug, Default, Clone)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter unconditionally
    pub fn push(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.to_string(), value.into()));
        self
    }

    /// Add a parameter only when the value is non-blank
    pub fn push_non_empty(&mut self, key: &str, value: &str) -> &mut Self {
        let value = value.trim();
        if !value.is_empty() {
            self.push(key, value);
        }
        self
    }

    pub fn build(self) -> Vec<(String, String)> {
        self.pairs
    }
}
