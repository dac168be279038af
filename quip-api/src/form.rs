//! Form field encoding for POST requests.
//!
//! The platform takes every POST as a flat set of string fields. Lists of
//! ids travel as one comma-joined value, and optional values that are not
//! set are left out of the body entirely.

use quip_core::constants::ID_SEPARATOR;

/// Join a list of ids into the single comma-separated value the API expects.
///
/// An empty list yields an empty string.
pub fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter()
        .map(|id| id.as_ref())
        .collect::<Vec<_>>()
        .join(ID_SEPARATOR)
}

/// Ordered set of form fields for a POST body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: Vec<(String, String)>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a string field.
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }

    /// Add a field only when a value is present.
    pub fn optional(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.text(name, v),
            None => self,
        }
    }

    /// Add a comma-joined list field. An empty list is sent as an empty value.
    pub fn list<S: AsRef<str>>(self, name: &str, ids: &[S]) -> Self {
        self.text(name, join_ids(ids))
    }

    /// Add an integer field.
    pub fn number(self, name: &str, value: i64) -> Self {
        self.text(name, value.to_string())
    }

    /// Look up the value of a field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The fields in insertion order, ready for url-encoding.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
