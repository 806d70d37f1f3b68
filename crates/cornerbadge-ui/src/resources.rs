use std::collections::HashMap;
use std::fmt;

use cornerbadge_style::StyleSheet;

/// Error returned by [`Resources::text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// No string resource with this id.
    NotFound(String),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::NotFound(id) => write!(f, "string resource `{}` not found", id),
        }
    }
}

impl std::error::Error for ResourceError {}

/// String resource table, keyed by id.
///
/// Usually built from the `strings { ... }` blocks of a style file.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    strings: HashMap<String, String>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sheet(sheet: &StyleSheet) -> Self {
        let strings = sheet
            .strings
            .iter()
            .map(|s| (s.name.clone(), s.value.clone()))
            .collect();
        Self { strings }
    }

    /// Adds or replaces a string resource.
    pub fn with_string(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(id.into(), value.into());
        self
    }

    pub fn text(&self, id: &str) -> Result<&str, ResourceError> {
        self.strings
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| ResourceError::NotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
