use serde::{Deserialize, Serialize};

/// A single entry in the course catalog
///
/// Every field is free-form text. `code` is the lookup key but is not
/// validated or checked for uniqueness; duplicate codes are allowed and
/// lookups resolve to the first match in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub coursename: String,
    pub instructor: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub classroom: String,
    #[serde(default)]
    pub prerequisites: String,
    #[serde(default)]
    pub grading: String,
    #[serde(default)]
    pub description: String,
}

impl Course {
    /// Returns the names of required fields that are empty after trimming
    /// whitespace. An empty result means the record passes validation.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        [
            ("coursename", self.coursename.as_str()),
            ("instructor", self.instructor.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}
