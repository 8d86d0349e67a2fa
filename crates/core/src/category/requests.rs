//! API request payloads for category operations.

use serde::{Deserialize, Serialize};

/// Request payload for creating a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateCategoryRequest {
    /// Create a new request with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Set the category description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for replacing a category.
///
/// Updates are full replacements: an omitted description clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateCategoryRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_description_is_optional() {
        let request: CreateCategoryRequest = serde_json::from_str(r#"{"name":"Books"}"#).unwrap();
        assert_eq!(request, CreateCategoryRequest::new("Books"));

        let request: CreateCategoryRequest =
            serde_json::from_str(r#"{"name":"Books","description":"Paper"}"#).unwrap();
        assert_eq!(
            request,
            CreateCategoryRequest::new("Books").with_description("Paper")
        );
    }

    #[test]
    fn test_update_request_skips_missing_description() {
        let json = serde_json::to_string(&UpdateCategoryRequest::new("Books")).unwrap();
        assert_eq!(json, r#"{"name":"Books"}"#);
    }
}
