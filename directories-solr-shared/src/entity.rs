//! Directory entity types as exported by the CMS.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Literal the CMS stores for an unanswered attribute.
const NULL_LITERAL: &str = "null";

/// A directory entity (one directory/form submission) with its responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntity {
    /// The entity's identifier.
    pub id: i32,
    /// Display title.
    pub title: String,
    /// Creation timestamp.
    pub creation: DateTime<Utc>,
    /// Answered attributes, in attribute order.
    #[serde(default)]
    pub responses: Vec<Response>,
}

impl DirectoryEntity {
    /// Create an entity without responses.
    pub fn new(id: i32, title: impl Into<String>, creation: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            creation,
            responses: Vec::new(),
        }
    }

    /// Append a response.
    pub fn with_response(mut self, response: Response) -> Self {
        self.responses.push(response);
        self
    }
}

/// Reference to the attribute definition a response answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id_entry: i32,
}

/// One answered attribute of a directory entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Raw value; may be missing or the literal `"null"`.
    #[serde(default)]
    pub value: Option<String>,
    pub entry: Entry,
}

impl Response {
    pub fn new(id_entry: i32, value: Option<String>) -> Self {
        Self {
            value,
            entry: Entry { id_entry },
        }
    }

    /// The value, unless it is missing or the `"null"` literal.
    pub fn present_value(&self) -> Option<&str> {
        match self.value.as_deref() {
            Some(NULL_LITERAL) | None => None,
            Some(v) => Some(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_value_filters_null_literal() {
        assert_eq!(Response::new(1, None).present_value(), None);
        assert_eq!(
            Response::new(1, Some("null".to_string())).present_value(),
            None
        );
        assert_eq!(
            Response::new(1, Some("NULL".to_string())).present_value(),
            Some("NULL")
        );
        assert_eq!(
            Response::new(1, Some("Paris".to_string())).present_value(),
            Some("Paris")
        );
    }

    #[test]
    fn test_deserialize_entity() {
        let json = r#"{
            "id": 7,
            "title": "Library",
            "creation": "2021-03-05T10:00:00Z",
            "responses": [
                { "value": "<p>Open</p>", "entry": { "id_entry": 3 } },
                { "entry": { "id_entry": 4 } }
            ]
        }"#;

        let entity: DirectoryEntity = serde_json::from_str(json).unwrap();

        assert_eq!(entity.id, 7);
        assert_eq!(entity.responses.len(), 2);
        assert_eq!(entity.responses[0].present_value(), Some("<p>Open</p>"));
        assert!(entity.responses[1].value.is_none());
    }
}
