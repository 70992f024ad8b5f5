use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record type served by one collection endpoint of the API
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Path segment of the collection, relative to the API base
    const COLLECTION: &'static str;

    /// Identifier field used in item URLs and row ids
    fn key(&self) -> &str;

    /// The two values shown in a table row
    fn cells(&self) -> [&str; 2];
}

/// Artist record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    pub unique_name: String,
}

impl Artist {
    pub fn new(name: impl Into<String>, unique_name: impl Into<String>) -> Self {
        Artist {
            name: name.into(),
            unique_name: unique_name.into(),
        }
    }
}

impl Resource for Artist {
    const COLLECTION: &'static str = "artists";

    fn key(&self) -> &str {
        &self.unique_name
    }

    fn cells(&self) -> [&str; 2] {
        [&self.unique_name, &self.name]
    }
}

/// Choreography record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choreography {
    pub name: String,
    pub description: String,
}

impl Choreography {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Choreography {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Resource for Choreography {
    const COLLECTION: &'static str = "choreographies";

    fn key(&self) -> &str {
        &self.name
    }

    fn cells(&self) -> [&str; 2] {
        [&self.name, &self.description]
    }
}

/// Body of a collection GET. Hypermedia controls next to `items` are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct ItemList<R> {
    pub items: Vec<R>,
}

/// Mason error object as emitted by the server
#[derive(Debug, Deserialize)]
struct MasonError {
    #[serde(rename = "@message")]
    message: Option<String>,
    #[serde(rename = "@messages", default)]
    messages: Vec<Option<String>>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    #[serde(rename = "@error")]
    error: Option<MasonError>,
}

/// Extract the human readable message from an error response body.
///
/// A plain `{"message": ...}` wins. Otherwise a Mason `@error` object yields
/// its first non-empty detail, falling back to its title. Returns `None` when
/// the body is not JSON or carries neither.
pub fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;

    if let Some(message) = parsed.message {
        return Some(message);
    }

    let mason = parsed.error?;
    mason
        .messages
        .into_iter()
        .flatten()
        .find(|m| !m.is_empty())
        .or(mason.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_message() {
        let body = r#"{"message":"duplicate unique_name"}"#;
        assert_eq!(error_message(body).as_deref(), Some("duplicate unique_name"));
    }

    #[test]
    fn test_mason_error_prefers_details() {
        let body = r#"{
            "resource_url": "/api/artists/A1/",
            "@error": {
                "@message": "Already exists",
                "@messages": ["Artist with name 'u2' already exists."]
            },
            "@controls": {"profile": {"href": "/profiles/error/"}}
        }"#;
        assert_eq!(
            error_message(body).as_deref(),
            Some("Artist with name 'u2' already exists.")
        );
    }

    #[test]
    fn test_mason_error_null_details_falls_back_to_title() {
        let body = r#"{"@error": {"@message": "Not found", "@messages": [null]}}"#;
        assert_eq!(error_message(body).as_deref(), Some("Not found"));
    }

    #[test]
    fn test_malformed_body() {
        assert_eq!(error_message("<h1>Internal Server Error</h1>"), None);
        assert_eq!(error_message(r#"{"detail":"nope"}"#), None);
    }

    #[test]
    fn test_item_list_ignores_controls() {
        let body = r#"{
            "@namespaces": {"stadium": {"name": "/instadium/link-relations/"}},
            "items": [
                {"name": "salo", "unique_name": "Ramzi", "@controls": {"self": {"href": "/api/artists/Ramzi/"}}}
            ]
        }"#;
        let list: ItemList<Artist> = serde_json::from_str(body).unwrap();
        assert_eq!(list.items, vec![Artist::new("salo", "Ramzi")]);
    }

    #[test]
    fn test_artist_body_shape() {
        let value = serde_json::to_value(Artist::new("A2", "u\"2")).unwrap();
        assert_eq!(value, serde_json::json!({"name": "A2", "unique_name": "u\"2"}));
    }
}
