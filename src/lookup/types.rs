//! Upstream payload shape, projection and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three-field result returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    pub name: String,
    pub id: u64,
    /// Artwork URL, owned by the upstream. `null` when the upstream has none.
    pub image: Option<String>,
}

/// The subset of the upstream document the projection depends on.
///
/// Anything else in the payload is ignored; any of these fields missing is a
/// decode error.
#[derive(Debug, Deserialize)]
pub struct UpstreamRecord {
    pub name: String,
    pub id: u64,
    pub sprites: Sprites,
}

#[derive(Debug, Deserialize)]
pub struct Sprites {
    pub other: OtherSprites,
}

#[derive(Debug, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Artwork,
}

#[derive(Debug, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

impl From<UpstreamRecord> for Projection {
    fn from(record: UpstreamRecord) -> Self {
        Self {
            name: record.name,
            id: record.id,
            image: record.sprites.other.official_artwork.front_default,
        }
    }
}

/// Errors that can occur while looking up an identifier.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    NotFound(u16),

    /// Connection, TLS or body transfer failure.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not JSON or lacked a required field.
    #[error("malformed upstream payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LookupError {
    /// Short label used for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            LookupError::NotFound(_) => "not_found",
            LookupError::Transport(_) | LookupError::Decode(_) => "server_error",
        }
    }
}

/// Errors building an [`UpstreamClient`](super::UpstreamClient).
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid upstream base URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("upstream base URL `{0}` cannot take path segments")]
    NotABase(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU: &str = r#"{
        "name": "pikachu",
        "id": 25,
        "height": 4,
        "sprites": {
            "front_default": "https://x/sprite.png",
            "other": {
                "official-artwork": { "front_default": "https://x/25.png", "front_shiny": null }
            }
        }
    }"#;

    #[test]
    fn test_projection_from_upstream() {
        let record: UpstreamRecord = serde_json::from_str(PIKACHU).unwrap();
        let projection = Projection::from(record);
        assert_eq!(
            projection,
            Projection {
                name: "pikachu".into(),
                id: 25,
                image: Some("https://x/25.png".into()),
            }
        );
    }

    #[test]
    fn test_projection_serializes_three_fields() {
        let projection = Projection {
            name: "pikachu".into(),
            id: 25,
            image: Some("https://x/25.png".into()),
        };
        assert_eq!(
            serde_json::to_value(&projection).unwrap(),
            serde_json::json!({"name": "pikachu", "id": 25, "image": "https://x/25.png"})
        );
    }

    #[test]
    fn test_null_artwork_passes_through() {
        let body = r#"{"name":"missingno","id":0,"sprites":{"other":{"official-artwork":{"front_default":null}}}}"#;
        let record: UpstreamRecord = serde_json::from_str(body).unwrap();
        assert_eq!(Projection::from(record).image, None);
    }

    #[test]
    fn test_missing_nested_field_is_decode_error() {
        let body = r#"{"name":"pikachu","id":25,"sprites":{"other":{}}}"#;
        let err: LookupError = serde_json::from_str::<UpstreamRecord>(body).unwrap_err().into();
        assert!(matches!(err, LookupError::Decode(_)));
        assert!(err.to_string().contains("official-artwork"));
        assert_eq!(err.outcome(), "server_error");
    }

    #[test]
    fn test_non_numeric_id_is_decode_error() {
        let body = r#"{"name":"pikachu","id":"25","sprites":{"other":{"official-artwork":{"front_default":"u"}}}}"#;
        assert!(serde_json::from_str::<UpstreamRecord>(body).is_err());
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(LookupError::NotFound(404).outcome(), "not_found");
        assert_eq!(LookupError::NotFound(503).outcome(), "not_found");
    }
}
