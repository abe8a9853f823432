//! Outbound client for the upstream REST API.

use std::time::Duration;

use url::Url;

use crate::config::UpstreamConfig;
use crate::lookup::types::{LookupError, LookupResult, Projection, SetupError, UpstreamRecord};

/// Lowercase an identifier. The only transformation applied to caller input.
pub fn normalize(identifier: &str) -> String {
    identifier.to_lowercase()
}

/// Client that resolves identifiers against the configured upstream.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base: Url,
}

impl UpstreamClient {
    /// Build a client from configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, SetupError> {
        let base = Url::parse(&config.base_url)?;
        if base.cannot_be_a_base() {
            return Err(SetupError::NotABase(config.base_url.clone()));
        }

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            http: builder.build()?,
            base,
        })
    }

    /// URL for `identifier`: the normalized value appended to the base as a
    /// single percent-encoded path segment.
    pub fn endpoint(&self, identifier: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&normalize(identifier));
        }
        url
    }

    /// Fetch `identifier` and reduce the upstream document to a [`Projection`].
    pub async fn fetch(&self, identifier: &str) -> LookupResult<Projection> {
        if identifier.is_empty() {
            return Err(LookupError::NotFound(404));
        }

        let url = self.endpoint(identifier);
        tracing::debug!(url = %url, "Fetching upstream record");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = %status, "Upstream reported failure");
            return Err(LookupError::NotFound(status.as_u16()));
        }

        let body = response.bytes().await?;
        let record: UpstreamRecord = serde_json::from_slice(&body)?;

        Ok(record.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> UpstreamClient {
        UpstreamClient::new(&UpstreamConfig {
            base_url: base.to_string(),
            use_system_proxy: false,
            ..UpstreamConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_normalize_lowercases_only() {
        assert_eq!(normalize("Pikachu"), "pikachu");
        assert_eq!(normalize("MR-MIME "), "mr-mime ");
        assert_eq!(normalize("ÉVOLI"), "évoli");
    }

    #[test]
    fn test_endpoint_appends_segment() {
        let c = client("https://pokeapi.co/api/v2/pokemon");
        assert_eq!(
            c.endpoint("Pikachu").as_str(),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
    }

    #[test]
    fn test_endpoint_with_trailing_slash() {
        let c = client("http://127.0.0.1:8080/api/");
        assert_eq!(c.endpoint("Ditto").as_str(), "http://127.0.0.1:8080/api/ditto");
    }

    #[test]
    fn test_endpoint_encodes_reserved_characters() {
        let c = client("http://upstream/api");
        assert_eq!(
            c.endpoint("a/b?c#d").as_str(),
            "http://upstream/api/a%2Fb%3Fc%23d"
        );
    }

    #[test]
    fn test_rejects_non_base_url() {
        let err = UpstreamClient::new(&UpstreamConfig {
            base_url: "mailto:someone@example.com".into(),
            ..UpstreamConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, SetupError::NotABase(_)));
    }

    #[tokio::test]
    async fn test_empty_identifier_is_not_found_without_request() {
        // Port 9 (discard) is never contacted.
        let c = client("http://127.0.0.1:9/api");
        let err = c.fetch("").await.unwrap_err();
        assert!(matches!(err, LookupError::NotFound(404)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let c = client(&format!("http://{}/api", addr));
        let err = c.fetch("pikachu").await.unwrap_err();
        assert!(matches!(err, LookupError::Transport(_)));
        assert_eq!(err.outcome(), "server_error");
    }
}
