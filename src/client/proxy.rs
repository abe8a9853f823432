//! HTTP client for the lookup endpoint.

use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::client::view::ResultView;
use crate::http::ErrorBody;
use crate::lookup::Projection;

/// Errors surfaced to the user by the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The proxy answered with an error envelope; displays its message verbatim.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid proxy URL `{0}`")]
    InvalidUrl(String),
}

/// Client bound to one proxy base URL.
pub struct LookupClient {
    client: Client,
    base: Url,
}

impl LookupClient {
    pub fn new(proxy_url: &str) -> Result<Self, ClientError> {
        Self::with_client(proxy_url, Client::new())
    }

    /// Use a preconfigured `reqwest::Client`.
    pub fn with_client(proxy_url: &str, client: Client) -> Result<Self, ClientError> {
        let base = Url::parse(proxy_url).map_err(|_| ClientError::InvalidUrl(proxy_url.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(proxy_url.to_string()));
        }

        Ok(Self {
            client,
            base,
        })
    }

    /// `{proxy}/lookup/{value}` with `value` encoded as one path segment.
    pub fn lookup_url(&self, value: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("lookup").push(value);
        }
        url
    }

    /// Look `value` up through the proxy.
    pub async fn lookup(&self, value: &str) -> Result<Projection, ClientError> {
        let resp = self.client.get(self.lookup_url(value)).send().await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            let body: ErrorBody = serde_json::from_str(&text)?;
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: body.error,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Full page flow: reset the view, look up, render the outcome.
    pub async fn search(&self, value: &str, view: &mut ResultView) {
        view.begin();
        let outcome = self.lookup(value).await;
        view.render(&outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_url_encodes_value() {
        let client = LookupClient::new("http://localhost:3000").unwrap();
        assert_eq!(
            client.lookup_url("Mr. Mime").as_str(),
            "http://localhost:3000/lookup/Mr.%20Mime"
        );
        assert_eq!(
            client.lookup_url("a/b").as_str(),
            "http://localhost:3000/lookup/a%2Fb"
        );
    }

    #[test]
    fn test_lookup_url_keeps_base_path() {
        let client = LookupClient::new("http://proxy.local/api/").unwrap();
        assert_eq!(
            client.lookup_url("pikachu").as_str(),
            "http://proxy.local/api/lookup/pikachu"
        );
    }

    #[test]
    fn test_invalid_proxy_url() {
        assert!(matches!(
            LookupClient::new("localhost"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_server_error_displays_message_only() {
        let err = ClientError::Server {
            status: 404,
            message: "not found".into(),
        };
        assert_eq!(err.to_string(), "not found");
    }
}
