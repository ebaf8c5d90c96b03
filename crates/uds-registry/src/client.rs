//! HTTP client for the registry's catalog and metadata endpoints.
//!
//! Two endpoints, both JSON: the full catalog, and per-package tag metadata.
//! Every call is a single attempt bounded by the configured timeout; there
//! are no retries and no response caching.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, COOKIE};
use serde::de::DeserializeOwned;

use crate::catalog::Catalog;
use crate::config::{RegistryConfig, SESSION_COOKIE};
use crate::error::RegistryError;
use crate::metadata::PackageMetadata;

/// Client for the UDS registry HTTP API.
#[derive(Debug)]
pub struct RegistryClient {
    config: RegistryConfig,
    headers: HeaderMap,
    http: reqwest::Client,
}

impl RegistryClient {
    /// Creates a client from the given configuration.
    ///
    /// The effective base URL is validated up front, and the session cookie
    /// (when configured) is folded into the request headers once.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidUrl`] when the base URL does not
    /// parse, [`RegistryError::InvalidSessionCookie`] when the cookie value
    /// cannot be carried in a header, or a network error if the underlying
    /// HTTP client cannot be constructed.
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        let base = config.base_url();
        url::Url::parse(base).map_err(|_| RegistryError::InvalidUrl {
            url: base.to_string(),
        })?;

        let headers = Self::build_headers(&config)?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            config,
            headers,
            http,
        })
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Fetches the full catalog.
    ///
    /// # Errors
    ///
    /// Fails with [`RegistryError::Timeout`] when the request exceeds the
    /// configured timeout, [`RegistryError::HttpStatus`] on a non-success
    /// status, [`RegistryError::Parse`] on a malformed body, and
    /// [`RegistryError::Network`] for connection failures.
    pub async fn fetch_catalog(&self) -> Result<Catalog, RegistryError> {
        let url = format!("{}/uds/catalog", self.config.base_url());
        self.get_json(&url).await
    }

    /// Fetches tag metadata for one package.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::fetch_catalog`].
    pub async fn fetch_package_metadata(
        &self,
        org: &str,
        package: &str,
    ) -> Result<PackageMetadata, RegistryError> {
        let url = format!("{}/uds/metadata/{org}/{package}", self.config.base_url());
        self.get_json(&url).await
    }

    /// Issues one GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RegistryError> {
        tracing::debug!(url, "Fetching from registry");

        let response = self
            .http
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| RegistryError::Parse { source })
    }

    /// Headers attached to every request.
    fn build_headers(config: &RegistryConfig) -> Result<HeaderMap, RegistryError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(cookie) = config.session_cookie.as_deref().filter(|c| !c.is_empty()) {
            let value = HeaderValue::from_str(&format!("{SESSION_COOKIE}={cookie}"))
                .map_err(|_| RegistryError::InvalidSessionCookie)?;
            headers.insert(COOKIE, value);
        }

        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serves exactly one connection with a canned response and hands back
    /// the raw request bytes for inspection.
    async fn spawn_server(response: String) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = vec![0_u8; 8192];
            let n = stream.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            let _ = tx.send(request);
        });

        (format!("http://{addr}"), rx)
    }

    fn json_response(body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    fn client_for(base: &str) -> RegistryClient {
        let config = RegistryConfig::new().with_registry_url(base);
        RegistryClient::new(config).unwrap()
    }

    #[test]
    fn test_invalid_url_is_rejected_up_front() {
        let config = RegistryConfig::new().with_registry_url("not a url");
        let err = RegistryClient::new(config).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidUrl { .. }));
    }

    #[test]
    fn test_invalid_cookie_is_rejected_up_front() {
        let config = RegistryConfig::new().with_session_cookie("bad\nvalue");
        let err = RegistryClient::new(config).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidSessionCookie));
    }

    #[tokio::test]
    async fn test_fetch_catalog_parses_response() {
        let body = r#"{
            "authenticated": true,
            "catalog": {
                "acme": {
                    "org": "acme",
                    "repos": [{
                        "repo": "widget",
                        "title": "Widget",
                        "description": "A widget",
                        "architectures": ["amd64"],
                        "latest_tag": "1.0.0"
                    }]
                }
            }
        }"#;
        let (base, request) = spawn_server(json_response(body)).await;

        let catalog = client_for(&base).fetch_catalog().await.unwrap();
        assert!(catalog.authenticated);
        assert_eq!(catalog.catalog["acme"].repos[0].repo, "widget");

        let request = request.await.unwrap();
        assert!(request.starts_with("GET /uds/catalog HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_metadata_request_path_and_headers() {
        let (base, request) = spawn_server(json_response(r#"{"tags": []}"#)).await;

        let config = RegistryConfig::new()
            .with_registry_url(&base)
            .with_session_cookie("secret");
        let client = RegistryClient::new(config).unwrap();

        let metadata = client.fetch_package_metadata("acme", "widget").await.unwrap();
        assert!(metadata.tags.is_empty());

        let request = request.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /uds/metadata/acme/widget http/1.1"));
        assert!(request.contains("content-type: application/json"));
        assert!(request.contains("cookie: uds_session=secret"));
    }

    #[tokio::test]
    async fn test_no_cookie_header_without_session_cookie() {
        let (base, request) = spawn_server(json_response(r#"{"tags": []}"#)).await;

        client_for(&base)
            .fetch_package_metadata("acme", "widget")
            .await
            .unwrap();

        let request = request.await.unwrap().to_lowercase();
        assert!(!request.contains("cookie:"));
    }

    #[tokio::test]
    async fn test_non_success_status_carries_code() {
        let response =
            "HTTP/1.1 503 Service Unavailable\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
                .to_string();
        let (base, _request) = spawn_server(response).await;

        let err = client_for(&base).fetch_catalog().await.unwrap_err();
        assert!(matches!(err, RegistryError::HttpStatus { status: 503 }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_parse_error() {
        let (base, _request) = spawn_server(json_response("not json at all")).await;

        let err = client_for(&base).fetch_catalog().await.unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_timeout_is_distinguished_from_network_error() {
        // Accept the connection, then never answer.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = vec![0_u8; 1024];
            let _ = stream.read(&mut buf).await;
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let config = RegistryConfig::new()
            .with_registry_url(format!("http://{addr}"))
            .with_timeout(Duration::from_millis(200));
        let client = RegistryClient::new(config).unwrap();

        let err = client.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, RegistryError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_a_network_error() {
        // Bind then drop to get a port nothing is listening on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{addr}"));
        let err = client.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, RegistryError::Network { .. }));
    }
}
