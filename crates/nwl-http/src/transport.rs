//! HTTP transport abstraction
//!
//! The client posts through [`HttpTransport`] so the HTTP stack can be
//! swapped out (tests, proxies, exotic runtimes). [`ReqwestTransport`] is
//! the default implementation.

use crate::error::TransportError;
use async_trait::async_trait;
use nwl_sign::SignedPayload;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("nwl/", env!("CARGO_PKG_VERSION"));

/// A raw HTTP response: status code plus body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Posts a signed payload as an `application/x-www-form-urlencoded` body
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_form(
        &self,
        url: &str,
        payload: &SignedPayload,
    ) -> Result<RawResponse, TransportError>;
}

/// Default transport backed by a shared reqwest client
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap(),
        }
    }

    /// Use a preconfigured reqwest client (custom TLS, proxy, timeouts)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_form(
        &self,
        url: &str,
        payload: &SignedPayload,
    ) -> Result<RawResponse, TransportError> {
        let response = self.client.post(url).form(payload).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_carries_crate_version() {
        assert!(USER_AGENT.starts_with("nwl/"));
        assert!(USER_AGENT.len() > "nwl/".len());
    }

    #[test]
    fn test_default_transport_constructs() {
        let _ = ReqwestTransport::default();
    }
}
