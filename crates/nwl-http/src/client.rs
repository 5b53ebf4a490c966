//! Gateway client

use crate::error::TransportError;
use crate::response::{dispatch, LogisticsResponse};
use crate::transport::{HttpTransport, ReqwestTransport};
use nwl_core::{
    CreateOrderRequest, Credentials, Environment, LogisticsRequest, MapRequest,
    PrintOrderRequest, QueryOrderRequest, RequestKind,
};
use nwl_sign::sign_fields;
use std::sync::Arc;
use tracing::{debug, warn};

/// Client for the NewebPay logistics gateway
///
/// Holds the merchant credentials and environment and signs every request
/// on the way out. Credentials are read-only and each send is independent,
/// so one client can serve concurrent requests.
///
/// # Example
///
/// ```rust
/// use nwl_core::{Credentials, Environment};
/// use nwl_http::LogisticsClient;
///
/// let client = LogisticsClient::new(Credentials::new(
///     "MERCHANT_1",
///     "01234567890123456789012345678901",
///     "0123456789012345",
/// ))
/// .with_environment(Environment::Production);
///
/// assert!(client.endpoint_url(nwl_core::RequestKind::Map).ends_with("/map"));
/// ```
pub struct LogisticsClient {
    credentials: Credentials,
    environment: Environment,
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl LogisticsClient {
    /// Create a client for the test environment with the default transport
    pub fn new(credentials: Credentials) -> Self {
        let environment = Environment::default();
        Self {
            credentials,
            environment,
            base_url: environment.base_url().to_string(),
            transport: Arc::new(ReqwestTransport::new()),
        }
    }

    /// Select the gateway environment
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self.base_url = environment.base_url().to_string();
        self
    }

    /// Override the base URL (tests, gateway-compatible proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use a custom transport
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// The URL a request of this kind is posted to
    ///
    /// Also the form action for the browser redirect flow.
    pub fn endpoint_url(&self, kind: RequestKind) -> String {
        format!("{}{}", self.base_url, kind.path())
    }

    /// Start a store-map selection request
    pub fn map(&self) -> MapRequest {
        MapRequest::new()
    }

    /// Start a create-order request
    pub fn create_order(&self) -> CreateOrderRequest {
        CreateOrderRequest::new()
    }

    /// Start a query-order request
    pub fn query_order(&self) -> QueryOrderRequest {
        QueryOrderRequest::new()
    }

    /// Start a print-order request
    pub fn print_order(&self) -> PrintOrderRequest {
        PrintOrderRequest::new()
    }

    /// Validate, sign, post, and classify a request
    ///
    /// # Errors
    ///
    /// - `Validation` when the content fails its kind's schema
    /// - `Sign` when the credential key material has the wrong length
    /// - `Request` when the network round-trip fails
    /// - `Status` when the gateway answers with a non-2xx status
    /// - `Parse` when a JSON-only kind receives a non-JSON body
    pub async fn send<R: LogisticsRequest>(
        &self,
        request: &R,
    ) -> Result<LogisticsResponse, TransportError> {
        request.validate()?;
        let payload = sign_fields(&self.credentials, request.fields())?;

        let kind = request.kind();
        let url = self.endpoint_url(kind);
        debug!(%kind, %url, "sending logistics request");

        let raw = self.transport.post_form(&url, &payload).await?;

        if !(200..300).contains(&raw.status) {
            warn!(%kind, status = raw.status, "gateway returned non-success status");
            return Err(TransportError::Status {
                status: raw.status,
                body: raw.body,
            });
        }

        dispatch(kind, raw.status, &raw.body)
    }
}
