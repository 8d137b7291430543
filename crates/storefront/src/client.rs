use std::time::Duration;

use reqwest::header;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::API_VERSION;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// The full result set from a query. Every response encloses its result sets
/// within a `data` property.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Set<Data> {
    pub data: Data,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A wrapper over an HTTP client for the Storefront API with credentials.
#[derive(Debug, Clone)]
pub struct Client {
    endpoint: String,
    access_token: String,
    http: reqwest::Client,
}

impl Client {
    /// Request timeout for the defaulted HTTP client.
    const TIMEOUT: Duration = Duration::from_secs(10);

    /// Construct a client for the given store domain and access token, with
    /// a defaulted HTTP client.
    pub fn new(domain: &str, access_token: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()?;
        Ok(Self::with_http_client(domain, access_token, http))
    }

    /// Construct a client using the provided `reqwest::Client` rather than a
    /// defaulted one.
    pub fn with_http_client(domain: &str, access_token: &str, http: reqwest::Client) -> Self {
        Self {
            endpoint: format!("https://{domain}/api/{API_VERSION}/graphql.json"),
            access_token: access_token.to_string(),
            http,
        }
    }

    /// The resolved GraphQL endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a raw GraphQL query document against the API endpoint and
    /// decode the response body into `T`.
    pub async fn query<T: DeserializeOwned>(&self, query: &str) -> Result<T, ClientError> {
        let body = self
            .http
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/graphql")
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .body(query.to_string())
            .send()
            .await?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }
}
