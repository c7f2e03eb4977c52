//! Address handling and request plumbing shared by the resource clients.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::error::{ClientError, ClientResult};

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

const DEFAULT_SCHEME: &str = "http";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct Transport {
    pub(crate) client: Client,
    base_url: Url,
}

impl Transport {
    pub(crate) fn open(address: &str) -> ClientResult<Self> {
        let base_url = normalize_address(address)?;

        let mut default_headers = HeaderMap::new();
        if let Ok(request_id) = HeaderValue::from_str(&Uuid::new_v4().to_string()) {
            default_headers.insert(HEADER_REQUEST_ID, request_id);
        }

        // Deadlines are owned by the caller, so the client itself never times out.
        let client = Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(|source| ClientError::Client { source })?;

        debug!(base_url = %base_url, "opened client transport");
        Ok(Self { client, base_url })
    }

    pub(crate) fn endpoint(&self, path: &str) -> ClientResult<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::InvalidAddress {
                address: format!("{}{path}", self.base_url),
                reason: err.to_string(),
            })
    }
}

/// Accepts `host:port` service addresses as well as full URLs.
pub(crate) fn normalize_address(address: &str) -> ClientResult<Url> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(ClientError::InvalidAddress {
            address: address.to_string(),
            reason: "address is empty".to_string(),
        });
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME}://{trimmed}")
    };

    candidate
        .parse::<Url>()
        .map_err(|err| ClientError::InvalidAddress {
            address: address.to_string(),
            reason: err.to_string(),
        })
}

pub(crate) async fn send(
    operation: &'static str,
    request: RequestBuilder,
) -> ClientResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|source| ClientError::Request { operation, source })?;

    let status = response.status();
    debug!(operation, status = %status, "request completed");

    if status.is_success() {
        Ok(response)
    } else {
        Err(classify(operation, response).await)
    }
}

pub(crate) async fn decode<T>(operation: &'static str, response: Response) -> ClientResult<T>
where
    T: DeserializeOwned,
{
    response
        .json::<T>()
        .await
        .map_err(|source| ClientError::Decode { operation, source })
}

async fn classify(operation: &'static str, response: Response) -> ClientError {
    let status = response.status();
    let bytes = response.bytes().await.unwrap_or_default();

    let message = serde_json::from_slice::<ErrorBody>(&bytes)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| String::from_utf8_lossy(&bytes).trim().to_string());

    let message = if message.is_empty() {
        format!("request failed with status {status}")
    } else {
        format!("{message} (status {status})")
    };

    ClientError::Api {
        operation,
        status,
        message,
    }
}
