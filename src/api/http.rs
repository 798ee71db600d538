//! HTTP transport for the LearnLoop REST API.
//!
//! One network round-trip per call:
//! - no retries, no caching, no response reordering
//! - failures are classified into the [`ApiError`] taxonomy and otherwise
//!   left uninterpreted
//! - blocking socket work runs on the tokio blocking pool

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, ApiResult};

/// Connection settings for one backend instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

/// Shared transport handed to the typed collection clients.
pub struct Http {
    base_url: String,
    token: Option<String>,
}

impl Http {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            base_url: config.base_url,
            token: config.token,
        }
    }

    pub fn shared(config: ApiConfig) -> Arc<Self> {
        Arc::new(Self::new(config))
    }

    fn url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(query) if !query.is_empty() => format!("{}{}?{}", self.base_url, path, query),
            _ => format!("{}{}", self.base_url, path),
        }
    }

    /// GET a JSON document.
    pub async fn get_json<T>(&self, path: &str, query: Option<&str>) -> ApiResult<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.round_trip(Verb::Get, self.url(path, query), None).await
    }

    /// POST a JSON body; the created resource is echoed back.
    pub async fn post_json<T>(&self, path: &str, body: &impl Serialize) -> ApiResult<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let body = encode(body)?;
        self.round_trip(Verb::Post, self.url(path, None), Some(body)).await
    }

    /// PUT a JSON body; the updated resource is echoed back.
    pub async fn put_json<T>(&self, path: &str, body: &impl Serialize) -> ApiResult<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let body = encode(body)?;
        self.round_trip(Verb::Put, self.url(path, None), Some(body)).await
    }

    /// PUT with no body, discarding whatever the server returns.
    pub async fn put_empty(&self, path: &str, query: Option<&str>) -> ApiResult<()> {
        self.round_trip_discard(Verb::Put, self.url(path, query), None).await
    }

    /// DELETE, discarding whatever the server returns.
    pub async fn delete_empty(&self, path: &str, query: Option<&str>) -> ApiResult<()> {
        self.round_trip_discard(Verb::Delete, self.url(path, query), None).await
    }

    async fn round_trip<T>(
        &self,
        verb: Verb,
        url: String,
        body: Option<serde_json::Value>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let token = self.token.clone();
        let inner_res: ApiResult<T> = tokio::task::spawn_blocking(move || -> ApiResult<T> {
            let response = send(verb, &url, token.as_deref(), body)?;
            response
                .into_json::<T>()
                .map_err(|e| ApiError::Network(format!("failed to read response: {e}")))
        })
        .await
        .map_err(|e| ApiError::Network(format!("spawn_blocking failed: {e}")))?;
        inner_res
    }

    async fn round_trip_discard(
        &self,
        verb: Verb,
        url: String,
        body: Option<serde_json::Value>,
    ) -> ApiResult<()> {
        let token = self.token.clone();
        let inner_res: ApiResult<()> = tokio::task::spawn_blocking(move || -> ApiResult<()> {
            let response = send(verb, &url, token.as_deref(), body)?;
            // Drain the body so the socket shuts down cleanly.
            let _ = response.into_string();
            Ok(())
        })
        .await
        .map_err(|e| ApiError::Network(format!("spawn_blocking failed: {e}")))?;
        inner_res
    }
}

fn encode(body: &impl Serialize) -> ApiResult<serde_json::Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Validation(format!("unencodable payload: {e}")))
}

fn send(
    verb: Verb,
    url: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> ApiResult<ureq::Response> {
    let mut request = match verb {
        Verb::Get => ureq::get(url),
        Verb::Post => ureq::post(url),
        Verb::Put => ureq::put(url),
        Verb::Delete => ureq::delete(url),
    };

    if let Some(token) = token {
        request = request.set("Authorization", &format!("Bearer {token}"));
    }

    let result = match body {
        Some(body) => request.send_json(body),
        None => request.call(),
    };

    match result {
        Ok(response) => {
            debug!(verb = verb.as_str(), url = %url, status = response.status(), "api round-trip");
            Ok(response)
        }
        Err(ureq::Error::Status(status, response)) => {
            debug!(verb = verb.as_str(), url = %url, status, "api round-trip failed");
            let body = response.into_string().unwrap_or_default();
            Err(classify_status(status, &body))
        }
        Err(ureq::Error::Transport(transport)) => {
            debug!(verb = verb.as_str(), url = %url, error = %transport, "api transport failure");
            Err(ApiError::Network(transport.to_string()))
        }
    }
}

/// Map a non-2xx status onto the error taxonomy.
fn classify_status(status: u16, body: &str) -> ApiError {
    match status {
        404 => ApiError::NotFound(
            server_message(body).unwrap_or_else(|| "resource not found".to_string()),
        ),
        401 | 403 => {
            ApiError::Authorization(server_message(body).unwrap_or_else(|| format!("HTTP {status}")))
        }
        400 | 422 => {
            ApiError::Validation(server_message(body).unwrap_or_else(|| format!("HTTP {status}")))
        }
        _ => ApiError::Network(format!("HTTP {status}")),
    }
}

/// Error bodies from the backend carry a `message` field.
fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
