//! Blocking HTTP client for the hosted store's PostgREST API.

use std::time::{Duration, Instant};

use onemfin_core::config::StoreConfig;
use onemfin_core::errors::{ConfigError, StoreError, StoreResult};
use reqwest::blocking::{Client, Request};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::query::TableQuery;

/// Configuration for the HTTP transport layer.
#[derive(Clone)]
pub struct HttpClientConfig {
    /// Project URL, without the REST path.
    pub base_url: String,
    /// REST API path under `base_url`.
    pub rest_path: String,
    /// Service-role key sent as both `apikey` and bearer token.
    pub service_key: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpClientConfig {
    /// Build from a [`StoreConfig`]. A missing URL, or a missing or malformed
    /// key, is a config error so callers fail before the first request.
    pub fn from_store_config(store: &StoreConfig) -> Result<Self, ConfigError> {
        let base_url = store.url.clone().ok_or_else(|| ConfigError::Missing {
            field: "store.url".to_string(),
            env_hint: "ONEMFIN_STORE_URL or SUPABASE_URL".to_string(),
        })?;
        let service_key = store.checked_service_key()?.to_string();
        Ok(Self {
            base_url,
            rest_path: store.rest_path.clone(),
            service_key,
            timeout: Duration::from_secs(store.timeout_secs),
        })
    }
}

impl std::fmt::Debug for HttpClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClientConfig")
            .field("base_url", &self.base_url)
            .field("rest_path", &self.rest_path)
            .field("service_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// HTTP transport client. One request per call, no retries.
/// Every built request carries the `apikey` and bearer headers.
#[derive(Debug)]
pub struct HttpClient {
    config: HttpClientConfig,
    client: Client,
    auth_headers: HeaderMap,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> StoreResult<Self> {
        let sensitive = |value: String| {
            HeaderValue::from_str(&value)
                .map(|mut v| {
                    v.set_sensitive(true);
                    v
                })
                .map_err(|e| StoreError::Network {
                    url: config.base_url.clone(),
                    reason: format!("service key is not a valid header value: {e}"),
                })
        };
        let mut auth_headers = HeaderMap::new();
        auth_headers.insert("apikey", sensitive(config.service_key.clone())?);
        auth_headers.insert(AUTHORIZATION, sensitive(format!("Bearer {}", config.service_key))?);

        let client = Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(|e| StoreError::Network {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            config,
            client,
            auth_headers,
        })
    }

    /// `{base_url}/{rest_path}/{table}` with no doubled slashes; an empty
    /// `rest_path` is skipped.
    pub fn table_url(&self, table: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        match self.config.rest_path.trim_matches('/') {
            "" => format!("{base}/{table}"),
            rest => format!("{base}/{rest}/{table}"),
        }
    }

    /// Build a filtered GET.
    pub fn build_get(&self, query: &TableQuery) -> StoreResult<Request> {
        self.client
            .get(self.table_url(query.table()))
            .headers(self.auth_headers.clone())
            .query(&query.pairs())
            .build()
            .map_err(|e| self.network_error(query.table(), e))
    }

    /// Build an insert that asks the store to echo the written rows back.
    pub fn build_insert<B: Serialize>(&self, table: &str, body: &B) -> StoreResult<Request> {
        self.client
            .post(self.table_url(table))
            .headers(self.auth_headers.clone())
            .header("Prefer", "return=representation")
            .json(body)
            .build()
            .map_err(|e| self.network_error(table, e))
    }

    /// Build a filtered PATCH that echoes the updated rows back.
    pub fn build_update<B: Serialize>(&self, query: &TableQuery, body: &B) -> StoreResult<Request> {
        self.client
            .patch(self.table_url(query.table()))
            .headers(self.auth_headers.clone())
            .query(&query.pairs())
            .header("Prefer", "return=representation")
            .json(body)
            .build()
            .map_err(|e| self.network_error(query.table(), e))
    }

    /// Send a request and decode the JSON array body into rows.
    pub fn execute<T: DeserializeOwned>(&self, table: &str, request: Request) -> StoreResult<Vec<T>> {
        let method: Method = request.method().clone();
        let started = Instant::now();

        let response = self
            .client
            .execute(request)
            .map_err(|e| self.network_error(table, e))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| self.network_error(table, e))?;

        tracing::debug!(
            table = %table,
            method = %method,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "store: request completed"
        );

        if !status.is_success() {
            return Err(classify_failure(table, status, &body));
        }
        decode_rows(table, &body)
    }

    fn network_error(&self, table: &str, e: reqwest::Error) -> StoreError {
        let url = e
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| self.table_url(table));
        StoreError::Network {
            url,
            reason: e.to_string(),
        }
    }
}

/// Map a non-2xx response to a [`StoreError`].
///
/// PostgREST reports Postgres errors as `{"code": "...", "message": "..."}`;
/// foreign-key (`23503`) and unique (`23505`) violations become
/// `ConstraintViolation` whatever the HTTP status.
pub fn classify_failure(table: &str, status: StatusCode, body: &str) -> StoreError {
    let pg = serde_json::from_str::<serde_json::Value>(body).ok();
    let pg_code = pg
        .as_ref()
        .and_then(|v| v.get("code"))
        .and_then(|c| c.as_str())
        .unwrap_or_default();
    let pg_message = pg
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string());

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return StoreError::AuthRejected {
            status: status.as_u16(),
        };
    }
    if status == StatusCode::CONFLICT || matches!(pg_code, "23503" | "23505") {
        return StoreError::ConstraintViolation {
            table: table.to_string(),
            message: pg_message,
        };
    }
    StoreError::RequestFailed {
        table: table.to_string(),
        status: status.as_u16(),
        body: body.to_string(),
    }
}

/// Decode a PostgREST JSON array body.
pub fn decode_rows<T: DeserializeOwned>(table: &str, body: &str) -> StoreResult<Vec<T>> {
    serde_json::from_str(body).map_err(|e| StoreError::MalformedResponse {
        table: table.to_string(),
        reason: e.to_string(),
    })
}
