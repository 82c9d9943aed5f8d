//! Bearer token acquisition and caching.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::client::journal::{JournalEntry, RequestJournal};
use crate::{Error, Result};

/// Path of the credential exchange endpoint.
pub const TOKEN_PATH: &str = "/api/v2/oauth/token";

/// Lazily obtains and caches the bearer token.
///
/// The first caller that finds the cache empty runs the credential
/// exchange; concurrent callers wait on the same exchange instead of
/// starting their own. The exchange runs on its own task, so a caller
/// that gives up waiting (e.g. under `tokio::time::timeout`) does not
/// abort it: the token still lands in the cache and the next caller
/// picks it up.
///
/// Tokens carry no expiry. A token lives until the API rejects it with a
/// 401, at which point [`invalidate`](Self::invalidate) drops it and the
/// next request re-authenticates.
pub struct TokenManager {
    exchange: Arc<CredentialExchange>,
    cached: Arc<RwLock<Option<SecretString>>>,
    in_flight: Mutex<Option<JoinHandle<Result<SecretString>>>>,
}

struct CredentialExchange {
    http: reqwest::Client,
    url: String,
    client_id: String,
    client_secret: SecretString,
    journal: Option<RequestJournal>,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

impl TokenManager {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: &str,
        client_id: String,
        client_secret: SecretString,
        journal: Option<RequestJournal>,
    ) -> Self {
        Self {
            exchange: Arc::new(CredentialExchange {
                http,
                url: format!("{}{}", base_url.trim_end_matches('/'), TOKEN_PATH),
                client_id,
                client_secret,
                journal,
            }),
            cached: Arc::new(RwLock::new(None)),
            in_flight: Mutex::new(None),
        }
    }

    /// Return the cached token, exchanging credentials first if there is none.
    pub async fn token(&self) -> Result<SecretString> {
        if let Some(token) = self.cached().await {
            return Ok(token);
        }

        let mut in_flight = self.in_flight.lock().await;

        // Another caller may have finished the exchange while we waited.
        if let Some(token) = self.cached().await {
            return Ok(token);
        }

        // A finished handle left behind by a cancelled caller holds a token
        // that has since been invalidated, or a failure. Start over.
        if in_flight.as_ref().is_some_and(|h| h.is_finished()) {
            *in_flight = None;
        }

        let handle = in_flight.get_or_insert_with(|| {
            let exchange = self.exchange.clone();
            let cached = self.cached.clone();
            tokio::spawn(async move {
                let token = exchange.run().await?;
                *cached.write().await = Some(token.clone());
                Ok(token)
            })
        });

        let joined = handle.await;
        *in_flight = None;

        joined.map_err(|e| Error::authentication(format!("Token exchange aborted: {e}"), None))?
    }

    /// Drop the cached token if it is still `rejected`.
    ///
    /// A newer token obtained after `rejected` was sent is left in place.
    pub async fn invalidate(&self, rejected: &SecretString) {
        let mut cached = self.cached.write().await;
        let matches = cached
            .as_ref()
            .is_some_and(|current| current.expose_secret() == rejected.expose_secret());
        if matches {
            tracing::warn!("Bearer token rejected; it will be re-acquired on the next request");
            *cached = None;
        }
    }

    /// Drop the cached token unconditionally.
    pub async fn clear(&self) {
        *self.cached.write().await = None;
    }

    /// Returns `true` if a token is cached.
    pub async fn has_token(&self) -> bool {
        self.cached.read().await.is_some()
    }

    async fn cached(&self) -> Option<SecretString> {
        self.cached.read().await.clone()
    }
}

impl CredentialExchange {
    async fn run(&self) -> Result<SecretString> {
        let form = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.expose_secret()),
        ];

        let response = self
            .http
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .form(&form)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if let Some(journal) = &self.journal {
            let mut headers = HeaderMap::new();
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            );
            let data = serde_json::json!({
                "client_id": self.client_id,
                "client_secret": self.client_secret.expose_secret(),
            });
            journal
                .record(JournalEntry {
                    method: "POST",
                    url: &self.url,
                    params: &[],
                    data: Some(&data),
                    headers: &headers,
                    status,
                    body: &body,
                })
                .await;
        }

        match status {
            200 => {
                let parsed: TokenResponse = serde_json::from_str(&body)?;
                tracing::info!("Obtained API bearer token");
                Ok(SecretString::from(parsed.token))
            }
            422 => Err(Error::authentication("Invalid client credentials", Some(422))),
            other => Err(Error::authentication(
                format!("Authentication failed: {body}"),
                Some(other),
            )),
        }
    }
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("url", &self.exchange.url)
            .field("client_id", &self.exchange.client_id)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
