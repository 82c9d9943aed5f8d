//! HTTP client implementation for the Alternatives.PE API.

use std::future::Future;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{
    AuditorsService, CapitalProvidersService, CommitmentDealsService, CompaniesService,
    DirectorsService, FoundersService, FundPerformancesService, FundsService, InvestorsService,
    PeopleService,
};
use crate::auth::TokenManager;
use crate::{Error, Result};

use super::config::ClientConfig;
use super::journal::{JournalEntry, RequestJournal};
use super::paginated::PaginatedResponse;
use super::response::{classify, RawResponse};

/// The main client for interacting with the Alternatives.PE API.
///
/// This client provides access to all API services through method calls
/// that return service structs. The client manages authentication,
/// request building, and response classification. Cloning is cheap and
/// clones share the token cache.
///
/// # Example
///
/// ```no_run
/// use altpe_rs::{AltPeClient, ClientConfig};
/// use altpe_rs::api::{CompaniesQuery, Page};
/// use altpe_rs::models::CountryCode;
///
/// # async fn example() -> altpe_rs::Result<()> {
/// let client = AltPeClient::new(
///     ClientConfig::from_env()?.with_credentials("client-id", "client-secret"),
/// )?;
///
/// let query = CompaniesQuery {
///     countries: Some(vec![CountryCode::Sgp, CountryCode::Mys].into()),
///     ..Default::default()
/// };
/// let page = client.companies().list(&query, Page::first(20)).await?;
/// println!("{} of {} companies", page.items.len(), page.pagination.total_records);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AltPeClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
    pub(crate) tokens: TokenManager,
    pub(crate) journal: Option<RequestJournal>,
}

/// Description of one API call.
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub headers: HeaderMap,
    pub authenticated: bool,
}

impl ApiRequest {
    pub(crate) fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: HeaderMap::new(),
            authenticated: true,
        }
    }

    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub(crate) fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    #[allow(dead_code)]
    pub(crate) fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[allow(dead_code)]
    pub(crate) fn unauthenticated(mut self) -> Self {
        self.authenticated = false;
        self
    }
}

impl AltPeClient {
    /// Create a client from a configuration.
    ///
    /// Fails with [`Error::Config`] when the client id or secret is
    /// missing. No network call is made; the token is fetched on first use.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let journal = config
            .log_requests
            .then(|| RequestJournal::new(config.log_dir.clone()));

        let tokens = TokenManager::new(
            http.clone(),
            config.base_url.as_str(),
            config.client_id.clone(),
            config.client_secret.clone(),
            journal.clone(),
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                config,
                tokens,
                journal,
            }),
        })
    }

    /// Create a client from `ALTERNATIVES_PE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client with explicit credentials; everything else comes
    /// from the environment or defaults.
    pub fn with_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self> {
        Self::new(ClientConfig::from_env()?.with_credentials(client_id, client_secret))
    }

    /// Get the companies service.
    pub fn companies(&self) -> CompaniesService {
        CompaniesService::new(self.inner.clone())
    }

    /// Get the investors service.
    pub fn investors(&self) -> InvestorsService {
        InvestorsService::new(self.inner.clone())
    }

    /// Get the directors service.
    pub fn directors(&self) -> DirectorsService {
        DirectorsService::new(self.inner.clone())
    }

    /// Get the founders service.
    pub fn founders(&self) -> FoundersService {
        FoundersService::new(self.inner.clone())
    }

    /// Get the auditors service.
    pub fn auditors(&self) -> AuditorsService {
        AuditorsService::new(self.inner.clone())
    }

    /// Get the capital providers service.
    pub fn capital_providers(&self) -> CapitalProvidersService {
        CapitalProvidersService::new(self.inner.clone())
    }

    /// Get the funds service.
    pub fn funds(&self) -> FundsService {
        FundsService::new(self.inner.clone())
    }

    /// Get the fund performances service.
    pub fn fund_performances(&self) -> FundPerformancesService {
        FundPerformancesService::new(self.inner.clone())
    }

    /// Get the commitment deals service.
    pub fn commitment_deals(&self) -> CommitmentDealsService {
        CommitmentDealsService::new(self.inner.clone())
    }

    /// Get the people service.
    pub fn people(&self) -> PeopleService {
        PeopleService::new(self.inner.clone())
    }

    /// The token manager shared by every service of this client.
    pub fn tokens(&self) -> &TokenManager {
        &self.inner.tokens
    }

    /// Exchange credentials now instead of on the first request.
    pub async fn authenticate(&self) -> Result<()> {
        self.inner.tokens.token().await.map(|_| ())
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Run `op`, retrying transient failures with exponential backoff.
    ///
    /// Only errors for which [`Error::is_retryable`] holds are retried,
    /// at most [`RetryConfig::max_retries`](crate::RetryConfig::max_retries)
    /// times. Individual requests are never retried on their own.
    ///
    /// ```no_run
    /// # async fn example(client: altpe_rs::AltPeClient) -> altpe_rs::Result<()> {
    /// let companies = client.companies();
    /// let company = client
    ///     .with_retry(|| companies.get(42))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn with_retry<T, F, Fut>(&self, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let retry = &self.inner.config.retry;
        let mut attempt = 0;
        loop {
            match op().await {
                Err(e) if e.is_retryable() && attempt < retry.max_retries => {
                    let backoff = retry.backoff_for_attempt(attempt);
                    tracing::debug!(attempt, ?backoff, error = %e, "Retrying after transient error");
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}

impl ClientInner {
    fn url_for(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            path
        )
    }

    /// Send one request and classify the response. No retries.
    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        let url = self.url_for(&request.path);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.extend(request.headers);

        let mut sent_token: Option<SecretString> = None;
        if request.authenticated {
            let token = self.tokens.token().await?;
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
            sent_token = Some(token);
        }

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .headers(headers.clone());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(method = %request.method, path = %request.path, status, "API request");

        if let Some(journal) = &self.journal {
            journal
                .record(JournalEntry {
                    method: request.method.as_str(),
                    url: &url,
                    params: &request.query,
                    data: request.body.as_ref(),
                    headers: &headers,
                    status,
                    body: &body,
                })
                .await;
        }

        match classify(RawResponse { status, body }) {
            Err(err @ Error::Authentication { .. }) => {
                if let Some(token) = &sent_token {
                    self.tokens.invalidate(token).await;
                }
                Err(err)
            }
            other => other,
        }
    }

    /// GET a single entity wrapped in `{"data": ...}`.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(ApiRequest::get(path)).await?.data()
    }

    /// GET a single entity with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T> {
        self.execute(ApiRequest::get(path).query(query))
            .await?
            .data()
    }

    /// Run a list request and decode either pagination envelope.
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<PaginatedResponse<T>> {
        self.execute(request).await?.json()
    }
}

impl std::fmt::Debug for AltPeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AltPeClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
