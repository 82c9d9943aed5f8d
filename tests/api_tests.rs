//! Integration tests for altpe-rs.
//!
//! Every test runs against a local `wiremock` server, so no credentials or
//! network access are needed.
//!
//! Run with: cargo test --test api_tests
//!
//! Set `RUST_LOG=altpe_rs=debug` to see request logging.

use std::sync::Once;
use std::time::Duration;

use futures_util::StreamExt;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tokio::time::timeout;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use altpe_rs::api::{
    CapitalProvidersQuery, CommitmentDealsQuery, CompaniesQuery, FundPerformancesQuery,
    FundsQuery, InvestorsQuery, Page, PeopleQuery, SearchQuery,
};
use altpe_rs::models::{CapitalProviderCategory, CountryCode, FundStatus, InvestmentStage};
use altpe_rs::prelude::*;

static INIT: Once = Once::new();

const CLIENT_ID: &str = "test-client";
const CLIENT_SECRET: &str = "s3cr3t-value-xyz";

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new()
        .with_base_url(&server.uri())
        .expect("mock server uri is a valid URL")
        .with_credentials(CLIENT_ID, CLIENT_SECRET)
        .with_retry(RetryConfig::no_retry())
}

/// Create a client pointed at the mock server
fn create_client(server: &MockServer) -> AltPeClient {
    init_logging();
    AltPeClient::new(config_for(server)).expect("Failed to create client")
}

/// Mount the credential exchange, expecting exactly `times` calls.
async fn mount_token(server: &MockServer, token: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path("/api/v2/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": token })))
        .expect(times)
        .mount(server)
        .await;
}

fn nested_page(items: Value, total: u64, limit: u64, offset: u64) -> Value {
    json!({
        "data": {
            "total_records": total,
            "no_of_pages": total.div_ceil(limit.max(1)),
            "limit": limit,
            "offset": offset,
            "data": items,
        }
    })
}

fn flat_page(items: Value, total: u64, limit: u64, offset: u64) -> Value {
    json!({
        "total_records": total,
        "limit": limit,
        "offset": offset,
        "data": items,
    })
}

fn company(id: u64, name: &str) -> Value {
    json!({ "id": id, "name": name, "uen": "201912345K", "status": "ACTIVE" })
}

// =============================================================================
// Authentication Tests
// =============================================================================

mod auth_tests {
    use super::*;

    #[tokio::test]
    async fn test_exchange_sends_form_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/oauth/token"))
            .and(header("accept", "application/json"))
            .and(body_string_contains("client_id=test-client"))
            .and(body_string_contains("client_secret=s3cr3t-value-xyz"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-1" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        assert!(!client.tokens().has_token().await);
        client.authenticate().await.expect("Failed to authenticate");
        assert!(client.tokens().has_token().await);
    }

    #[tokio::test]
    async fn test_token_is_reused_across_requests() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/companies/1"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": company(1, "Acme") })))
            .expect(3)
            .mount(&server)
            .await;

        let client = create_client(&server);
        for _ in 0..3 {
            let company = client.companies().get(1).await.expect("Failed to get company");
            assert_eq!(company.name, "Acme");
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers_share_one_exchange() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/oauth/token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "token": "tok-shared" }))
                    .set_delay(Duration::from_millis(150)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let calls = (0..8).map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.authenticate().await })
        });

        for result in futures_util::future::join_all(calls).await {
            result.expect("task panicked").expect("Failed to authenticate");
        }
        assert!(client.tokens().has_token().await);
    }

    #[tokio::test]
    async fn test_cancelled_caller_does_not_abort_exchange() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/oauth/token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "token": "tok-slow" }))
                    .set_delay(Duration::from_millis(300)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);

        let first = timeout(Duration::from_millis(50), client.authenticate()).await;
        assert!(first.is_err(), "first caller should time out");

        // The exchange keeps running; the next caller joins it instead of
        // starting another.
        client.authenticate().await.expect("Failed to authenticate");
        assert!(client.tokens().has_token().await);
    }

    #[tokio::test]
    async fn test_401_drops_token_and_next_request_reauthenticates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-1" })))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v2/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-2" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/companies/1"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Token expired" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/companies/1"))
            .and(header("authorization", "Bearer tok-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": company(1, "Acme") })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);

        let err = client.companies().get(1).await.unwrap_err();
        assert!(err.is_auth_error());
        assert_eq!(err.message(), Some("Token expired"));
        assert!(!client.tokens().has_token().await);

        let company = client.companies().get(1).await.expect("Failed after re-auth");
        assert_eq!(company.name, "Acme");
    }

    #[tokio::test]
    async fn test_rejected_credentials_are_authentication_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/oauth/token"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "errors": "bad" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let err = client.companies().get(1).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Authentication);
        assert_eq!(err.status_code(), Some(422));
        assert_eq!(err.message(), Some("Invalid client credentials"));
    }

    #[tokio::test]
    async fn test_exchange_failure_reports_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/oauth/token"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let client = create_client(&server);
        let err = client.authenticate().await.unwrap_err();

        assert!(err.is_auth_error());
        assert_eq!(err.status_code(), Some(503));
        assert!(err.message().unwrap_or_default().contains("maintenance"));
    }

    #[test]
    fn test_missing_credentials_is_config_error() {
        let err = AltPeClient::new(ClientConfig::new().with_credentials("", "")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}

// =============================================================================
// Response Handling Tests
// =============================================================================

mod response_tests {
    use super::*;

    async fn mount_status(server: &MockServer, id: u32, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/api/v2/companies/{id}")))
            .respond_with(template)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        mount_status(
            &server,
            404,
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Company not found" })),
        )
        .await;
        mount_status(
            &server,
            422,
            ResponseTemplate::new(422)
                .set_body_json(json!({ "errors": { "order_by": ["is invalid"] } })),
        )
        .await;
        mount_status(&server, 429, ResponseTemplate::new(429)).await;
        mount_status(
            &server,
            500,
            ResponseTemplate::new(500).set_body_string("upstream exploded"),
        )
        .await;
        mount_status(&server, 418, ResponseTemplate::new(418).set_body_string("teapot")).await;

        let client = create_client(&server);
        let companies = client.companies();

        let err = companies.get(404).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.message(), Some("Company not found"));

        match companies.get(422).await.unwrap_err() {
            Error::Validation { errors, status, .. } => {
                assert_eq!(status, Some(422));
                assert_eq!(errors, Some(json!({ "order_by": ["is invalid"] })));
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        let err = companies.get(429).await.unwrap_err();
        assert!(matches!(err, Error::RateLimited { .. }));
        assert_eq!(err.message(), Some("HTTP 429"));
        assert!(err.is_retryable());

        let err = companies.get(500).await.unwrap_err();
        assert!(err.is_server_error());
        assert_eq!(err.message(), Some("upstream exploded"));

        match companies.get(418).await.unwrap_err() {
            Error::Api { status, body, .. } => {
                assert_eq!(status, 418);
                assert_eq!(body, "teapot");
            }
            other => panic!("expected generic API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_with_retry_recovers_from_server_error() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/funds/9"))
            .respond_with(ResponseTemplate::new(502))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/funds/9"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": { "id": 9, "name": "Lion Fund I" } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        init_logging();
        let config = config_for(&server).with_retry(
            RetryConfig::default()
                .with_max_retries(3)
                .with_initial_backoff(Duration::from_millis(5))
                .with_max_backoff(Duration::from_millis(20)),
        );
        let client = AltPeClient::new(config).expect("Failed to create client");

        let funds = &client;
        let fund = client
            .with_retry(move || async move { funds.funds().get(9).await })
            .await
            .expect("Failed after retries");
        assert_eq!(fund.name, "Lion Fund I");
    }

    #[tokio::test]
    async fn test_with_retry_leaves_client_errors_alone() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/funds/9"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        init_logging();
        let config = config_for(&server).with_retry(
            RetryConfig::default().with_initial_backoff(Duration::from_millis(5)),
        );
        let client = AltPeClient::new(config).expect("Failed to create client");

        let funds = &client;
        let err = client
            .with_retry(move || async move { funds.funds().get(9).await })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}

// =============================================================================
// Request Journal Tests
// =============================================================================

mod journal_tests {
    use super::*;

    fn journal_lines(dir: &std::path::Path) -> Vec<Value> {
        let mut lines = Vec::new();
        for entry in std::fs::read_dir(dir).expect("journal dir exists") {
            let path = entry.expect("dir entry").path();
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            assert!(name.starts_with("requests-") && name.ends_with(".jsonl"));
            let text = std::fs::read_to_string(&path).expect("journal readable");
            assert!(!text.contains(CLIENT_SECRET), "secret leaked into journal");
            assert!(!text.contains("tok-journal"), "token leaked into journal");
            lines.extend(text.lines().map(|l| serde_json::from_str::<Value>(l).unwrap()));
        }
        lines
    }

    #[tokio::test]
    async fn test_journal_records_redacted_exchanges() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-journal", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/companies"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(nested_page(json!([company(1, "Acme")]), 1, 100, 0)),
            )
            .mount(&server)
            .await;

        init_logging();
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config_for(&server).with_request_logging(dir.path());
        let client = AltPeClient::new(config).expect("Failed to create client");

        client
            .companies()
            .list(&CompaniesQuery::default(), Page::first(5))
            .await
            .expect("Failed to list companies");

        let lines = journal_lines(dir.path());
        assert_eq!(lines.len(), 2);

        let exchange = lines
            .iter()
            .find(|l| l["url"].as_str().is_some_and(|u| u.ends_with("/api/v2/oauth/token")))
            .expect("exchange journaled");
        assert_eq!(exchange["request"]["data"]["client_secret"], "***REDACTED***");
        assert_eq!(exchange["request"]["data"]["client_id"], "***REDACTED***");

        let list = lines
            .iter()
            .find(|l| l["method"] == "GET")
            .expect("list journaled");
        assert_eq!(list["response"]["status_code"], 200);
        assert_eq!(list["request"]["params"]["limit"], "5");
        assert_eq!(list["request"]["headers"]["authorization"], "***REDACTED***");
    }

    #[tokio::test]
    async fn test_journal_disabled_writes_nothing() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-journal", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/companies/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": company(1, "Acme") })))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().expect("tempdir");
        let client = create_client(&server);
        client.companies().get(1).await.expect("Failed to get company");

        assert!(!client.config().log_requests);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}

// =============================================================================
// Companies Tests
// =============================================================================

mod companies_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_clamps_limit_and_joins_countries() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/companies"))
            .and(query_param("limit", "100"))
            .and(query_param("offset", "0"))
            .and(query_param("countries", "SGP,MYS"))
            .and(query_param("investment_stage", "SERIES_A"))
            .and(query_param("order_direction", "asc"))
            .and(query_param("response_type", "SIMPLE"))
            .and(query_param("female_founder", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(nested_page(
                json!([company(1, "Acme"), company(2, "Globex")]),
                37,
                10,
                20,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let query = CompaniesQuery {
            countries: Some(vec![CountryCode::Sgp, CountryCode::Mys].into()),
            investment_stage: Some(InvestmentStage::SeriesA),
            female_founder: Some(true),
            ..Default::default()
        };

        let page = client
            .companies()
            .list(&query, Page::new(500, 0))
            .await
            .expect("Failed to list companies");

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.pagination.total_records, 37);
        assert_eq!(page.pagination.limit, 10);
        assert_eq!(page.pagination.offset, 20);
        assert_eq!(page.pagination.next_offset(), Some(30));
    }

    #[tokio::test]
    async fn test_list_keeps_large_decimal_amounts() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        // Raw body: a Rust float literal would already have lost the digits.
        let body = r#"{"data": {"total_records": 1, "limit": 100, "offset": 0, "data": [
            {"id": 5, "name": "Initech", "total_equity_funding": 12345678901234567.89}
        ]}}"#;
        Mock::given(method("GET"))
            .and(path("/api/v2/companies"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let page = client
            .companies()
            .list(&CompaniesQuery::default(), Page::default())
            .await
            .expect("Failed to list companies");

        assert_eq!(
            page.items[0].total_equity_funding,
            Some(dec!(12345678901234567.89))
        );
    }

    #[tokio::test]
    async fn test_non_finite_filter_is_rejected_before_sending() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 0).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/companies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(nested_page(json!([]), 0, 100, 0)))
            .expect(0)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let query = CompaniesQuery {
            valuation_min: Some(f64::NAN),
            ..Default::default()
        };

        let err = client
            .companies()
            .list(&query, Page::default())
            .await
            .expect_err("NaN filter must not be sent");
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_get_by_uen_and_financials() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/companies/201912345K/uen"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": company(7, "Acme") })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/companies/7/financials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "fundings": [
                        { "total_funding": "1500000.50" },
                        { "total_funding": 500000 },
                        { "total_funding": "" }
                    ],
                    "revenue": null
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let company = client
            .companies()
            .get_by_uen("201912345K")
            .await
            .expect("Failed to get by UEN");
        assert_eq!(company.id.as_str(), "7");

        let financials = client
            .companies()
            .financials(company.id.clone())
            .await
            .expect("Failed to get financials");
        assert_eq!(financials.fundings.len(), 3);
        assert_eq!(financials.fundings[0].total_funding, Some(dec!(1500000.50)));
        assert_eq!(financials.fundings[1].total_funding, Some(dec!(500000)));
        assert_eq!(financials.fundings[2].total_funding, None);
        assert!(financials.revenue.is_empty());
    }

    #[tokio::test]
    async fn test_list_stream_walks_pages() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/companies"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(nested_page(
                json!([company(1, "A"), company(2, "B")]),
                3,
                2,
                0,
            )))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/companies"))
            .and(query_param("offset", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(nested_page(
                json!([company(3, "C")]),
                3,
                2,
                2,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let names: Vec<String> = client
            .companies()
            .list_stream(CompaniesQuery::default())
            .map(|r| r.expect("stream item").name)
            .collect()
            .await;

        assert_eq!(names, vec!["A", "B", "C"]);
    }
}

// =============================================================================
// Investors Tests
// =============================================================================

mod investors_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_sends_dates_and_ids() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/investors"))
            .and(query_param("sectors", "4,9"))
            .and(query_param("invested_on_from", "2023-01-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(flat_page(
                json!([{ "id": 3, "investor_name": "Lion Ventures", "total_invested": "1200000" }]),
                1,
                100,
                0,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let query = InvestorsQuery {
            sectors: Some(vec![4u32, 9].into()),
            invested_on_from: chrono::NaiveDate::from_ymd_opt(2023, 1, 1),
            ..Default::default()
        };
        let page = client
            .investors()
            .list(&query, Page::default())
            .await
            .expect("Failed to list investors");

        assert_eq!(page.items[0].investor_name, "Lion Ventures");
        assert_eq!(page.items[0].total_invested, Some(dec!(1200000)));
        assert_eq!(page.pagination.page_count, None);
        assert!(!page.pagination.has_more());
    }

    #[tokio::test]
    async fn test_get_with_portfolio() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/investors/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "id": 3,
                    "investor_name": "Lion Ventures",
                    "companies": [
                        { "id": 1, "name": "Acme", "total_invested": 100 },
                        { "id": 2, "name": "Globex", "total_invested": "250.5" }
                    ]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let investor = client.investors().get(3).await.expect("Failed to get investor");
        assert_eq!(investor.companies.len(), 2);
        assert_eq!(investor.companies[0].total_invested, Some(dec!(100)));
        assert_eq!(investor.companies[1].total_invested, Some(dec!(250.5)));
    }
}

// =============================================================================
// People Directory Tests (directors, founders, auditors, people)
// =============================================================================

mod people_tests {
    use super::*;

    #[tokio::test]
    async fn test_directors_search() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/directors"))
            .and(query_param("query", "tan"))
            .respond_with(ResponseTemplate::new(200).set_body_json(nested_page(
                json!([{ "id": 11, "name": "Mei Tan", "designation": "Director", "company_id": 1 }]),
                1,
                100,
                0,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let page = client
            .directors()
            .list(&SearchQuery::named("tan"), Page::default())
            .await
            .expect("Failed to list directors");
        assert_eq!(page.items[0].name, "Mei Tan");
        assert_eq!(page.items[0].company_id, Some(RecordId::from(1)));
    }

    #[tokio::test]
    async fn test_founder_and_auditor_get() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/founders/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "id": 5, "name": "Ana", "designation": "CEO" }
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/auditors/6"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "id": 6, "name": "Audit & Co" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let founder = client.founders().get(5).await.expect("Failed to get founder");
        assert_eq!(founder.designation.as_deref(), Some("CEO"));
        let auditor = client.auditors().get(6).await.expect("Failed to get auditor");
        assert_eq!(auditor.name, "Audit & Co");
    }

    #[tokio::test]
    async fn test_people_list() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/people/"))
            .and(header("accept", "application/json"))
            .and(query_param("order_by", "id"))
            .and(query_param("last_name", "Tan"))
            .respond_with(ResponseTemplate::new(200).set_body_json(nested_page(
                json!([{
                    "id": 5,
                    "first_name": "Mei",
                    "last_name": "Tan",
                    "job_titles": [{ "id": 1, "job_title": "Partner" }]
                }]),
                1,
                100,
                0,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let query = PeopleQuery {
            last_name: Some("Tan".into()),
            ..Default::default()
        };
        let people = client
            .people()
            .list(&query, Page::default())
            .await
            .expect("Failed to list people");
        assert_eq!(people.items[0].full_name(), "Mei Tan");
        assert_eq!(people.items[0].job_titles[0].job_title, "Partner");
    }
}

// =============================================================================
// Venture Capital Tests (capital providers, funds, performances, deals)
// =============================================================================

mod venture_tests {
    use super::*;

    fn provider(id: u64) -> Value {
        json!({ "id": id, "name": "Lion Capital", "category": ["fund-manager"], "type": ["VC"] })
    }

    #[tokio::test]
    async fn test_capital_providers_list_defaults() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/capital-providers"))
            .and(query_param("order_by", "display_name"))
            .and(query_param("order_direction", "asc"))
            .and(query_param("category", "fund-manager,limited-partner"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(nested_page(json!([provider(7)]), 1, 100, 0)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let query = CapitalProvidersQuery {
            category: Some(
                vec![
                    CapitalProviderCategory::FundManager,
                    CapitalProviderCategory::LimitedPartner,
                ]
                .into(),
            ),
            ..Default::default()
        };
        let page = client
            .capital_providers()
            .list(&query, Page::default())
            .await
            .expect("Failed to list capital providers");
        assert_eq!(page.items[0].provider_type, vec!["VC"]);
    }

    #[tokio::test]
    async fn test_capital_provider_category_fallback() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/capital-providers/7/"))
            .and(query_param("category", "limited-partner"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({ "message": "Wrong category" })),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/capital-providers/7/"))
            .and(query_param("category", "fund-manager"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": provider(7) })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let provider = client
            .capital_providers()
            .get(7, CapitalProviderCategory::LimitedPartner)
            .await
            .expect("Fallback should succeed");
        assert_eq!(provider.name, "Lion Capital");
    }

    #[tokio::test]
    async fn test_capital_provider_fund_manager_rejection_is_final() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/capital-providers/7/"))
            .and(query_param("category", "fund-manager"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "message": "Nope" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let err = client
            .capital_providers()
            .get(7, "fund-manager")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert_eq!(err.message(), Some("Nope"));
    }

    #[tokio::test]
    async fn test_capital_provider_not_found_skips_fallback() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/capital-providers/7/"))
            .and(query_param("category", "limited-partner"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Missing" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/capital-providers/7/"))
            .and(query_param("category", "fund-manager"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": 7, "name": "Unused" } })))
            .expect(0)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let err = client
            .capital_providers()
            .get(7, CapitalProviderCategory::LimitedPartner)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_funds_list_with_status() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/funds/"))
            .and(query_param("status", "Open - With first close"))
            .and(query_param("order_by", "name"))
            .respond_with(ResponseTemplate::new(200).set_body_json(flat_page(
                json!([{
                    "id": 9,
                    "name": "Lion Fund I",
                    "vintage_year": 2018,
                    "type": { "lvl0": "Venture Capital", "lvl1": "Early Stage" },
                    "size": "50000000"
                }]),
                1,
                100,
                0,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let query = FundsQuery {
            status: Some(FundStatus::OpenWithFirstClose),
            ..Default::default()
        };
        let page = client
            .funds()
            .list(&query, Page::default())
            .await
            .expect("Failed to list funds");
        let fund = &page.items[0];
        assert_eq!(fund.vintage(), Some(2018));
        assert_eq!(fund.size, Some(dec!(50000000)));
    }

    #[tokio::test]
    async fn test_fund_performance_get() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/fund-performances/44"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "id": 44, "fund_id": 9, "dpi": 1.2, "net_assets": "", "quarter": "Q2", "year": "2024" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let perf = client
            .fund_performances()
            .get(44)
            .await
            .expect("Failed to get fund performance");
        assert_eq!(perf.fund_id, RecordId::from(9));
        assert_eq!(perf.dpi, Some(1.2));
        assert_eq!(perf.net_assets, None);
    }

    #[tokio::test]
    async fn test_fund_performances_list_filters() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/fund-performances/"))
            .and(query_param("order_by", "dpi"))
            .and(query_param("fund_id", "9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(nested_page(json!([]), 0, 100, 0)))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let query = FundPerformancesQuery {
            fund_id: Some(9),
            ..Default::default()
        };
        let page = client
            .fund_performances()
            .list(&query, Page::default())
            .await
            .expect("Failed to list fund performances");
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_commitment_deals_list() {
        let server = MockServer::start().await;
        mount_token(&server, "tok-1", 1).await;
        Mock::given(method("GET"))
            .and(path("/api/v2/commitment-deals/"))
            .and(query_param("order_by", "fund_manager_name"))
            .and(query_param("limited_partner_id", "12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(nested_page(
                json!([{
                    "id": 1,
                    "limited_partner_id": 12,
                    "limited_partner_name": "Pension Fund",
                    "limited_partner_type": [{ "lvl0": "Pension", "lvl1": "Public" }],
                    "fund_id": 9,
                    "fund_name": "Lion Fund I",
                    "fund_manager_id": 7,
                    "fund_manager_name": "Lion Capital"
                }]),
                1,
                100,
                0,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        let query = CommitmentDealsQuery {
            limited_partner_id: Some(12),
            ..Default::default()
        };
        let deals = client
            .commitment_deals()
            .list(&query, Page::default())
            .await
            .expect("Failed to list commitment deals");
        assert_eq!(deals.items[0].limited_partner_type[0].lvl0, "Pension");
        assert_eq!(deals.items[0].fund_manager_name, "Lion Capital");
    }
}
