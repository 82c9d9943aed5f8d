//! # altpe-rs
//!
//! A typed async client for the Alternatives.PE private-markets API.
//!
//! The crate covers company, investor and people data for Southeast Asian
//! venture markets, plus the fund-side dataset: capital providers, funds,
//! fund performance snapshots and limited partner commitments.
//!
//! ## Features
//!
//! - **Authentication**: client-credential exchange on first use, one
//!   shared exchange per client, token dropped on 401
//! - **Typed filters**: enums carry the exact wire values, multi-value
//!   filters are comma-joined, page sizes are clamped to 100
//! - **Pagination**: both envelope shapes the API uses decode into one
//!   [`PaginatedResponse`](client::PaginatedResponse); every list endpoint
//!   also has a `list_stream` form
//! - **Errors**: HTTP status mapped onto [`Error`] variants
//! - **Request journal**: optional redacted JSONL log of every exchange
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use altpe_rs::AltPeClient;
//! use altpe_rs::api::{CompaniesQuery, Page};
//! use altpe_rs::models::{CountryCode, InvestmentStage};
//!
//! #[tokio::main]
//! async fn main() -> altpe_rs::Result<()> {
//!     // Reads ALTERNATIVES_PE_CLIENT_ID / ALTERNATIVES_PE_CLIENT_SECRET
//!     let client = AltPeClient::from_env()?;
//!
//!     let query = CompaniesQuery {
//!         countries: Some(vec![CountryCode::Sgp].into()),
//!         investment_stage: Some(InvestmentStage::SeriesA),
//!         ..Default::default()
//!     };
//!     let page = client.companies().list(&query, Page::first(25)).await?;
//!     println!("{} matching companies", page.pagination.total_records);
//!
//!     for company in page {
//!         let financials = client.companies().financials(company.id.clone()).await?;
//!         println!("{}: {} funding rounds", company.name, financials.fundings.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming a whole listing
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use altpe_rs::AltPeClient;
//! use altpe_rs::api::CapitalProvidersQuery;
//!
//! #[tokio::main]
//! async fn main() -> altpe_rs::Result<()> {
//!     let client = AltPeClient::from_env()?;
//!     let mut providers = client
//!         .capital_providers()
//!         .list_stream(CapitalProvidersQuery::default());
//!
//!     while let Some(provider) = providers.next().await {
//!         println!("{}", provider?.name);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

pub use auth::TokenManager;
pub use client::{AltPeClient, ClientConfig, RetryConfig};
pub use error::{Error, ErrorKind, Result};
pub use models::RecordId;

/// Prelude module for convenient imports.
///
/// ```rust
/// use altpe_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CapitalProvidersQuery, CommitmentDealsQuery, CompaniesQuery, FundPerformancesQuery,
        FundsQuery, InvestorsQuery, ListFilter, Page, PeopleQuery, SearchQuery,
    };
    pub use crate::client::{AltPeClient, ClientConfig, PaginatedResponse, RetryConfig};
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::models::{
        // Filter enums
        CapitalProviderCategory, CompanyStatus, CompanyType, CountryCode, FundStatus,
        InvestmentStage, OrderBy, OrderDirection, ResponseType,
        // Entities
        CapitalProvider, CommitmentDeal, Company, CompanyFinancials, Fund, FundPerformance,
        InvestorDetail, InvestorSummary, Person, RecordId,
    };
}
