//! HTTP client, token-aware executor and response handling.
//!
//! [`AltPeClient`] is the entry point. Everything else here is the
//! plumbing its services share: configuration, response classification,
//! pagination and the optional request journal.
//!
//! # Example
//!
//! ```no_run
//! use altpe_rs::AltPeClient;
//!
//! # async fn example() -> altpe_rs::Result<()> {
//! let client = AltPeClient::with_credentials("client-id", "client-secret")?;
//! let company = client.companies().get_by_uen("201912345K").await?;
//! println!("{}", company.name);
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod journal;
pub mod paginated;
pub mod response;

pub use config::{ClientConfig, RetryConfig, DEFAULT_BASE_URL, DEFAULT_LOG_DIR};
pub use http::AltPeClient;
pub use journal::RequestJournal;
pub use paginated::{PaginatedResponse, PaginatedStream, PaginationInfo};
pub use response::{classify, RawResponse};
pub(crate) use http::{ApiRequest, ClientInner};
