//! Data models for the Alternatives.PE API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - [`RecordId`]
//! - [`enums`] - Filter and sort enumerations with their wire values
//! - [`company`] - Companies and company financials
//! - [`investor`] - Investors and their portfolios
//! - [`people`] - Founders, directors, auditors and people
//! - [`venture`] - Capital providers, funds, fund performances, commitment deals

pub mod primitives;
pub mod enums;
pub mod company;
pub mod investor;
pub mod people;
pub mod venture;

pub(crate) mod de;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use company::*;
pub use investor::*;
pub use people::*;
pub use venture::*;
