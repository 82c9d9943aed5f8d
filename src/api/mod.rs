//! API service modules for Alternatives.PE endpoints.
//!
//! Each service covers one resource family. List endpoints take a filter
//! struct plus a [`Page`]; every filter struct implements `Default`.

mod auditors;
mod capital_providers;
mod commitment_deals;
mod companies;
mod directors;
mod founders;
mod fund_performances;
mod funds;
mod investors;
mod people;
pub(crate) mod query;
mod search;

pub use auditors::AuditorsService;
pub use capital_providers::{CapitalProvidersQuery, CapitalProvidersService};
pub use commitment_deals::{CommitmentDealsQuery, CommitmentDealsService};
pub use companies::{CompaniesQuery, CompaniesService};
pub use directors::DirectorsService;
pub use founders::FoundersService;
pub use fund_performances::{FundPerformancesQuery, FundPerformancesService};
pub use funds::{FundsQuery, FundsService};
pub use investors::{InvestorsQuery, InvestorsService};
pub use people::{PeopleQuery, PeopleService};
pub use query::{ListFilter, Page, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use search::SearchQuery;
