//! Enumeration types for the Alternatives.PE API.
//!
//! Each enum serializes to the exact string the API expects on the wire,
//! exposed as [`as_str`](InvestmentStage::as_str) and through `Display`.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// All variants, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The value sent on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    };
}

wire_enum! {
    /// Funding stage of a company.
    pub enum InvestmentStage {
        /// Pre-seed
        PreSeed => "PRE_SEED",
        /// Seed
        Seed => "SEED",
        /// Series A
        SeriesA => "SERIES_A",
        /// Series B
        SeriesB => "SERIES_B",
        /// Series C and later rounds
        SeriesCAndBeyond => "SERIES_C_AND_BEYOND",
    }
}

wire_enum! {
    /// Operating status of a company.
    pub enum CompanyStatus {
        /// Still operating
        Active => "ACTIVE",
        /// Closed down
        Closed => "CLOSED",
    }
}

wire_enum! {
    /// Level of detail returned by list endpoints.
    pub enum ResponseType {
        /// Compact records
        Simple => "SIMPLE",
        /// Records with nested relations
        Detailed => "DETAILED",
    }
}

wire_enum! {
    /// Company classification.
    pub enum CompanyType {
        /// Venture-backed startup
        Startup => "startup",
        /// Private company
        Private => "private",
    }
}

wire_enum! {
    /// Sort direction.
    pub enum OrderDirection {
        /// Ascending
        Asc => "asc",
        /// Descending
        Desc => "desc",
    }
}

wire_enum! {
    /// Sort key for companies, investors, directors, founders and auditors.
    pub enum OrderBy {
        /// Name
        Name => "name",
        /// Identifier
        Id => "id",
        /// Number of portfolio companies (investors only)
        NoOfInvestedCompanies => "no_of_invested_companies",
    }
}

wire_enum! {
    /// ISO 3166-1 alpha-3 codes covered by the API.
    pub enum CountryCode {
        /// Singapore
        Sgp => "SGP",
        /// Malaysia
        Mys => "MYS",
        /// Indonesia
        Idn => "IDN",
        /// Thailand
        Tha => "THA",
        /// Vietnam
        Vnm => "VNM",
        /// Australia
        Aus => "AUS",
        /// Philippines
        Phl => "PHL",
    }
}

wire_enum! {
    /// Capital provider category.
    pub enum CapitalProviderCategory {
        /// Fund manager (GP)
        FundManager => "fund-manager",
        /// Limited partner
        LimitedPartner => "limited-partner",
        /// Family office
        FamilyOffice => "family-office",
    }
}

impl Default for CapitalProviderCategory {
    fn default() -> Self {
        CapitalProviderCategory::FundManager
    }
}

wire_enum! {
    /// Fundraising status of a fund.
    pub enum FundStatus {
        /// Open
        Open => "Open",
        /// Open, first close not reached
        OpenWithoutFirstClose => "Open - Without first close",
        /// Open, first close reached
        OpenWithFirstClose => "Open - With first close",
        /// Closed
        Closed => "Closed",
        /// Evergreen vehicle
        Evergreen => "Evergreen",
        /// Not yet launched
        Upcoming => "Upcoming",
    }
}

wire_enum! {
    /// Sort key for people.
    pub enum PersonOrderBy {
        /// Identifier
        Id => "id",
        /// First name
        FirstName => "first_name",
        /// Last name
        LastName => "last_name",
    }
}

wire_enum! {
    /// Sort key for funds.
    pub enum FundOrderBy {
        /// Fund name
        Name => "name",
    }
}

wire_enum! {
    /// Sort key for capital providers.
    pub enum CapitalProviderOrderBy {
        /// Display name
        DisplayName => "display_name",
    }
}

wire_enum! {
    /// Sort key for fund performances.
    pub enum FundPerformanceOrderBy {
        /// Distributions to paid-in capital
        Dpi => "dpi",
        /// Internal rate of return
        Irr => "irr",
    }
}

wire_enum! {
    /// Sort key for commitment deals.
    pub enum CommitmentDealOrderBy {
        /// Fund manager name
        FundManagerName => "fund_manager_name",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(InvestmentStage::SeriesCAndBeyond.as_str(), "SERIES_C_AND_BEYOND");
        assert_eq!(CompanyType::Startup.to_string(), "startup");
        assert_eq!(CapitalProviderCategory::FamilyOffice.as_str(), "family-office");
        assert_eq!(
            FundStatus::OpenWithoutFirstClose.as_str(),
            "Open - Without first close"
        );
        assert_eq!(CapitalProviderCategory::default(), CapitalProviderCategory::FundManager);
    }

    #[test]
    fn test_serde_matches_as_str() {
        for status in FundStatus::ALL {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: FundStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *status);
        }
        for code in CountryCode::ALL {
            assert_eq!(serde_json::to_value(code).unwrap(), code.as_str());
        }
    }
}
