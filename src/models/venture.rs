//! Venture-capital models: capital providers, funds, fund performances and
//! commitment deals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::de;
use super::primitives::RecordId;

/// Two-level classification used for fund types and LP types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Top-level bucket, e.g. `Private Equity`
    pub lvl0: String,
    /// Sub-type, e.g. `Buyout`
    pub lvl1: String,
}

/// Fund type classification.
pub type FundType = Classification;

/// Limited partner type classification.
pub type LimitedPartnerType = Classification;

/// A fund manager, limited partner or family office.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapitalProvider {
    pub id: RecordId,
    #[serde(default)]
    pub registration_number: Option<String>,
    pub name: String,
    /// Categories, e.g. `fund-manager`
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub category: Vec<String>,
    #[serde(rename = "type", default, deserialize_with = "de::null_as_empty")]
    pub provider_type: Vec<String>,
    /// Headquarters
    #[serde(default)]
    pub hq: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub preferred_location: Vec<String>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub preferred_deal_type: Vec<String>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub preferred_fund_type: Vec<String>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub preferred_sector: Vec<String>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub preferred_theme: Vec<String>,
}

/// A fund and its latest reported metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fund {
    pub id: RecordId,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub alternatives_id: Option<i64>,
    #[serde(default)]
    pub registration_number: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub fund_manager_id: Option<i64>,
    #[serde(default)]
    pub fund_manager: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub vintage_year: Option<f64>,
    #[serde(rename = "type", default)]
    pub fund_type: Option<FundType>,
    #[serde(rename = "singleFundType", default)]
    pub single_fund_type: Option<String>,
    /// Fund size
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub size: Option<Decimal>,
    /// Fundraising status, e.g. `Open - With first close`
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub irr: Option<f64>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub net_multiple: Option<f64>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub dpi: Option<f64>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub rvpi: Option<f64>,
    #[serde(default)]
    pub last_report_quarter: Option<String>,
    #[serde(default)]
    pub year: Option<RecordId>,
    #[serde(default)]
    pub quarter: Option<String>,
}

impl Fund {
    /// Vintage year as an integer.
    ///
    /// `None` when the reported year is not a whole number in `i32` range.
    pub fn vintage(&self) -> Option<i32> {
        self.vintage_year
            .filter(|y| y.fract() == 0.0 && *y >= f64::from(i32::MIN) && *y <= f64::from(i32::MAX))
            .map(|y| y as i32)
    }
}

/// A reported performance snapshot for a fund.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundPerformance {
    pub id: RecordId,
    pub fund_id: RecordId,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub capital_provider_source_acting_as: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub source_id: Option<i64>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub irr: Option<f64>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub dpi: Option<f64>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub rvpi: Option<f64>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub net_multiple: Option<f64>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub share_redemption: Option<Decimal>,
    /// Committed capital (field name as spelled by the API)
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub commited_capital: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub profit: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub retained_earnings: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub dividend: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub net_assets: Option<Decimal>,
    #[serde(default)]
    pub quarter: Option<String>,
    #[serde(default)]
    pub year: Option<RecordId>,
    #[serde(default)]
    pub report_path: Option<String>,
    #[serde(default)]
    pub reporting_period: Option<String>,
}

/// A limited partner's commitment to a fund.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitmentDeal {
    pub id: RecordId,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub alternatives_id: Option<i64>,
    pub limited_partner_id: RecordId,
    pub limited_partner_name: String,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub limited_partner_type: Vec<LimitedPartnerType>,
    pub fund_id: RecordId,
    pub fund_name: String,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub vintage_year: Option<f64>,
    pub fund_manager_id: RecordId,
    pub fund_manager_name: String,
    #[serde(default)]
    pub fund_type: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub size: Option<Decimal>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub deal_date: Option<String>,
}
