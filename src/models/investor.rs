//! Investor models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::company::{Sector, Theme};
use super::de;
use super::primitives::RecordId;

/// Investor row returned by the investor list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorSummary {
    pub id: RecordId,
    pub investor_name: String,
    #[serde(default)]
    pub investor_uen: Option<String>,
    /// Date of the most recent investment
    #[serde(default)]
    pub investment_date: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub no_of_invested_companies: Option<f64>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub total_invested: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub amount_invested_seed: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub amount_invested_series_a: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub amount_invested_series_b: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub amount_invested_series_c_and_beyond: Option<Decimal>,
}

/// Full investor profile with its portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorDetail {
    pub id: RecordId,
    pub investor_name: String,
    #[serde(default)]
    pub investor_uen: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub companies: Vec<InvestorCompany>,
}

/// A portfolio company as seen from an investor.
///
/// Share counts are reported as plain numbers; amounts as decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorCompany {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub uen: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub total_shares_allocated: Option<f64>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub total_shares_sold: Option<f64>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub total_secondary_shares: Option<f64>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub total_invested: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub total_seeds: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub amount_invested_series_a: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub amount_invested_series_b: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub amount_invested_seed: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub amount_invested_pre_seed: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub amount_invested_series_c_and_beyond: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub amount_invested_preference_ordinary: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub amount_invested_ordinary: Option<Decimal>,
    /// Untyped upstream; kept raw
    #[serde(default)]
    pub amount_invested_preference: Option<Value>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub max_price_per_share: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub remaining_shares_after_sold: Option<f64>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub value_of_investment_at_last_round_valuation: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub value_of_investment_at_last_round_valuation_primary: Option<Decimal>,
    /// Secondary-share valuation (field name as spelled by the API)
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub value_of_investment_at_last_round_valuation_seconday: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub remaining_shares_without_secondary_after_sold: Option<f64>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub sectors: Vec<Sector>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub themes: Vec<Theme>,
}
