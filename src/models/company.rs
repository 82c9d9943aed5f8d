//! Company and company-financials models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de;
use super::primitives::RecordId;

/// Industry sector tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    /// Sector id (usable in `sectors` filters)
    pub id: i64,
    /// Sector name
    pub name: String,
}

/// Investment theme tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme id (usable in `themes` filters)
    pub id: i64,
    /// Theme name
    pub name: String,
}

/// Founder as embedded in a company record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Founder {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub hashed_name: Option<String>,
}

/// Director as embedded in a company record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Director {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub hashed_name: Option<String>,
}

/// Auditor as embedded in a company record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auditor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub hashed_name: Option<String>,
}

/// Investor as embedded in a company record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInvestor {
    /// Investor name
    pub name: String,
    /// Amount invested, as reported (a decimal string)
    pub amount_invested: String,
    /// ISO currency code
    pub currency: String,
}

/// A company profile.
///
/// Lists requested with [`ResponseType::Simple`](super::ResponseType::Simple)
/// leave the nested relations empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Company id
    pub id: RecordId,
    /// Unique Entity Number (Singapore registry id)
    #[serde(default)]
    pub uen: Option<String>,
    /// Registry ids in other jurisdictions
    #[serde(default)]
    pub additional_ids: Option<Vec<String>>,
    /// Company name
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Headquarters location (field name as spelled by the API)
    #[serde(default)]
    pub headquaters: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub date_incorporated: Option<String>,
    /// Current investment stage, e.g. `SERIES_A`
    #[serde(default)]
    pub investment_stage: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub total_equity_funding: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub last_valuation: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub size_of_last_round: Option<Decimal>,
    #[serde(default)]
    pub date_of_last_round: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub revenue: Option<Decimal>,
    #[serde(default)]
    pub financial_year_end: Option<String>,
    /// Year-on-year revenue growth ratio
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub revenue_growth: Option<f64>,
    #[serde(default)]
    pub liquidation: Option<String>,
    #[serde(default)]
    pub liquidation_details: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub ebit: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub liabilities: Option<Decimal>,
    /// `ACTIVE` or `CLOSED`
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub company_raising: Option<String>,
    #[serde(default)]
    pub exit_type: Option<String>,
    /// Whether at least one founder is female
    #[serde(default, deserialize_with = "de::flag")]
    pub female_founder: Option<bool>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub sectors: Vec<Sector>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub themes: Vec<Theme>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub founders: Vec<Founder>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub directors: Vec<Director>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub auditors: Vec<Auditor>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub investors: Vec<CompanyInvestor>,
    /// Audited statements; shape varies between records
    #[serde(default)]
    pub financial_statements_audited: Option<Value>,
    /// Extracted statement data; shape varies between records
    #[serde(default)]
    pub financial_statements_extracted: Option<Value>,
}

/// Funding aggregated per share class and quarter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Funding {
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub investment_quarter: Option<f64>,
    #[serde(default)]
    pub first_investment_date: Option<String>,
    #[serde(default)]
    pub last_investment_date: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub share_class_id: Option<f64>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub total_funding: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub post_money_valuation: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub pre_money_valuation: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub max_share_price_paid: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub average_share_price_paid: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub total_shares_allocated: Option<f64>,
}

/// Funding round sourced from news rather than filings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalFunding {
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub investment_quarter: Option<f64>,
    #[serde(default)]
    pub investment_date: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub funding: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub post_money_valuation: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub price_share: Option<Decimal>,
    /// Source article
    #[serde(default)]
    pub newslink: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Revenue for one reporting quarter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Revenue {
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub revenue: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub ebit: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub revenue_quarter: Option<f64>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub revenue_year: Option<f64>,
}

/// Shareholder position in a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shareholder {
    pub investor_name: String,
    #[serde(rename = "isFounder", default, deserialize_with = "de::flag")]
    pub is_founder: Option<bool>,
    #[serde(default)]
    pub investment_date: Option<String>,
    #[serde(default)]
    pub investor_uen: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub current_share_holding_percentage: Option<f64>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub value_of_investment_at_last_round_valuation: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub sum_amount_invested: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub sum_shares_allocated: Option<f64>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub sum_shares_sold: Option<f64>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub sum_secondary_shares_purchased: Option<f64>,
}

/// One investor's participation in a funding round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingRoundAndValuation {
    pub investor_id: RecordId,
    #[serde(default)]
    pub type_of_investor: Option<String>,
    pub investor_name: String,
    #[serde(default)]
    pub investor_uen: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub amount_invested: Option<Decimal>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub shares_allocated: Option<f64>,
    #[serde(default)]
    pub investment_date: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub price_per_share: Option<Decimal>,
}

/// Funding rounds grouped by share class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerShareClassSummary {
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub share_class_id: Option<f64>,
    pub share_class_name: String,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub funding_rounds_and_valuation: Vec<FundingRoundAndValuation>,
}

/// Financial history of a company.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyFinancials {
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub fundings: Vec<Funding>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub additional_fundings: Vec<AdditionalFunding>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub revenue: Vec<Revenue>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub shareholders: Vec<Shareholder>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub per_share_class_summary: Vec<PerShareClassSummary>,
}
