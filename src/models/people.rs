//! Founders, directors, auditors and people records.

use serde::{Deserialize, Serialize};

use super::de;
use super::primitives::RecordId;

/// Founder record from the founders endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FounderDetail {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Role at the company, e.g. `CEO`
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub hashed_id: Option<String>,
    /// Company the founder belongs to
    #[serde(default)]
    pub company_id: Option<RecordId>,
}

/// Director record from the directors endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorDetail {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub hashed_id: Option<String>,
    #[serde(default)]
    pub company_id: Option<RecordId>,
}

/// Auditor record from the auditors endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditorDetail {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub hashed_id: Option<String>,
    #[serde(default)]
    pub company_id: Option<RecordId>,
}

/// A role a person holds at a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobTitle {
    pub id: RecordId,
    pub job_title: String,
    #[serde(default)]
    pub role_type: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

/// A person in the venture-capital directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub job_titles: Vec<JobTitle>,
}

impl Person {
    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
