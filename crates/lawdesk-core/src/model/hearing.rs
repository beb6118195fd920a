use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of order the court is expected to take up at a hearing
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum CourtOrderType {
    #[default]
    Evidence,
    Cross,
    Adjournment,
    Arguments,
    Judgment,
}

impl fmt::Display for CourtOrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CourtOrderType::Evidence => "Evidence",
            CourtOrderType::Cross => "Cross",
            CourtOrderType::Adjournment => "Adjournment",
            CourtOrderType::Arguments => "Arguments",
            CourtOrderType::Judgment => "Judgment",
        };
        f.write_str(name)
    }
}

/// A scheduled court event owned by a case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hearing {
    pub id: String,
    /// 1-based, assigned once and never renumbered
    pub hearing_number: u32,
    pub date: DateTime<Utc>,
    pub court_order_type: CourtOrderType,
    pub notes: String,
    #[serde(default)]
    pub assigned_lawyer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<String>,
    pub case_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for scheduling a hearing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingDraft {
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub court_order_type: CourtOrderType,
    pub notes: String,
    /// Defaults to the case's assigned lawyer
    #[serde(default)]
    pub assigned_lawyer_id: Option<String>,
    #[serde(default)]
    pub previous_comments: Option<String>,
    #[serde(default)]
    pub next_steps: Option<String>,
}

impl HearingDraft {
    pub fn new(date: DateTime<Utc>, notes: impl Into<String>) -> Self {
        Self {
            date,
            court_order_type: CourtOrderType::default(),
            notes: notes.into(),
            assigned_lawyer_id: None,
            previous_comments: None,
            next_steps: None,
        }
    }

    pub fn with_order_type(mut self, order: CourtOrderType) -> Self {
        self.court_order_type = order;
        self
    }
}

/// Partial update of a hearing
///
/// For the optional text fields, `Some("")` clears the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HearingPatch {
    pub date: Option<DateTime<Utc>>,
    pub court_order_type: Option<CourtOrderType>,
    pub notes: Option<String>,
    pub previous_comments: Option<String>,
    pub next_steps: Option<String>,
}

/// Trim optional free text, mapping blank input to `None`
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
