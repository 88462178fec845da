//! Wire models for complaint records returned by the reporting API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One citizen-submitted complaint as returned by `GET /_demo/reports`.
///
/// Most fields are opaque display data passed straight through to the
/// console; only `status` and `documents` are interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub id: i64,
    #[serde(default)]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub complaint_type: Option<String>,
    #[serde(default)]
    pub main_category: Option<String>,
    #[serde(default)]
    pub fraud_type: Option<String>,
    #[serde(default)]
    pub sub_type: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email_id: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Evidence references; see [`DocumentsField`] for the accepted shapes.
    #[serde(default)]
    pub documents: DocumentsField,
    #[serde(default)]
    pub user: Option<UserRef>,
    /// Additional answers captured during intake, as an opaque JSON string.
    #[serde(default)]
    pub data: Option<String>,
}

impl Complaint {
    /// Parsed status for aggregation.
    pub fn complaint_status(&self) -> ComplaintStatus {
        ComplaintStatus::parse(&self.status)
    }
}

/// Reference to the reporting user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    pub wa_id: String,
}

/// The raw `documents` field of a complaint.
///
/// Older records store a JSON-encoded string (`"[\"a.png\"]"`), newer ones an
/// actual array, and some records omit the field or carry `null`. Modelling
/// the three shapes explicitly keeps the type-checking in one place;
/// [`crate::documents::parse_documents`] flattens all of them into a single
/// token sequence for downstream consumers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentsField {
    /// Field missing or `null`.
    #[default]
    Absent,
    /// Already-structured sequence of document tokens.
    Decoded(Vec<String>),
    /// A single string expected to hold a JSON array of tokens.
    Encoded(String),
}

/// Recognized complaint statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintStatus {
    Draft,
    Submitted,
    InProgress,
    Resolved,
    /// Anything the console does not recognize; counted only in the total.
    Unknown,
}

impl ComplaintStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "draft" => Self::Draft,
            "submitted" => Self::Submitted,
            "in_progress" => Self::InProgress,
            "resolved" => Self::Resolved,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Unknown => "Unknown",
        }
    }
}

/// Aggregate status counts over a complaint list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub total: usize,
    pub draft: usize,
    pub submitted: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl StatusSummary {
    /// Count complaints per recognized status. Unrecognized statuses only
    /// contribute to the total.
    pub fn summarize(complaints: &[Complaint]) -> Self {
        let mut summary = Self {
            total: complaints.len(),
            ..Default::default()
        };
        for complaint in complaints {
            match complaint.complaint_status() {
                ComplaintStatus::Draft => summary.draft += 1,
                ComplaintStatus::Submitted => summary.submitted += 1,
                ComplaintStatus::InProgress => summary.in_progress += 1,
                ComplaintStatus::Resolved => summary.resolved += 1,
                ComplaintStatus::Unknown => {}
            }
        }
        summary
    }
}
