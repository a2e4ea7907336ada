//! Hire request models and the response state machine.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Format SQLite uses for `CURRENT_TIMESTAMP` (UTC)
pub const HIRE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChefHire {
    pub id: i64,
    /// Chef profile id (`Chefs.id`)
    pub chef_id: i64,
    pub consumer_id: i64,
    pub hire_date: String,
    pub response: Option<String>,
    pub message: Option<String>,
}

impl ChefHire {
    pub fn status(&self) -> HireStatus {
        HireStatus::from_response(self.response.as_deref())
    }
}

/// Lifecycle of a hire request. `Pending` is stored as a NULL response.
/// Any other text found in the column is kept as `Other` and counts as answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HireStatus {
    Pending,
    Accepted,
    Declined,
    Other(String),
}

impl HireStatus {
    pub fn from_response(response: Option<&str>) -> Self {
        match response {
            None => Self::Pending,
            Some("Accepted") => Self::Accepted,
            Some("Declined") => Self::Declined,
            Some(other) => Self::Other(other.to_string()),
        }
    }

    /// Apply a chef's response; only pending requests can be answered
    pub fn respond(&self, response: HireResponse) -> Option<HireStatus> {
        match (self, response) {
            (Self::Pending, HireResponse::Accept) => Some(Self::Accepted),
            (Self::Pending, HireResponse::Decline) => Some(Self::Declined),
            _ => None,
        }
    }

    /// Value written to the `response` column
    pub fn as_response(&self) -> Option<&str> {
        match self {
            Self::Pending => None,
            Self::Accepted => Some("Accepted"),
            Self::Declined => Some("Declined"),
            Self::Other(text) => Some(text.as_str()),
        }
    }
}

impl std::fmt::Display for HireStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Accepted => write!(f, "accepted"),
            Self::Declined => write!(f, "declined"),
            Self::Other(text) => write!(f, "answered: {}", text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HireResponse {
    Accept,
    Decline,
}

/// A hire request as seen by the chef it is addressed to
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HireNotification {
    pub hire_id: i64,
    pub consumer_username: String,
    pub hire_date: String,
    pub response: Option<String>,
    pub message: Option<String>,
}

impl HireNotification {
    pub fn status(&self) -> HireStatus {
        HireStatus::from_response(self.response.as_deref())
    }

    pub fn hired_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.hire_date, HIRE_DATE_FORMAT).ok()
    }
}

/// A hire request as seen by the consumer who sent it
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SentHire {
    pub hire_id: i64,
    pub chef_id: i64,
    /// None when the chef id never matched a profile
    pub chef_username: Option<String>,
    pub hire_date: String,
    pub response: Option<String>,
}

impl SentHire {
    pub fn status(&self) -> HireStatus {
        HireStatus::from_response(self.response.as_deref())
    }
}
