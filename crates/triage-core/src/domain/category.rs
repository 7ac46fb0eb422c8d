//! RequestCategory - the closed set of request classifications.
//!
//! Handlers decide capability with an exhaustive `match` over this enum, so a
//! new variant fails to compile until every handler has been revisited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::ParseCategoryError;

/// Classification of a customer request.
///
/// Equality is variant identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestCategory {
    Complaint,
    Question,
    UpdateInformation,
    Malfunctioning,
    /// Refunds and replacements of delivered goods.
    Refund,
}

impl RequestCategory {
    /// Every category, in declaration order.
    pub const ALL: [RequestCategory; 5] = [
        RequestCategory::Complaint,
        RequestCategory::Question,
        RequestCategory::UpdateInformation,
        RequestCategory::Malfunctioning,
        RequestCategory::Refund,
    ];

    /// Stable snake_case name, accepted back by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestCategory::Complaint => "complaint",
            RequestCategory::Question => "question",
            RequestCategory::UpdateInformation => "update_information",
            RequestCategory::Malfunctioning => "malfunctioning",
            RequestCategory::Refund => "refund",
        }
    }
}

impl fmt::Display for RequestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "complaint" => Ok(RequestCategory::Complaint),
            "question" => Ok(RequestCategory::Question),
            "update_information" => Ok(RequestCategory::UpdateInformation),
            "malfunctioning" => Ok(RequestCategory::Malfunctioning),
            // replacement requests are filed as refunds
            "refund" | "replacement" => Ok(RequestCategory::Refund),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}
