use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority tag attached to every lead. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeadCategory {
    Hot,
    Warm,
    Cold,
}

impl LeadCategory {
    pub const ALL: [LeadCategory; 3] = [LeadCategory::Hot, LeadCategory::Warm, LeadCategory::Cold];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadCategory::Hot => "HOT",
            LeadCategory::Warm => "WARM",
            LeadCategory::Cold => "COLD",
        }
    }

    /// Short follow-up hint shown next to the category count.
    pub fn action_hint(&self) -> &'static str {
        match self {
            LeadCategory::Hot => "call immediately",
            LeadCategory::Warm => "good prospects",
            LeadCategory::Cold => "follow-up",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            LeadCategory::Hot => "🔥",
            LeadCategory::Warm => "🟡",
            LeadCategory::Cold => "🔵",
        }
    }
}

impl fmt::Display for LeadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown lead category '{}', expected HOT, WARM or COLD", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for LeadCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HOT" => Ok(LeadCategory::Hot),
            "WARM" => Ok(LeadCategory::Warm),
            "COLD" => Ok(LeadCategory::Cold),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// A candidate customer contact.
///
/// Field order is the export column order; the category is written under
/// the `score` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(rename = "score")]
    pub category: LeadCategory,
    pub name: String,
    pub phone: String,
    /// Empty when the lead has no known email.
    pub email: String,
    pub address: String,
    pub distance_miles: u32,
    pub reason: String,
    pub source: String,
    pub posted_date: String,
}

impl Lead {
    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }
}

/// Per-category lead counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub hot: usize,
    pub warm: usize,
    pub cold: usize,
}

impl CategoryBreakdown {
    pub fn from_leads(leads: &[Lead]) -> Self {
        leads.iter().fold(Self::default(), |mut acc, lead| {
            match lead.category {
                LeadCategory::Hot => acc.hot += 1,
                LeadCategory::Warm => acc.warm += 1,
                LeadCategory::Cold => acc.cold += 1,
            }
            acc
        })
    }

    pub fn count(&self, category: LeadCategory) -> usize {
        match category {
            LeadCategory::Hot => self.hot,
            LeadCategory::Warm => self.warm,
            LeadCategory::Cold => self.cold,
        }
    }

    pub fn total(&self) -> usize {
        self.hot + self.warm + self.cold
    }
}
