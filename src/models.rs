//! Frontend Models
//!
//! League record and status enum.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a league
///
/// Only archive/unarchive transitions ever touch this; reordering
/// never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeagueStatus {
    #[serde(rename = "Pre-Draft")]
    PreDraft,
    #[serde(rename = "Draft Live")]
    DraftLive,
    #[serde(rename = "Post-Draft")]
    PostDraft,
    Archived,
}

impl LeagueStatus {
    /// Display text for the status badge
    pub fn label(&self) -> &'static str {
        match self {
            LeagueStatus::PreDraft => "Pre-Draft",
            LeagueStatus::DraftLive => "Draft Live",
            LeagueStatus::PostDraft => "Post-Draft",
            LeagueStatus::Archived => "Archived",
        }
    }

    /// Badge style modifier: live, pending, archived, or default
    pub fn css_class(&self) -> &'static str {
        match self {
            LeagueStatus::DraftLive => "live",
            LeagueStatus::PreDraft => "pending",
            LeagueStatus::Archived => "archived",
            LeagueStatus::PostDraft => "",
        }
    }
}

/// League data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    /// Unique identifier, stable for the record's lifetime
    pub id: String,
    /// Display name
    pub name: String,
    /// Logo asset path
    pub logo: String,
    /// Hosting provider, e.g. "ESPN"
    pub provider: String,
    /// Season year
    pub year: String,
    /// Current lifecycle status
    pub status: LeagueStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_badge_classes() {
        assert_eq!(LeagueStatus::DraftLive.css_class(), "live");
        assert_eq!(LeagueStatus::PreDraft.css_class(), "pending");
        assert_eq!(LeagueStatus::Archived.css_class(), "archived");
        assert_eq!(LeagueStatus::PostDraft.css_class(), "");
    }

    #[test]
    fn status_serializes_as_display_label() {
        let json = serde_json::to_string(&LeagueStatus::DraftLive).unwrap();
        assert_eq!(json, "\"Draft Live\"");
        let back: LeagueStatus = serde_json::from_str("\"Pre-Draft\"").unwrap();
        assert_eq!(back, LeagueStatus::PreDraft);
    }
}
