use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ProspectError;

/// Category of external information source probed by one hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HopType {
    AnnualReport,
    CareersPage,
    JobBoard,
    NewsArticle,
    OfficialSite,
    PartnerDirectory,
    PressRelease,
    TenderPortal,
}

impl HopType {
    /// Every hop type, ordered by identifier.
    pub const ALL: [HopType; 8] = [
        HopType::AnnualReport,
        HopType::CareersPage,
        HopType::JobBoard,
        HopType::NewsArticle,
        HopType::OfficialSite,
        HopType::PartnerDirectory,
        HopType::PressRelease,
        HopType::TenderPortal,
    ];

    /// Stable identifier used as map key and storage value.
    pub fn as_str(self) -> &'static str {
        match self {
            HopType::AnnualReport => "annual_report",
            HopType::CareersPage => "careers_page",
            HopType::JobBoard => "job_board",
            HopType::NewsArticle => "news_article",
            HopType::OfficialSite => "official_site",
            HopType::PartnerDirectory => "partner_directory",
            HopType::PressRelease => "press_release",
            HopType::TenderPortal => "tender_portal",
        }
    }
}

impl fmt::Display for HopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HopType {
    type Err = ProspectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HopType::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| ProspectError::InvalidHopType {
                value: s.to_string(),
            })
    }
}
