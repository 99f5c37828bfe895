//! Source-type affinity per evidence focus.

use prospect_core::models::{EvidenceFocus, HopType};

/// How well `hop` tends to serve a hypothesis with the given focus, in [0, 1].
///
/// Hiring sources surface capability, news and press surface procurement
/// activity, tender portals surface validated tenders.
pub fn affinity(focus: EvidenceFocus, hop: HopType) -> f64 {
    use EvidenceFocus::*;
    use HopType::*;
    match (focus, hop) {
        (Capability, CareersPage | JobBoard) => 0.9,
        (Capability, OfficialSite) => 0.7,
        (Capability, PartnerDirectory) => 0.6,
        (Capability, AnnualReport) => 0.5,
        (Capability, NewsArticle | PressRelease) => 0.4,
        (Capability, TenderPortal) => 0.2,

        (Procurement, NewsArticle | PressRelease) => 0.8,
        (Procurement, AnnualReport | TenderPortal) => 0.6,
        (Procurement, OfficialSite | JobBoard | PartnerDirectory) => 0.5,
        (Procurement, CareersPage) => 0.4,

        (Validation, TenderPortal) => 1.0,
        (Validation, PressRelease) => 0.6,
        (Validation, NewsArticle) => 0.5,
        (Validation, OfficialSite | AnnualReport) => 0.4,
        (Validation, PartnerDirectory) => 0.3,
        (Validation, CareersPage | JobBoard) => 0.2,
    }
}
