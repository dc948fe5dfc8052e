//! Section identities

use crate::content::{catalog, NavTarget, SectionHeading, Theme};
use serde::Serialize;

/// The twelve content sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectionId {
    Hero,
    Problem,
    Solution,
    HowItWorks,
    WhyItMatters,
    UseCases,
    Product,
    Security,
    EnterprisePlatform,
    Vision,
    FinalCta,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 12] = [
        SectionId::Hero,
        SectionId::Problem,
        SectionId::Solution,
        SectionId::HowItWorks,
        SectionId::WhyItMatters,
        SectionId::UseCases,
        SectionId::Product,
        SectionId::Security,
        SectionId::EnterprisePlatform,
        SectionId::Vision,
        SectionId::FinalCta,
        SectionId::Footer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SectionId::Hero => "Hero",
            SectionId::Problem => "Problem",
            SectionId::Solution => "Solution",
            SectionId::HowItWorks => "How It Works",
            SectionId::WhyItMatters => "Why It Matters",
            SectionId::UseCases => "Use Cases",
            SectionId::Product => "Product",
            SectionId::Security => "Security",
            SectionId::EnterprisePlatform => "Enterprise Platform",
            SectionId::Vision => "Vision",
            SectionId::FinalCta => "Final Call to Action",
            SectionId::Footer => "Footer",
        }
    }

    /// Element id a header link can jump to
    pub fn anchor(&self) -> Option<&'static str> {
        NavTarget::ALL
            .iter()
            .find(|target| SectionId::for_target(**target) == *self)
            .map(NavTarget::anchor)
    }

    /// Sections alternate light and dark backgrounds
    pub fn theme(&self) -> Theme {
        match self {
            SectionId::Problem
            | SectionId::HowItWorks
            | SectionId::UseCases
            | SectionId::Security
            | SectionId::Vision => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Shared heading block, for sections that have one
    pub fn heading(&self) -> Option<SectionHeading> {
        match self {
            SectionId::Problem => Some(catalog::PROBLEM_HEADING),
            SectionId::Solution => Some(catalog::SOLUTION_HEADING),
            SectionId::HowItWorks => Some(catalog::ARCHITECTURE_HEADING),
            SectionId::WhyItMatters => Some(catalog::WHY_HEADING),
            SectionId::UseCases => Some(catalog::USE_CASES_HEADING),
            SectionId::Product => Some(catalog::PRODUCT_HEADING),
            SectionId::Security => Some(catalog::SECURITY_HEADING),
            SectionId::EnterprisePlatform => Some(catalog::PLATFORM_HEADING),
            SectionId::Vision => Some(catalog::VISION_HEADING),
            SectionId::Hero | SectionId::FinalCta | SectionId::Footer => None,
        }
    }

    /// Section that hosts the anchor for `target`
    pub fn for_target(target: NavTarget) -> SectionId {
        match target {
            NavTarget::Platform => SectionId::Product,
            NavTarget::Architecture => SectionId::HowItWorks,
            NavTarget::UseCases => SectionId::UseCases,
            NavTarget::Docs => SectionId::Footer,
            NavTarget::Pricing => SectionId::EnterprisePlatform,
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_target_resolves_to_one_section() {
        for target in NavTarget::ALL {
            let hosts: Vec<SectionId> = SectionId::ALL
                .into_iter()
                .filter(|s| s.anchor() == Some(target.anchor()))
                .collect();
            assert_eq!(hosts, vec![SectionId::for_target(target)], "{}", target);
        }
    }

    #[test]
    fn test_anchor_follows_target_mapping() {
        for section in SectionId::ALL {
            let expected = NavTarget::ALL
                .into_iter()
                .find(|t| SectionId::for_target(*t) == section)
                .map(|t| t.anchor());
            assert_eq!(section.anchor(), expected, "{}", section);
        }
        assert_eq!(SectionId::Footer.anchor(), Some("docs"));
        assert_eq!(SectionId::Hero.anchor(), None);
    }

    #[test]
    fn test_anchors_unique() {
        let mut anchors: Vec<&str> = SectionId::ALL.iter().filter_map(|s| s.anchor()).collect();
        let total = anchors.len();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), total);
    }

    #[test]
    fn test_heading_theme_matches_section() {
        for section in SectionId::ALL {
            if let Some(heading) = section.heading() {
                assert_eq!(heading.theme, section.theme(), "{}", section);
            }
        }
    }

    #[test]
    fn test_light_dark_alternate_after_hero() {
        for pair in SectionId::ALL[1..11].windows(2) {
            assert_ne!(pair[0].theme(), pair[1].theme(), "{} / {}", pair[0], pair[1]);
        }
    }
}
