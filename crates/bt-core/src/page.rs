//! Page composition

use crate::sections::SectionId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageBlock {
    /// Sticky header carrying the navigation disclosure
    Header,
    Section(SectionId),
}

const PAGE: [PageBlock; 13] = [
    PageBlock::Header,
    PageBlock::Section(SectionId::Hero),
    PageBlock::Section(SectionId::Problem),
    PageBlock::Section(SectionId::Solution),
    PageBlock::Section(SectionId::HowItWorks),
    PageBlock::Section(SectionId::WhyItMatters),
    PageBlock::Section(SectionId::UseCases),
    PageBlock::Section(SectionId::Product),
    PageBlock::Section(SectionId::Security),
    PageBlock::Section(SectionId::EnterprisePlatform),
    PageBlock::Section(SectionId::Vision),
    PageBlock::Section(SectionId::FinalCta),
    PageBlock::Section(SectionId::Footer),
];

/// Header, then every section top to bottom
pub fn compose() -> &'static [PageBlock] {
    &PAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_first() {
        assert_eq!(compose().first(), Some(&PageBlock::Header));
        assert_eq!(
            compose().iter().filter(|b| **b == PageBlock::Header).count(),
            1
        );
    }

    #[test]
    fn test_sections_in_order() {
        let sections: Vec<SectionId> = compose()
            .iter()
            .filter_map(|b| match b {
                PageBlock::Section(id) => Some(*id),
                PageBlock::Header => None,
            })
            .collect();
        assert_eq!(sections, SectionId::ALL.to_vec());
    }

    #[test]
    fn test_compose_is_stable() {
        assert_eq!(compose(), compose());
    }
}
