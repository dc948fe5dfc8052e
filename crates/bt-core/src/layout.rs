//! Responsive layout mapping
//!
//! Each section is described once. The narrow and wide arrangements are
//! derived from the same table, keyed by the display-width classification
//! the browser supplies.

use crate::sections::SectionId;
use serde::{Deserialize, Serialize};

/// Display-width classification, decided by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    /// Class prefix for utilities that only apply in this class
    pub fn prefix(&self) -> &'static str {
        match self {
            ViewportClass::Narrow => "",
            ViewportClass::Wide => "lg:",
        }
    }
}

/// Card grid column count for a section
pub fn grid_columns(section: SectionId, viewport: ViewportClass) -> u8 {
    use SectionId::*;
    use ViewportClass::*;

    match (section, viewport) {
        (Footer, Narrow) => 2,
        (_, Narrow) => 1,
        (Problem | Solution, Wide) => 2,
        (UseCases | Product, Wide) => 2,
        (WhyItMatters | Security, Wide) => 3,
        (Vision, Wide) => 4,
        (Footer, Wide) => 4,
        (Hero | HowItWorks | EnterprisePlatform | FinalCta, Wide) => 1,
    }
}

/// Grid utility classes covering both viewport classes
pub fn responsive_grid(section: SectionId) -> String {
    grid_classes(|v| grid_columns(section, v))
}

/// Split `items` into a first row of `first_row` cards and the remainder.
///
/// A short slice yields an empty second row.
pub fn split_rows<T>(items: &[T], first_row: usize) -> (&[T], &[T]) {
    items.split_at(first_row.min(items.len()))
}

/// Brick arrangement: a full first row at the section's wide column count,
/// then the remainder.
pub fn brick_rows<T>(section: SectionId, items: &[T]) -> (&[T], &[T]) {
    split_rows(items, grid_columns(section, ViewportClass::Wide) as usize)
}

/// Column count of a brick arrangement's second row holding `cards` cards.
///
/// On wide displays the row is as wide as its cards, never wider than the
/// first row.
pub fn second_row_columns(section: SectionId, cards: usize, viewport: ViewportClass) -> u8 {
    let first = grid_columns(section, viewport);
    match viewport {
        ViewportClass::Narrow => first,
        ViewportClass::Wide => (cards.max(1).min(first as usize)) as u8,
    }
}

/// Grid utility classes for a brick arrangement's second row
pub fn second_row_grid(section: SectionId, cards: usize) -> String {
    grid_classes(|v| second_row_columns(section, cards, v))
}

fn grid_classes(columns: impl Fn(ViewportClass) -> u8) -> String {
    [ViewportClass::Narrow, ViewportClass::Wide]
        .iter()
        .map(|v| format!("{}grid-cols-{}", v.prefix(), columns(*v)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_is_single_column() {
        for section in SectionId::ALL {
            if section == SectionId::Footer {
                continue;
            }
            assert_eq!(grid_columns(section, ViewportClass::Narrow), 1);
        }
    }

    #[test]
    fn test_footer_pairs_columns_on_narrow() {
        assert_eq!(grid_columns(SectionId::Footer, ViewportClass::Narrow), 2);
        assert_eq!(responsive_grid(SectionId::Footer), "grid-cols-2 lg:grid-cols-4");
    }

    #[test]
    fn test_responsive_grid_classes() {
        assert_eq!(responsive_grid(SectionId::Vision), "grid-cols-1 lg:grid-cols-4");
        assert_eq!(responsive_grid(SectionId::Security), "grid-cols-1 lg:grid-cols-3");
        assert_eq!(responsive_grid(SectionId::Hero), "grid-cols-1 lg:grid-cols-1");
    }

    #[test]
    fn test_split_rows() {
        let cards = [1, 2, 3, 4, 5];
        let (top, bottom) = split_rows(&cards, 3);
        assert_eq!(top, &[1, 2, 3]);
        assert_eq!(bottom, &[4, 5]);

        let (top, bottom) = split_rows(&cards[..2], 3);
        assert_eq!(top, &[1, 2]);
        assert!(bottom.is_empty());
    }

    #[test]
    fn test_brick_rows_follow_wide_columns() {
        let cards = [1, 2, 3, 4, 5];
        let (top, bottom) = brick_rows(SectionId::Security, &cards);
        assert_eq!(top, &[1, 2, 3]);
        assert_eq!(bottom, &[4, 5]);
    }

    #[test]
    fn test_second_row_grid() {
        assert_eq!(
            second_row_grid(SectionId::WhyItMatters, 2),
            "grid-cols-1 lg:grid-cols-2"
        );
        assert_eq!(
            second_row_columns(SectionId::Security, 0, ViewportClass::Wide),
            1
        );
        assert_eq!(
            second_row_columns(SectionId::Security, 7, ViewportClass::Wide),
            3
        );
    }
}
