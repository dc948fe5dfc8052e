//! Home page

use bt_core::page::{compose, PageBlock};
use leptos::*;
use crate::components::SiteHeader;
use crate::sections::PageSection;

#[component]
pub fn HomePage() -> impl IntoView {
    compose()
        .iter()
        .map(|block| match *block {
            PageBlock::Header => view! { <SiteHeader/> }.into_view(),
            PageBlock::Section(id) => view! { <PageSection section=id/> }.into_view(),
        })
        .collect_view()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use bt_core::content::catalog;
    use bt_core::{layout, NavTarget, SectionId, Theme};

    fn render_home() -> String {
        leptos::ssr::render_to_string(|| view! { <HomePage/> }).to_string()
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("{} missing from rendered page", needle))
    }

    #[test]
    fn test_sections_render_in_order() {
        let html = render_home();
        let header = position(&html, "<header");
        let positions: Vec<usize> = SectionId::ALL
            .iter()
            .map(|s| position(&html, &format!("data-section=\"{}\"", s.name())))
            .collect();

        assert!(header < positions[0]);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_nav_anchors_resolve() {
        let html = render_home();
        for target in NavTarget::ALL {
            assert!(html.contains(&format!("href=\"{}\"", target.href())), "{}", target);
            assert!(html.contains(&format!("id=\"{}\"", target.anchor())), "{}", target);
        }
    }

    #[test]
    fn test_menu_starts_collapsed() {
        let html = render_home();
        assert!(html.contains("Open menu"));
        assert!(!html.contains("Close menu"));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[test]
    fn test_grids_follow_layout_table() {
        let html = render_home();
        let footer = format!("grid {} gap-10", layout::responsive_grid(SectionId::Footer));
        assert!(html.contains(&footer), "{}", footer);

        let (_, bottom) = layout::brick_rows(SectionId::Security, catalog::SECURITY_CARDS);
        let second_row = format!(
            "grid {} gap-5 w-full lg:w-2/3",
            layout::second_row_grid(SectionId::Security, bottom.len()),
        );
        assert!(html.contains(&second_row), "{}", second_row);
    }

    #[test]
    fn test_brick_tiles_use_section_theme() {
        let html = render_home();
        for (section, next) in [
            (SectionId::WhyItMatters, SectionId::UseCases),
            (SectionId::Security, SectionId::EnterprisePlatform),
        ] {
            let start = position(&html, &format!("data-section=\"{}\"", section.name()));
            let end = position(&html, &format!("data-section=\"{}\"", next.name()));
            let block = &html[start..end];
            let other = match section.theme() {
                Theme::Light => Theme::Dark,
                Theme::Dark => Theme::Light,
            };
            assert!(block.contains(section.theme().card()), "{}", section);
            assert!(!block.contains(other.card()), "{}", section);
        }
    }

    #[test]
    fn test_copy_rendered() {
        let html = render_home();
        assert!(html.contains(catalog::HERO_BADGE));
        for card in catalog::SECURITY_CARDS {
            assert!(html.contains(card.title), "{}", card.title);
        }
        for logo in catalog::TRUST_LOGOS {
            assert!(html.contains(logo), "{}", logo);
        }
    }
}
