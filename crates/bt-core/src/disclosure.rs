//! Navigation disclosure
//!
//! The header shows its links inline on wide displays. On narrow displays
//! they collapse behind a toggle button that opens an overlay panel.
//! [`Disclosure`] owns the single "menu open" flag; [`render`] turns that
//! flag plus the host's [`ViewportClass`] into what should be drawn.
//!
//! ```text
//! Collapsed --toggle--> Expanded
//! Expanded  --toggle--> Collapsed
//! Expanded  --select--> Collapsed
//! Collapsed --select--> Collapsed
//! ```

use crate::content::{catalog, CallToAction, NavTarget};
use crate::layout::ViewportClass;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DisclosureState {
    #[default]
    Collapsed,
    Expanded,
}

impl DisclosureState {
    pub fn is_open(&self) -> bool {
        matches!(self, DisclosureState::Expanded)
    }
}

impl From<bool> for DisclosureState {
    fn from(is_open: bool) -> Self {
        if is_open {
            DisclosureState::Expanded
        } else {
            DisclosureState::Collapsed
        }
    }
}

impl std::fmt::Display for DisclosureState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisclosureState::Collapsed => write!(f, "collapsed"),
            DisclosureState::Expanded => write!(f, "expanded"),
        }
    }
}

/// Menu state for one header instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    state: DisclosureState,
}

impl Disclosure {
    /// Starts collapsed
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DisclosureState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn toggle(&mut self) {
        self.state = (!self.is_open()).into();
        debug!(state = %self.state, "navigation toggled");
    }

    /// Activate `target` and close the menu.
    ///
    /// Returns the anchor to hand to the browser's link activation.
    pub fn select(&mut self, target: NavTarget) -> &'static str {
        self.state = DisclosureState::Collapsed;
        debug!(target = %target, "navigation target selected");
        target.href()
    }

    pub fn render(&self, viewport: ViewportClass) -> NavPresentation {
        render(self.is_open(), viewport)
    }
}

/// Which glyph the toggle button shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToggleGlyph {
    /// Hamburger, menu is closed
    Open,
    /// Cross, menu is open
    Close,
}

impl ToggleGlyph {
    pub fn aria_label(&self) -> &'static str {
        match self {
            ToggleGlyph::Open => "Open menu",
            ToggleGlyph::Close => "Close menu",
        }
    }

    /// SVG path data for a 24x24 stroked icon
    pub fn path(&self) -> &'static str {
        match self {
            ToggleGlyph::Open => "M4 6h16M4 12h16M4 18h16",
            ToggleGlyph::Close => "M6 18L18 6M6 6l12 12",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Overlay {
    pub links: &'static [NavTarget],
    pub actions: &'static [CallToAction],
}

/// What the header draws for a given state and display width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavPresentation {
    Inline {
        links: &'static [NavTarget],
        actions: &'static [CallToAction],
    },
    Compact {
        toggle: ToggleGlyph,
        overlay: Option<Overlay>,
    },
}

impl NavPresentation {
    pub fn overlay(&self) -> Option<&Overlay> {
        match self {
            NavPresentation::Inline { .. } => None,
            NavPresentation::Compact { overlay, .. } => overlay.as_ref(),
        }
    }

    /// Links reachable without further interaction
    pub fn visible_links(&self) -> &'static [NavTarget] {
        match *self {
            NavPresentation::Inline { links, .. } => links,
            NavPresentation::Compact { overlay, .. } => overlay.map(|o| o.links).unwrap_or(&[]),
        }
    }

    pub fn visible_actions(&self) -> &'static [CallToAction] {
        match *self {
            NavPresentation::Inline { actions, .. } => actions,
            NavPresentation::Compact { overlay, .. } => overlay.map(|o| o.actions).unwrap_or(&[]),
        }
    }

    /// The toggle control, absent on wide displays
    pub fn toggle_glyph(&self) -> Option<ToggleGlyph> {
        match *self {
            NavPresentation::Inline { .. } => None,
            NavPresentation::Compact { toggle, .. } => Some(toggle),
        }
    }
}

/// Pure presentation of the disclosure.
///
/// On wide displays `is_open` has no effect.
pub fn render(is_open: bool, viewport: ViewportClass) -> NavPresentation {
    match viewport {
        ViewportClass::Wide => NavPresentation::Inline {
            links: catalog::NAV_LINKS,
            actions: catalog::HEADER_ACTIONS,
        },
        ViewportClass::Narrow if is_open => NavPresentation::Compact {
            toggle: ToggleGlyph::Close,
            overlay: Some(Overlay {
                links: catalog::NAV_LINKS,
                actions: catalog::HEADER_ACTIONS,
            }),
        },
        ViewportClass::Narrow => NavPresentation::Compact {
            toggle: ToggleGlyph::Open,
            overlay: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expanded() -> Disclosure {
        let mut d = Disclosure::new();
        d.toggle();
        d
    }

    #[test]
    fn test_starts_collapsed() {
        let d = Disclosure::new();
        assert_eq!(d.state(), DisclosureState::Collapsed);
        assert!(!d.is_open());
    }

    #[test]
    fn test_toggle_parity() {
        for n in 0..16 {
            let mut d = Disclosure::new();
            for _ in 0..n {
                d.toggle();
            }
            let expected = if n % 2 == 0 {
                DisclosureState::Collapsed
            } else {
                DisclosureState::Expanded
            };
            assert_eq!(d.state(), expected, "after {} toggles", n);
        }
    }

    #[test]
    fn test_select_closes_from_expanded() {
        for target in NavTarget::ALL {
            let mut d = expanded();
            let href = d.select(target);
            assert_eq!(d.state(), DisclosureState::Collapsed);
            assert_eq!(href, target.href());
        }
    }

    #[test]
    fn test_select_from_collapsed_is_noop() {
        for target in NavTarget::ALL {
            let mut d = Disclosure::new();
            d.select(target);
            assert_eq!(d, Disclosure::new());
        }
    }

    #[test]
    fn test_render_is_referentially_transparent() {
        for is_open in [false, true] {
            for viewport in [ViewportClass::Narrow, ViewportClass::Wide] {
                assert_eq!(render(is_open, viewport), render(is_open, viewport));
            }
        }
    }

    #[test]
    fn test_toggle_opens_overlay() {
        let mut d = Disclosure::new();
        d.toggle();
        assert_eq!(d.state(), DisclosureState::Expanded);

        let overlay = d
            .render(ViewportClass::Narrow)
            .overlay()
            .copied()
            .expect("overlay should be shown");
        assert_eq!(overlay.links, &NavTarget::ALL);
        assert_eq!(overlay.actions, catalog::HEADER_ACTIONS);
    }

    #[test]
    fn test_toggle_hides_overlay() {
        let mut d = expanded();
        d.toggle();
        assert_eq!(d.state(), DisclosureState::Collapsed);
        assert!(d.render(ViewportClass::Narrow).overlay().is_none());
    }

    #[test]
    fn test_select_pricing_collapses() {
        let mut d = expanded();
        assert_eq!(d.select(NavTarget::Pricing), "#pricing");
        assert_eq!(d.state(), DisclosureState::Collapsed);
    }

    #[test]
    fn test_wide_ignores_open_flag() {
        let closed = render(false, ViewportClass::Wide);
        let open = render(true, ViewportClass::Wide);
        assert_eq!(closed, open);
        assert!(open.overlay().is_none());
        assert_eq!(open.visible_links(), &NavTarget::ALL);
    }

    #[test]
    fn test_narrow_collapsed_shows_only_toggle() {
        let presentation = render(false, ViewportClass::Narrow);
        assert_eq!(
            presentation,
            NavPresentation::Compact {
                toggle: ToggleGlyph::Open,
                overlay: None,
            }
        );
        assert!(presentation.visible_links().is_empty());
        assert!(presentation.visible_actions().is_empty());
    }

    #[test]
    fn test_glyph_follows_state() {
        let glyph = |is_open| render(is_open, ViewportClass::Narrow).toggle_glyph();
        assert_eq!(glyph(false), Some(ToggleGlyph::Open));
        assert_eq!(glyph(true), Some(ToggleGlyph::Close));
        assert_eq!(render(true, ViewportClass::Wide).toggle_glyph(), None);
        assert_eq!(ToggleGlyph::Close.aria_label(), "Close menu");
    }
}
