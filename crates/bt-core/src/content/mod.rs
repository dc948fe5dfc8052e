//! Typed content records
//!
//! Every piece of copy on the page is one of the record types below, held in
//! a fixed-order `'static` slice in [`catalog`]. Records are never mutated
//! and have no identity beyond their position.

pub mod catalog;

use serde::Serialize;

/// Primary navigation destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NavTarget {
    Platform,
    Architecture,
    UseCases,
    Docs,
    Pricing,
}

impl NavTarget {
    /// Header order
    pub const ALL: [NavTarget; 5] = [
        NavTarget::Platform,
        NavTarget::Architecture,
        NavTarget::UseCases,
        NavTarget::Docs,
        NavTarget::Pricing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Platform => "Platform",
            NavTarget::Architecture => "Architecture",
            NavTarget::UseCases => "Use Cases",
            NavTarget::Docs => "Docs",
            NavTarget::Pricing => "Pricing",
        }
    }

    /// In-page anchor, lowercased label with spaces hyphenated
    pub fn anchor(&self) -> &'static str {
        match self {
            NavTarget::Platform => "platform",
            NavTarget::Architecture => "architecture",
            NavTarget::UseCases => "use-cases",
            NavTarget::Docs => "docs",
            NavTarget::Pricing => "pricing",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            NavTarget::Platform => "#platform",
            NavTarget::Architecture => "#architecture",
            NavTarget::UseCases => "#use-cases",
            NavTarget::Docs => "#docs",
            NavTarget::Pricing => "#pricing",
        }
    }
}

impl std::fmt::Display for NavTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Visual weight of a call-to-action link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Emphasis {
    /// Filled accent button
    Primary,
    /// Outlined button
    Secondary,
    /// Bare text link
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
    pub emphasis: Emphasis,
    pub trailing_icon: Option<Icon>,
}

/// Glyphs used across the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Icon {
    ArrowRight,
    BadgeCheck,
    Bell,
    Box,
    Building,
    Calendar,
    CalendarDays,
    CircleCheck,
    CircleX,
    Code,
    Cpu,
    CreditCard,
    Download,
    EyeOff,
    Factory,
    FileCheck,
    FileText,
    GitBranch,
    GitMerge,
    Globe,
    Hash,
    History,
    House,
    Layers,
    Leaf,
    Link,
    Lock,
    Map,
    Network,
    Package,
    Pill,
    Scan,
    Server,
    Shield,
    ShieldCheck,
    Target,
    Timer,
    Truck,
    Users,
    Wrench,
    Zap,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::ArrowRight => "→",
            Icon::BadgeCheck => "🏅",
            Icon::Bell => "🔔",
            Icon::Box => "📦",
            Icon::Building => "🏢",
            Icon::Calendar => "📅",
            Icon::CalendarDays => "🗓️",
            Icon::CircleCheck => "✅",
            Icon::CircleX => "❌",
            Icon::Code => "💻",
            Icon::Cpu => "🔲",
            Icon::CreditCard => "💳",
            Icon::Download => "⬇",
            Icon::EyeOff => "🙈",
            Icon::Factory => "🏭",
            Icon::FileCheck => "📄",
            Icon::FileText => "📝",
            Icon::GitBranch => "🌿",
            Icon::GitMerge => "🔀",
            Icon::Globe => "🌐",
            Icon::Hash => "#",
            Icon::History => "🕘",
            Icon::House => "🏠",
            Icon::Layers => "🧱",
            Icon::Leaf => "🍃",
            Icon::Link => "🔗",
            Icon::Lock => "🔒",
            Icon::Map => "🗺️",
            Icon::Network => "🕸️",
            Icon::Package => "📦",
            Icon::Pill => "💊",
            Icon::Scan => "🔍",
            Icon::Server => "🖥️",
            Icon::Shield => "🛡️",
            Icon::ShieldCheck => "🔏",
            Icon::Target => "🎯",
            Icon::Timer => "⏱️",
            Icon::Truck => "🚚",
            Icon::Users => "👥",
            Icon::Wrench => "🔧",
            Icon::Zap => "⚡",
        }
    }
}

/// Accent palette for tinted cards and numbered badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Blue,
    Sky,
    Violet,
    Orange,
    Green,
    Red,
}

impl Tone {
    pub fn surface(&self) -> &'static str {
        match self {
            Tone::Blue => "bg-[#EFF6FF]",
            Tone::Sky => "bg-[#F0F9FF]",
            Tone::Violet => "bg-[#F5F3FF]",
            Tone::Orange => "bg-[#FFF7ED]",
            Tone::Green => "bg-[#F0FDF4]",
            Tone::Red => "bg-[#FEF2F2]",
        }
    }

    pub fn border(&self) -> &'static str {
        match self {
            Tone::Blue => "border-[#BFDBFE]",
            Tone::Sky => "border-[#BAE6FD]",
            Tone::Violet => "border-[#DDD6FE]",
            Tone::Orange => "border-[#FED7AA]",
            Tone::Green => "border-[#BBF7D0]",
            Tone::Red => "border-[#FECACA]",
        }
    }

    /// Solid fill used for number badges
    pub fn badge(&self) -> &'static str {
        match self {
            Tone::Blue => "bg-[#2563EB]",
            Tone::Sky => "bg-[#0284C7]",
            Tone::Violet => "bg-[#7C3AED]",
            Tone::Orange => "bg-[#EA580C]",
            Tone::Green => "bg-[#16A34A]",
            Tone::Red => "bg-[#DC2626]",
        }
    }

    pub fn accent(&self) -> &'static str {
        match self {
            Tone::Blue => "text-[#2563EB]",
            Tone::Sky => "text-[#0284C7]",
            Tone::Violet => "text-[#7C3AED]",
            Tone::Orange => "text-[#EA580C]",
            Tone::Green => "text-[#16A34A]",
            Tone::Red => "text-[#DC2626]",
        }
    }
}

/// Background scheme of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn background(&self) -> &'static str {
        match self {
            Theme::Light => "bg-[#FAFAFA]",
            Theme::Dark => "bg-[#0C0C0F]",
        }
    }

    pub fn eyebrow(&self) -> &'static str {
        match self {
            Theme::Light => "text-[#2563EB]",
            Theme::Dark => "text-[#60A5FA]",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Theme::Light => "text-[#09090B]",
            Theme::Dark => "text-[#FAFAFA]",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            Theme::Light => "text-[#52525B]",
            Theme::Dark => "text-[#A1A1AA]",
        }
    }

    /// Card surface on top of the section background
    pub fn card(&self) -> &'static str {
        match self {
            Theme::Light => "bg-white border border-[#E4E4E7]",
            Theme::Dark => "bg-[#131316] border border-[#27272A]",
        }
    }
}

/// Opaque image location, either a bundled path or a remote URL.
///
/// Never validated or fetched here; the browser resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssetRef(pub &'static str);

impl AssetRef {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Bundled assets are served by the site itself
    pub fn is_bundled(&self) -> bool {
        self.0.starts_with('/')
    }
}

impl std::fmt::Display for AssetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Eyebrow, title and lede shared by most sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionHeading {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub lede: Option<&'static str>,
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TreeDepth {
    Root,
    Child,
    Grandchild,
}

impl TreeDepth {
    pub fn padding(&self) -> &'static str {
        match self {
            TreeDepth::Root => "px-4 py-2.5",
            TreeDepth::Child => "pl-10 pr-4 py-2.5",
            TreeDepth::Grandchild => "pl-[72px] pr-4 py-2.5",
        }
    }
}

/// One row of a token pack tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub icon: Icon,
    pub label: &'static str,
    pub depth: TreeDepth,
    pub highlight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenExample {
    pub icon: Icon,
    pub title: &'static str,
    pub nodes: &'static [TreeNode],
}

/// A labelled box in the hero's token visualization, positioned in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroNode {
    pub icon: Icon,
    pub label: &'static str,
    pub x: u16,
    pub y: u16,
}

/// One tier of the architecture stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayerDescriptor {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UseCase {
    pub icon: Icon,
    pub tone: Tone,
    pub title: &'static str,
    pub description: &'static str,
    pub image: AssetRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductShot {
    pub icon: Icon,
    pub title: &'static str,
    pub image: AssetRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisionPoint {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Negative,
    Positive,
}

impl Verdict {
    pub fn icon(&self) -> Icon {
        match self {
            Verdict::Negative => Icon::CircleX,
            Verdict::Positive => Icon::CircleCheck,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Verdict::Negative => Tone::Red,
            Verdict::Positive => Tone::Green,
        }
    }
}

/// A titled bullet list in the before/after comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub title: &'static str,
    pub verdict: Verdict,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_anchor_matches_label() {
        for target in NavTarget::ALL {
            let derived = target.label().to_lowercase().replace(' ', "-");
            assert_eq!(target.anchor(), derived);
            assert_eq!(target.href(), format!("#{}", derived));
        }
    }

    #[test]
    fn test_asset_ref_kind() {
        assert!(AssetRef("/images/hero.png").is_bundled());
        assert!(!AssetRef("https://images.unsplash.com/photo").is_bundled());
    }

    #[test]
    fn test_verdict_styling() {
        assert_eq!(Verdict::Negative.icon(), Icon::CircleX);
        assert_eq!(Verdict::Positive.tone(), Tone::Green);
    }
}
