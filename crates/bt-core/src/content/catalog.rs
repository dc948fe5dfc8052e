//! Page copy
//!
//! Section by section, top to bottom.

use super::*;

pub const BRAND: &str = "BlockTrace";
pub const TAGLINE: &str = "Composable token infrastructure for real-world asset traceability.";

// Header

pub const NAV_LINKS: &[NavTarget] = &NavTarget::ALL;

pub const SIGN_IN: CallToAction = CallToAction {
    label: "Sign In",
    href: "#",
    emphasis: Emphasis::Plain,
    trailing_icon: None,
};

pub const REQUEST_DEMO: CallToAction = CallToAction {
    label: "Request Demo",
    href: "#",
    emphasis: Emphasis::Primary,
    trailing_icon: None,
};

/// Secondary actions next to the navigation links
pub const HEADER_ACTIONS: &[CallToAction] = &[SIGN_IN, REQUEST_DEMO];

// Hero

pub const HERO_BADGE: &str = "Now in Private Beta";
pub const HERO_TITLE: &str = "Composable Token Infrastructure for Real-World Assets";
pub const HERO_LEDE: &str = "Turn physical assets into verifiable digital structures with complete \
lifecycle traceability. From manufacturing to real estate — one composable layer.";

pub const HERO_ACTIONS: &[CallToAction] = &[
    CallToAction {
        label: "Request Demo",
        href: "#",
        emphasis: Emphasis::Primary,
        trailing_icon: Some(Icon::ArrowRight),
    },
    CallToAction {
        label: "View Architecture",
        href: "#architecture",
        emphasis: Emphasis::Secondary,
        trailing_icon: Some(Icon::Layers),
    },
];

pub const HERO_BACKDROP: AssetRef = AssetRef("/images/generated-1770887264229.png");
pub const HERO_ROOT: &str = "Asset Token";
pub const HERO_CAPTION: &str = "Composable Token Pack — Recursive Asset Structure";

pub const HERO_CHILDREN: &[HeroNode] = &[
    HeroNode { icon: Icon::FileCheck, label: "Certificate", x: 80, y: 110 },
    HeroNode { icon: Icon::Cpu, label: "Component", x: 310, y: 110 },
    HeroNode { icon: Icon::FileText, label: "Document", x: 530, y: 110 },
];

pub const HERO_LEAVES: &[HeroNode] = &[
    HeroNode { icon: Icon::ShieldCheck, label: "Issuer Sig", x: 50, y: 184 },
    HeroNode { icon: Icon::Calendar, label: "Expiry", x: 180, y: 184 },
    HeroNode { icon: Icon::Hash, label: "Serial No.", x: 290, y: 184 },
    HeroNode { icon: Icon::Scan, label: "Origin", x: 410, y: 184 },
    HeroNode { icon: Icon::FileText, label: "PDF Hash", x: 530, y: 184 },
    HeroNode { icon: Icon::Timer, label: "Version", x: 650, y: 184 },
];

pub const TRUST_HEADING: &str = "TRUSTED BY ENTERPRISE TEAMS";
pub const TRUST_LOGOS: &[&str] = &["Siemens", "Maersk", "JLL", "Deloitte", "BASF"];

// Problem

pub const PROBLEM_HEADING: SectionHeading = SectionHeading {
    eyebrow: "THE PROBLEM",
    title: "Traceability Is Broken",
    lede: Some(
        "Enterprise asset data lives in fragmented silos. Compliance is manual. \
Cross-organisation trust is non-existent. Bills of materials are unverifiable.",
    ),
    theme: Theme::Light,
};

pub const COMPARISONS: &[Comparison] = &[
    Comparison {
        title: "Today: Fragmented Systems",
        verdict: Verdict::Negative,
        items: &[
            "Siloed enterprise databases with no interoperability",
            "Manual compliance and audit processes",
            "No cross-organisation trust layer",
            "Non-verifiable bills of materials",
            "Fragmented asset lifecycle records",
        ],
    },
    Comparison {
        title: "With BlockTrace: Connected Graph",
        verdict: Verdict::Positive,
        items: &[
            "Unified composable asset graph across organisations",
            "Automated compliance with verifiable audit trails",
            "Cryptographic trust between all participants",
            "Verifiable, hierarchical bills of materials",
            "Complete lifecycle provenance for every asset",
        ],
    },
];

// Solution

pub const SOLUTION_HEADING: SectionHeading = SectionHeading {
    eyebrow: "THE SOLUTION",
    title: "From Flat Records to Composable Asset Graphs",
    lede: Some(
        "A real-world asset becomes a root token. Each certificate, component, or document \
is a sub-token. Each sub-token can itself contain sub-tokens — forming a verifiable, \
composable structure.",
    ),
    theme: Theme::Dark,
};

const fn node(icon: Icon, label: &'static str, depth: TreeDepth) -> TreeNode {
    TreeNode { icon, label, depth, highlight: false }
}

pub const TOKEN_EXAMPLES: &[TokenExample] = &[
    TokenExample {
        icon: Icon::House,
        title: "Real Estate Example",
        nodes: &[
            node(Icon::Box, "House Token", TreeDepth::Root),
            node(Icon::Map, "Survey Token", TreeDepth::Child),
            node(Icon::Zap, "Electrical Certificate", TreeDepth::Child),
            node(Icon::Wrench, "Renovation Record", TreeDepth::Child),
            node(Icon::Shield, "Insurance Policy", TreeDepth::Child),
        ],
    },
    TokenExample {
        icon: Icon::Factory,
        title: "Manufacturing Example",
        nodes: &[
            node(Icon::Box, "Finished Product", TreeDepth::Root),
            TreeNode {
                icon: Icon::Package,
                label: "Sub-Assembly A",
                depth: TreeDepth::Child,
                highlight: true,
            },
            node(Icon::Cpu, "Component A1", TreeDepth::Grandchild),
            node(Icon::Cpu, "Component A2", TreeDepth::Grandchild),
            node(Icon::BadgeCheck, "Quality Certificate", TreeDepth::Child),
            node(Icon::Truck, "Shipping Manifest", TreeDepth::Child),
        ],
    },
];

// How it works

pub const ARCHITECTURE_HEADING: SectionHeading = SectionHeading {
    eyebrow: "HOW IT WORKS",
    title: "A Layered Architecture Built for Enterprise",
    lede: Some(
        "Five purpose-built layers work together to tokenise, anchor, and query your asset \
data — without replacing existing systems.",
    ),
    theme: Theme::Light,
};

/// Listed top of stack first
pub const LAYERS: &[LayerDescriptor] = &[
    LayerDescriptor {
        number: "5",
        title: "Query & Analytics Dashboard",
        description: "Real-time asset insights, dependency maps, lifecycle views",
        tone: Tone::Blue,
    },
    LayerDescriptor {
        number: "4",
        title: "On-Chain Hash Anchoring",
        description: "Immutable proof on any blockchain, chain-agnostic",
        tone: Tone::Sky,
    },
    LayerDescriptor {
        number: "3",
        title: "Off-Chain Indexed Data Layer",
        description: "Structured storage, fast retrieval, selective disclosure",
        tone: Tone::Violet,
    },
    LayerDescriptor {
        number: "2",
        title: "Tokenisation Engine",
        description: "Hierarchical token pack creation, versioning, composition",
        tone: Tone::Orange,
    },
    LayerDescriptor {
        number: "1",
        title: "Integration Layer",
        description: "REST APIs, ERP connectors, webhooks, batch import",
        tone: Tone::Green,
    },
];

// Why it matters

pub const WHY_HEADING: SectionHeading = SectionHeading {
    eyebrow: "WHY IT MATTERS",
    title: "Why Hierarchical Token Packs Matter",
    lede: None,
    theme: Theme::Dark,
};

pub const WHY_CARDS: &[FeatureCard] = &[
    FeatureCard {
        icon: Icon::GitBranch,
        title: "Recursive Provenance",
        description: "Trace any component back through its full history, across every level of assembly.",
    },
    FeatureCard {
        icon: Icon::Shield,
        title: "Verifiable BOM",
        description: "Cryptographically verify every bill of materials down to the component level.",
    },
    FeatureCard {
        icon: Icon::Target,
        title: "Component-Level Recall",
        description: "Identify and isolate affected assets instantly when a component is recalled.",
    },
    FeatureCard {
        icon: Icon::History,
        title: "Full Lifecycle Versioning",
        description: "Every change to an asset or sub-token is versioned, timestamped, and immutable.",
    },
    FeatureCard {
        icon: Icon::BadgeCheck,
        title: "Audit-Ready Assets",
        description: "Generate compliance reports instantly with cryptographic proof of every claim.",
    },
];

// Use cases

pub const USE_CASES_HEADING: SectionHeading = SectionHeading {
    eyebrow: "USE CASES",
    title: "Built for Asset-Heavy Industries",
    lede: Some(
        "From factory floors to property portfolios — composable token infrastructure \
adapts to your domain.",
    ),
    theme: Theme::Light,
};

pub const USE_CASES: &[UseCase] = &[
    UseCase {
        icon: Icon::Factory,
        tone: Tone::Blue,
        title: "Manufacturing",
        description: "Track sub-assemblies, components, and certifications across complex production lines.",
        image: AssetRef(
            "https://images.unsplash.com/photo-1699799678681-3c156c3c5553?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=600",
        ),
    },
    UseCase {
        icon: Icon::Building,
        tone: Tone::Green,
        title: "Real Estate",
        description: "Compose property tokens from surveys, certificates, and renovation records.",
        image: AssetRef("/images/generated-1770887328156.png"),
    },
    UseCase {
        icon: Icon::Pill,
        tone: Tone::Red,
        title: "Pharmaceuticals",
        description: "Full chain-of-custody from raw material to patient delivery with regulatory compliance.",
        image: AssetRef("/images/generated-1770887334485.png"),
    },
    UseCase {
        icon: Icon::Leaf,
        tone: Tone::Orange,
        title: "Energy & Carbon",
        description: "Verifiable carbon credits and energy asset provenance with embedded compliance.",
        image: AssetRef(
            "https://images.unsplash.com/photo-1598480879950-0b385db5310e?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=600",
        ),
    },
];

// Product

pub const PRODUCT_HEADING: SectionHeading = SectionHeading {
    eyebrow: "PRODUCT",
    title: "Enterprise-Grade Asset Intelligence",
    lede: Some(
        "A modern SaaS dashboard built for data-heavy workflows. Explore asset graphs, \
track lifecycles, and monitor certifications in real time.",
    ),
    theme: Theme::Dark,
};

pub const PRODUCT_SHOTS: &[ProductShot] = &[
    ProductShot {
        icon: Icon::Network,
        title: "Asset Graph Explorer",
        image: AssetRef("/images/generated-1770887209909.png"),
    },
    ProductShot {
        icon: Icon::CalendarDays,
        title: "Timeline View",
        image: AssetRef("/images/generated-1770887216404.png"),
    },
    ProductShot {
        icon: Icon::GitMerge,
        title: "Component Dependency Map",
        image: AssetRef("/images/generated-1770887222580.png"),
    },
    ProductShot {
        icon: Icon::Bell,
        title: "Certification Validity Alerts",
        image: AssetRef("/images/generated-1770887229588.png"),
    },
];

// Security

pub const SECURITY_HEADING: SectionHeading = SectionHeading {
    eyebrow: "SECURITY",
    title: "Built for Enterprise Trust",
    lede: Some(
        "Security isn't a feature — it's the foundation. Every layer is designed for \
zero-trust environments and regulatory compliance.",
    ),
    theme: Theme::Light,
};

pub const SECURITY_CARDS: &[FeatureCard] = &[
    FeatureCard {
        icon: Icon::Lock,
        title: "Cryptographic Integrity",
        description: "Every token and sub-token is hash-verified and tamper-evident.",
    },
    FeatureCard {
        icon: Icon::EyeOff,
        title: "Selective Disclosure",
        description: "Share only what's needed. Control visibility at the sub-token level.",
    },
    FeatureCard {
        icon: Icon::Users,
        title: "Role-Based Permissions",
        description: "Granular access control across organisations, teams, and asset types.",
    },
    FeatureCard {
        icon: Icon::Link,
        title: "Chain-Agnostic",
        description: "Anchor to any blockchain. No vendor lock-in. Future-proof architecture.",
    },
    FeatureCard {
        icon: Icon::Server,
        title: "Hybrid Model",
        description: "Sensitive data stays off-chain. Only hashes are anchored on-chain for verification.",
    },
];

// Enterprise platform

pub const PLATFORM_HEADING: SectionHeading = SectionHeading {
    eyebrow: "ENTERPRISE PLATFORM",
    title: "Infrastructure, Not Just Software",
    lede: Some(
        "BlockTrace is a platform, not a point solution. Deploy as SaaS or on-premise. \
Integrate via API. Scale across your entire asset portfolio.",
    ),
    theme: Theme::Dark,
};

pub const BUSINESS_CARDS: &[FeatureCard] = &[
    FeatureCard {
        icon: Icon::CreditCard,
        title: "SaaS Subscription",
        description: "Usage-based pricing that scales with your asset volume.",
    },
    FeatureCard {
        icon: Icon::Code,
        title: "API-First Platform",
        description: "RESTful APIs and SDKs for seamless integration.",
    },
    FeatureCard {
        icon: Icon::Building,
        title: "Enterprise Deployment",
        description: "On-premise, private cloud, or hybrid deployment options.",
    },
    FeatureCard {
        icon: Icon::Globe,
        title: "Private Network Support",
        description: "Run isolated networks for sensitive supply chains.",
    },
];

// Vision

pub const VISION_HEADING: SectionHeading = SectionHeading {
    eyebrow: "VISION",
    title: "Version Control for Physical Assets",
    lede: Some(
        "We're building the provenance layer for the physical world. A future where every \
asset has a verifiable, composable digital twin.",
    ),
    theme: Theme::Light,
};

pub const VISION_POINTS: &[VisionPoint] = &[
    VisionPoint {
        number: "01",
        title: "Global Asset Provenance Layer",
        description: "A universal registry of verifiable asset histories across industries and borders.",
    },
    VisionPoint {
        number: "02",
        title: "Embedded Finance Enablement",
        description: "Tokenised assets become programmable collateral for lending, insurance, and trade finance.",
    },
    VisionPoint {
        number: "03",
        title: "Automated Compliance",
        description: "Regulatory reporting generated automatically from verifiable asset data.",
    },
    VisionPoint {
        number: "04",
        title: "Cross-Industry Composability",
        description: "Token packs from one industry interoperate with token packs from another.",
    },
];

// Final call to action

pub const CLOSING_TITLE: &str = "Build Trust Into Your Assets.";
pub const CLOSING_LEDE: &str =
    "Join the enterprises already building verifiable asset infrastructure with BlockTrace.";

pub const CLOSING_ACTIONS: &[CallToAction] = &[
    CallToAction {
        label: "Request Demo",
        href: "#",
        emphasis: Emphasis::Primary,
        trailing_icon: Some(Icon::ArrowRight),
    },
    CallToAction {
        label: "Download Whitepaper",
        href: "#",
        emphasis: Emphasis::Secondary,
        trailing_icon: Some(Icon::Download),
    },
];

// Footer

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Product",
        links: &["Platform", "Architecture", "API Docs", "Pricing"],
    },
    FooterColumn {
        title: "Company",
        links: &["About", "Blog", "Careers", "Contact"],
    },
    FooterColumn {
        title: "Resources",
        links: &["Whitepaper", "Case Studies", "Documentation", "Changelog"],
    },
    FooterColumn {
        title: "Legal",
        links: &["Privacy Policy", "Terms of Service", "Security"],
    },
];

pub const SOCIALS: &[&str] = &["X", "LinkedIn", "GitHub"];
pub const COPYRIGHT: &str = "© 2025 BlockTrace. All rights reserved.";

/// Every image the page references, in page order
pub fn images() -> impl Iterator<Item = AssetRef> {
    std::iter::once(HERO_BACKDROP)
        .chain(USE_CASES.iter().map(|u| u.image))
        .chain(PRODUCT_SHOTS.iter().map(|p| p.image))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts() {
        assert_eq!(TRUST_LOGOS.len(), 5);
        assert_eq!(COMPARISONS.len(), 2);
        assert_eq!(LAYERS.len(), 5);
        assert_eq!(WHY_CARDS.len(), 5);
        assert_eq!(USE_CASES.len(), 4);
        assert_eq!(PRODUCT_SHOTS.len(), 4);
        assert_eq!(SECURITY_CARDS.len(), 5);
        assert_eq!(BUSINESS_CARDS.len(), 4);
        assert_eq!(VISION_POINTS.len(), 4);
        assert_eq!(FOOTER_COLUMNS.len(), 4);
    }

    #[test]
    fn test_layers_descend() {
        let numbers: Vec<&str> = LAYERS.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec!["5", "4", "3", "2", "1"]);
    }

    #[test]
    fn test_token_trees_start_at_root() {
        for example in TOKEN_EXAMPLES {
            assert_eq!(example.nodes[0].depth, TreeDepth::Root, "{}", example.title);
            assert!(example.nodes[1..].iter().all(|n| n.depth != TreeDepth::Root));
        }
    }

    #[test]
    fn test_only_subassembly_highlighted() {
        let highlighted: Vec<&str> = TOKEN_EXAMPLES
            .iter()
            .flat_map(|e| e.nodes.iter())
            .filter(|n| n.highlight)
            .map(|n| n.label)
            .collect();
        assert_eq!(highlighted, vec!["Sub-Assembly A"]);
    }

    #[test]
    fn test_bundled_images_live_under_images() {
        let bundled = images().filter(|a| a.is_bundled());
        for asset in bundled {
            assert!(asset.as_str().starts_with("/images/"), "{}", asset);
        }
    }

    #[test]
    fn test_comparisons_are_balanced() {
        assert_eq!(COMPARISONS[0].verdict, Verdict::Negative);
        assert_eq!(COMPARISONS[1].verdict, Verdict::Positive);
        assert_eq!(COMPARISONS[0].items.len(), COMPARISONS[1].items.len());
    }
}
