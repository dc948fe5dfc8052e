//! Pitch deck copy

use super::{Deck, DeckPoint, Slide};
use crate::content::catalog;
use crate::content::{FeatureCard, TokenExample, TreeDepth};

/// Slide number the platform slide takes when added
pub const PLATFORM_POSITION: usize = 6;

const TITLE_LEDE: &str =
    "Turn physical assets into verifiable digital structures with complete lifecycle traceability.";

const PROBLEM_POINTS: &[(&str, &str)] = &[
    (
        "Siloed Databases",
        "Siloed enterprise databases with no interoperability. Traceability data lives across \
dozens of disconnected ERPs, spreadsheets, and legacy databases.",
    ),
    (
        "No Cross-Org Trust",
        "No cross-organisation trust layer. Partners, auditors, and regulators cannot \
independently verify claims about asset provenance.",
    ),
    (
        "Unverifiable BOMs",
        "Non-verifiable bills of materials. Component history is easily lost or falsified \
across supply chain handoffs.",
    ),
    (
        "Manual Compliance",
        "Manual compliance and audit processes. Regulatory compliance is handled through \
costly, unscalable manual processes.",
    ),
    (
        "Fragmented Lifecycle",
        "Fragmented asset lifecycle records. No single source of truth for an asset's \
complete history across organisations.",
    ),
];

const OPPORTUNITY_LEDE: &str = "Regulatory pressure, enterprise SaaS maturity, and RWA \
tokenisation are creating an infrastructure-level opportunity.";

const FORCES: &[&str] = &[
    "Blockchain Infrastructure",
    "Verifiable Asset Infrastructure",
    "Enterprise SaaS Maturity",
];

const MARKET_STATS: &[(&str, &str)] = &[
    ("$16T+", "Projected RWA tokenisation market by 2030"),
    ("80%", "Of enterprises cite supply chain visibility as critical priority"),
    ("47+", "New supply chain due diligence regulations enacted globally since 2020"),
];

const WHY_LEDE: &str =
    "Hierarchical Token Packs enable capabilities that flat tokenisation systems simply cannot deliver.";

const INTEGRATION_LEDE: &str = "BlockTrace doesn't replace your existing systems. It makes them \
provable, composable, and trusted across your entire supply chain.";

const INTEGRATION_POINTS: &[(&str, &str)] = &[
    (
        "Complement, Not Replace",
        "Works alongside SAP, Oracle, or custom ERP systems. No rip-and-replace, just a trust \
layer on top of what you already have.",
    ),
    (
        "Cryptographic Proof Layer",
        "Add tamper-evident, hash-verified proof on top of your existing records. Anchor to \
any blockchain without changing your workflow.",
    ),
    (
        "API-First Integration",
        "REST APIs, webhooks, ERP connectors, and batch import. Connect your existing systems \
in days, not months.",
    ),
    (
        "Cross-Organisation Trust",
        "Your internal system tracks your data. BlockTrace proves it to partners, regulators, \
and customers without exposing sensitive details.",
    ),
    (
        "From Flat to Composable",
        "Transform siloed, flat records into hierarchical token packs with recursive \
provenance, turning your data into a verifiable asset graph.",
    ),
];

const COMPETITORS: [&str; 4] = [
    "Simple NFT Platforms",
    "Traditional ERP Systems",
    "Single-Layer RWA Platforms",
    "BlockTrace",
];

const CAPABILITIES: &[(&str, [&str; 4])] = &[
    ("Hierarchical token structures", ["✗", "✗", "✗", "✓"]),
    ("Cryptographic provenance", ["Partial", "✗", "Partial", "✓"]),
    ("Enterprise ERP integration", ["✗", "✓", "✗", "✓"]),
    ("Recursive BOM verification", ["✗", "✗", "✗", "✓"]),
    ("Cross-org verifiable trust", ["Partial", "✗", "Partial", "✓"]),
];

const REVENUE_LEDE: &str = "Five compounding revenue streams with built-in land-and-expand \
mechanics. Every new asset deepens platform engagement across all streams.";

const REVENUE_STREAMS: &[(&str, &str, &str)] = &[
    (
        "RECURRING",
        "SaaS Subscription",
        "Tiered platform access: Starter, Growth, and Enterprise plans. Predictable ARR base \
that grows with seat count and org adoption. 85%+ gross margins.",
    ),
    (
        "USAGE-BASED",
        "Token Minting Fees",
        "Per-token fee for each asset or sub-token created. Revenue scales linearly with asset \
volume; a single enterprise can mint 10K-1M+ tokens annually. Volume discounts drive lock-in.",
    ),
    (
        "USAGE-BASED",
        "On-Chain Anchoring Fees",
        "Per-event fee for immutable proof anchoring. Batched for cost efficiency. High-margin \
revenue stream; our cost per anchor is a fraction of what customers pay.",
    ),
    (
        "HIGH-VALUE",
        "Enterprise Deployments",
        "6-figure+ ACV for private cloud, on-premise, and hybrid deployments with dedicated \
support and SLA guarantees. Custom integrations create deep switching costs.",
    ),
    (
        "ADD-ON",
        "Analytics & Compliance",
        "Premium add-on for asset graph analytics, automated compliance reporting, and \
predictive insights. Expands ACV 30-50% per enterprise account.",
    ),
];

const GTM_LEDE: &str = "Land in regulated industries where traceability is mandatory, then \
expand through supply chain network effects and platform stickiness.";

const VERTICALS: &[(&str, &str)] = &[
    (
        "Manufacturing & Industrial",
        "BOMs, quality certificates, component recall. EU Digital Product Passport mandate \
creates forced adoption by 2027.",
    ),
    (
        "Real Estate & Construction",
        "Property tokens, surveys, certificates. £300B+ UK market with fragmented, \
paper-heavy asset trails.",
    ),
    (
        "Pharma & Life Sciences",
        "Drug serialisation, cold-chain provenance, clinical trial audit trails. FDA DSCSA \
compliance mandatory.",
    ),
    (
        "Food & Agriculture",
        "Farm-to-fork traceability, batch recall, sustainability certification. EU regulation \
driving $2B+ in compliance spend.",
    ),
];

const PRICING_TIERS: &[(&str, &str, &str)] = &[
    (
        "Starter",
        "£500/mo",
        "Up to 1,000 tokens/mo. Single user team. Shared infrastructure. Ideal for pilots and POCs.",
    ),
    (
        "Growth",
        "£2,500/mo",
        "Up to 25,000 tokens/mo. Multi-team access. Analytics module included. Volume \
anchoring discounts.",
    ),
    (
        "Enterprise",
        "Custom",
        "Unlimited tokens. Private infrastructure. Dedicated SLA. Custom integrations. \
White-glove onboarding. 6-figure ACV.",
    ),
];

const MOATS: &[(&str, &str)] = &[
    ("Data Gravity", "Cryptographic graphs are non-portable"),
    ("Network Effects", "Each partner deepens the ecosystem"),
    ("Regulatory Tailwinds", "Compliance mandates drive forced adoption"),
];

const ROADMAP: &[(&str, &str, &[&str])] = &[
    (
        "PHASE 1",
        "Core Token Engine",
        &[
            "Hierarchical token minting",
            "Pack assembly & validation",
            "On-chain anchoring MVP",
            "REST API & basic dashboard",
        ],
    ),
    (
        "PHASE 2",
        "ERP Integrations",
        &["SAP & Oracle connectors", "Webhook event system", "Compliance reporting"],
    ),
    (
        "PHASE 3",
        "Cross-Chain Interop",
        &["Multi-chain anchoring", "Cross-chain asset queries"],
    ),
    (
        "PHASE 4",
        "AI-Driven Analytics",
        &["Predictive asset intelligence", "Automated compliance alerts"],
    ),
];

const CONTACTS: &[&str] = &["contact@blocktrace.io", "www.blocktrace.io"];

/// Card copy for the platform slide, in product shot order
const PLATFORM_DETAILS: [&str; 4] = [
    "Visualise complex relationships and dependencies across your entire asset portfolio.",
    "Track full lifecycle events and mutable history in a linear, auditable timeline.",
    "Trace sub-assemblies and verify BOMs down to the raw material level.",
    "Proactive monitoring of certification expiry and compliance violations.",
];

fn pairs<'a>(items: &'a [(&'static str, &'static str)]) -> impl Iterator<Item = DeckPoint> + 'a {
    items.iter().map(|(title, detail)| DeckPoint::new(*title, *detail))
}

fn cards(items: &[FeatureCard]) -> impl Iterator<Item = DeckPoint> + '_ {
    items.iter().map(|c| DeckPoint::new(c.title, c.description))
}

/// Root token followed by its direct sub-tokens
fn tree_summary(example: &TokenExample) -> DeckPoint {
    let root = example
        .nodes
        .iter()
        .find(|n| n.depth == TreeDepth::Root)
        .map(|n| n.label)
        .unwrap_or(example.title);
    let children: Vec<_> = example
        .nodes
        .iter()
        .filter(|n| n.depth == TreeDepth::Child)
        .map(|n| n.label)
        .collect();
    DeckPoint::new(example.title, format!("{} → {}", root, children.join(", ")))
}

/// The fourteen-slide investor deck
pub fn deck() -> Deck {
    let problem = catalog::PROBLEM_HEADING;
    let solution = catalog::SOLUTION_HEADING;
    let architecture = catalog::ARCHITECTURE_HEADING;
    let use_cases = catalog::USE_CASES_HEADING;
    let vision = catalog::VISION_HEADING;

    Deck::new(vec![
        Slide::new("Title", catalog::BRAND)
            .lede(Some(TITLE_LEDE))
            .points([DeckPoint::new(catalog::HERO_TITLE, "")]),
        Slide::new("The Problem", problem.title)
            .label(problem.eyebrow)
            .lede(problem.lede)
            .points(pairs(PROBLEM_POINTS)),
        Slide::new("The Opportunity", "Three Forces Converging")
            .label("THE OPPORTUNITY")
            .lede(Some(OPPORTUNITY_LEDE))
            .points(
                FORCES
                    .iter()
                    .map(|force| DeckPoint::new(*force, ""))
                    .chain(pairs(MARKET_STATS)),
            ),
        Slide::new("The Solution", solution.title)
            .label(solution.eyebrow)
            .lede(solution.lede)
            .points(catalog::TOKEN_EXAMPLES.iter().map(tree_summary)),
        Slide::new("How It Works", architecture.title)
            .label(architecture.eyebrow)
            .lede(architecture.lede)
            .points(
                catalog::LAYERS
                    .iter()
                    .rev()
                    .map(|l| DeckPoint::new(format!("{}. {}", l.number, l.title), l.description)),
            ),
        Slide::new("Why Token Packs Matter", catalog::WHY_HEADING.title)
            .label(catalog::WHY_HEADING.eyebrow)
            .lede(Some(WHY_LEDE))
            .points(cards(catalog::WHY_CARDS)),
        Slide::new("Use Cases", use_cases.title)
            .label(use_cases.eyebrow)
            .points(
                catalog::USE_CASES
                    .iter()
                    .map(|u| DeckPoint::new(u.title, u.description)),
            ),
        Slide::new("Integration", "Already Have Traceability? Even Better.")
            .label("INTEGRATION")
            .lede(Some(INTEGRATION_LEDE))
            .points(pairs(INTEGRATION_POINTS)),
        Slide::new("Competitive Landscape", "Infrastructure, Not Another Token Platform")
            .label("COMPETITIVE LANDSCAPE")
            .points(CAPABILITIES.iter().map(|(capability, marks)| {
                let cells: Vec<_> = COMPETITORS
                    .iter()
                    .zip(marks)
                    .map(|(who, mark)| format!("{} {}", who, mark))
                    .collect();
                DeckPoint::new(*capability, cells.join(" | "))
            })),
        Slide::new("Business Model", "Revenue Architecture")
            .label("BUSINESS MODEL")
            .lede(Some(REVENUE_LEDE))
            .points(
                REVENUE_STREAMS
                    .iter()
                    .map(|(kind, title, detail)| DeckPoint::new(*title, format!("[{}] {}", kind, detail))),
            ),
        Slide::new("Go-To-Market", "Market Entry & Expansion Strategy")
            .label("GO-TO-MARKET")
            .lede(Some(GTM_LEDE))
            .points(
                pairs(VERTICALS)
                    .chain(PRICING_TIERS.iter().map(|(tier, price, detail)| {
                        DeckPoint::new(format!("{} ({})", tier, price), *detail)
                    }))
                    .chain(pairs(MOATS)),
            ),
        Slide::new("Roadmap", "Building in Phases")
            .label("ROADMAP")
            .points(ROADMAP.iter().map(|(phase, title, items)| {
                DeckPoint::new(format!("{}: {}", phase, title), items.join("; "))
            })),
        Slide::new("Vision", vision.title)
            .label("LONG-TERM VISION")
            .lede(vision.lede)
            .points(
                catalog::VISION_POINTS
                    .iter()
                    .map(|v| DeckPoint::new(v.title, v.description)),
            ),
        Slide::new("Closing", catalog::CLOSING_TITLE)
            .lede(Some(catalog::BRAND))
            .points(CONTACTS.iter().map(|c| DeckPoint::new(*c, ""))),
    ])
}

/// The product dashboard slide, built from the product section's shots
pub fn platform_slide() -> Slide {
    Slide::new("The Platform", "Enterprise Asset Intelligence")
        .label("THE PLATFORM")
        .lede(catalog::PRODUCT_HEADING.lede)
        .points(
            catalog::PRODUCT_SHOTS
                .iter()
                .zip(PLATFORM_DETAILS)
                .map(|(shot, detail)| DeckPoint::new(shot.title, detail)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_has_fourteen_slides() {
        let deck = deck();
        assert_eq!(deck.len(), 14);
        assert_eq!(deck.slides()[0].title, catalog::BRAND);
        assert_eq!(deck.slides()[13].heading(), "14 - Closing");
    }

    #[test]
    fn test_section_slides_share_catalog_copy() {
        let deck = deck();
        let architecture = &deck.slides()[4];
        assert_eq!(architecture.title, catalog::ARCHITECTURE_HEADING.title);
        assert_eq!(architecture.points.len(), catalog::LAYERS.len());
        assert_eq!(architecture.points[0].title, "1. Integration Layer");

        let why = &deck.slides()[5];
        assert_eq!(why.points.len(), catalog::WHY_CARDS.len());
    }

    #[test]
    fn test_solution_slide_summarises_trees() {
        let deck = deck();
        let solution = &deck.slides()[3];
        assert_eq!(
            solution.points[0].detail,
            "House Token → Survey Token, Electrical Certificate, Renovation Record, Insurance Policy"
        );
    }

    #[test]
    fn test_platform_slide_inserted_sixth() {
        let deck = deck().with_platform();
        assert_eq!(deck.len(), 15);

        let platform = &deck.slides()[5];
        assert_eq!(platform.heading(), "06 - The Platform");
        assert_eq!(platform.points.len(), 4);
        assert_eq!(platform.points[0].title, "Asset Graph Explorer");

        assert_eq!(deck.slides()[6].heading(), "07 - Why Token Packs Matter");
        assert_eq!(deck.slides()[14].heading(), "15 - Closing");
    }

    #[test]
    fn test_competitive_rows_cover_every_competitor() {
        let deck = deck();
        let landscape = &deck.slides()[8];
        assert_eq!(landscape.points.len(), CAPABILITIES.len());
        for point in &landscape.points {
            assert!(point.detail.ends_with("BlockTrace ✓"));
        }
    }
}
