//! Card components for marketing sections

use bt_core::content::{
    Comparison, FeatureCard, LayerDescriptor, ProductShot, SectionHeading, Theme, TreeDepth,
    TreeNode, UseCase, VisionPoint,
};
use leptos::*;

/// Eyebrow, title and optional lede
#[component]
pub fn SectionHeader(heading: SectionHeading) -> impl IntoView {
    let theme = heading.theme;

    view! {
        <div class="flex flex-col items-center gap-4 md:gap-5 max-w-[750px]">
            <span class=format!("text-xs font-semibold tracking-[2px] {}", theme.eyebrow())>
                {heading.eyebrow}
            </span>
            <h2 class=format!(
                "text-3xl sm:text-4xl md:text-5xl font-extrabold text-center tracking-[-1px] md:tracking-[-1.5px] {}",
                theme.heading(),
            )>
                {heading.title}
            </h2>
            {heading.lede.map(|lede| view! {
                <p class=format!(
                    "text-base md:text-lg text-center leading-[1.6] max-w-[650px] {}",
                    theme.body(),
                )>
                    {lede}
                </p>
            })}
        </div>
    }
}

#[component]
pub fn FeatureTile(card: FeatureCard, theme: Theme) -> impl IntoView {
    view! {
        <div class=format!("flex flex-col gap-4 p-6 md:p-8 rounded-xl {}", theme.card())>
            <span class="text-2xl" aria-hidden="true">{card.icon.glyph()}</span>
            <span class=format!("text-lg font-bold {}", theme.heading())>{card.title}</span>
            <p class=format!("text-sm leading-[1.6] {}", theme.body())>{card.description}</p>
        </div>
    }
}

/// Icon badge beside a title and one-line description
#[component]
pub fn FeatureRow(card: FeatureCard) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 p-4 md:p-6 rounded-xl bg-[#131316] border border-[#27272A]">
            <div class="flex items-center justify-center w-10 h-10 md:w-11 md:h-11 rounded-[10px] bg-[#1E3A5F] shrink-0">
                <span aria-hidden="true">{card.icon.glyph()}</span>
            </div>
            <div class="flex flex-col gap-1 flex-1 min-w-0">
                <span class="text-sm md:text-base font-bold text-[#FAFAFA]">{card.title}</span>
                <span class="text-xs md:text-[13px] text-[#71717A] leading-[1.5]">{card.description}</span>
            </div>
        </div>
    }
}

#[component]
pub fn ComparisonCard(comparison: Comparison) -> impl IntoView {
    let tone = comparison.verdict.tone();

    view! {
        <div class=format!(
            "flex flex-col gap-5 md:gap-7 w-full p-6 md:p-10 rounded-2xl border {} {}",
            tone.surface(),
            tone.border(),
        )>
            <div class="flex items-center gap-2.5">
                <span aria-hidden="true">{comparison.verdict.icon().glyph()}</span>
                <span class=format!("text-lg md:text-xl font-bold {}", tone.accent())>
                    {comparison.title}
                </span>
            </div>
            <ul class="flex flex-col gap-3 md:gap-4 w-full">
                {comparison
                    .items
                    .iter()
                    .map(|item| view! {
                        <li class="flex items-start gap-3">
                            <div class=format!("w-1.5 h-1.5 rounded-[3px] shrink-0 mt-2 {}", tone.badge())></div>
                            <span class="text-sm md:text-[15px] text-[#27272A] leading-[1.5]">{*item}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn TreeRow(node: TreeNode) -> impl IntoView {
    let (surface, label) = match (node.depth, node.highlight) {
        (TreeDepth::Root, _) => ("bg-[#2563EB]", "text-sm font-semibold text-white"),
        (_, true) => (
            "bg-[#1E3A5F40] border border-[#2563EB30]",
            "text-[13px] font-semibold text-[#93C5FD]",
        ),
        (_, false) => ("bg-[#18181B]", "text-[13px] font-medium text-[#A1A1AA]"),
    };

    view! {
        <div class=format!(
            "flex items-center gap-2.5 rounded-lg w-full {} {}",
            node.depth.padding(),
            surface,
        )>
            <span aria-hidden="true">{node.icon.glyph()}</span>
            <span class=label>{node.label}</span>
        </div>
    }
}

#[component]
pub fn LayerRow(layer: LayerDescriptor) -> impl IntoView {
    let tone = layer.tone;

    view! {
        <div class=format!(
            "flex flex-col sm:flex-row items-start sm:items-center justify-between gap-2 sm:gap-4 min-h-[72px] w-full px-4 sm:px-7 py-3 sm:py-0 rounded-xl border {} {}",
            tone.surface(),
            tone.border(),
        )>
            <div class="flex items-center gap-3 sm:gap-3.5">
                <div class=format!(
                    "flex items-center justify-center w-8 h-8 sm:w-9 sm:h-9 rounded-lg shrink-0 {}",
                    tone.badge(),
                )>
                    <span class="text-sm sm:text-base font-extrabold text-white">{layer.number}</span>
                </div>
                <span class="text-sm sm:text-base font-bold text-[#09090B]">{layer.title}</span>
            </div>
            <span class="text-xs sm:text-[13px] text-[#71717A] sm:text-right pl-11 sm:pl-0">
                {layer.description}
            </span>
        </div>
    }
}

#[component]
pub fn UseCaseCard(use_case: UseCase) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4 md:gap-5 p-6 md:p-8 rounded-2xl bg-white border border-[#E4E4E7]">
            <div class=format!(
                "flex items-center justify-center w-11 h-11 md:w-12 md:h-12 rounded-xl {}",
                use_case.tone.surface(),
            )>
                <span class=use_case.tone.accent() aria-hidden="true">{use_case.icon.glyph()}</span>
            </div>
            <div class="w-full h-[120px] sm:h-[140px] rounded-[10px] overflow-hidden">
                <img
                    src=use_case.image.as_str()
                    alt=use_case.title
                    loading="lazy"
                    class="w-full h-full object-cover"
                />
            </div>
            <span class="text-lg md:text-xl font-bold text-[#09090B]">{use_case.title}</span>
            <p class="text-sm text-[#52525B] leading-[1.6]">{use_case.description}</p>
        </div>
    }
}

#[component]
pub fn ProductCard(shot: ProductShot) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4 h-[240px] sm:h-[280px] p-5 md:p-6 rounded-2xl bg-[#131316] border border-[#27272A]">
            <div class="flex items-center gap-2">
                <span aria-hidden="true">{shot.icon.glyph()}</span>
                <span class="text-sm md:text-base font-bold text-[#FAFAFA]">{shot.title}</span>
            </div>
            <div class="flex-1 rounded-[10px] overflow-hidden">
                <img src=shot.image.as_str() alt=shot.title loading="lazy" class="w-full h-full object-cover"/>
            </div>
        </div>
    }
}

#[component]
pub fn VisionCard(point: VisionPoint) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-3 p-8 rounded-xl">
            <span class="text-4xl font-extrabold text-[#E4E4E7]">{point.number}</span>
            <span class="text-lg font-bold text-[#09090B]">{point.title}</span>
            <p class="text-sm text-[#52525B] leading-[1.6]">{point.description}</p>
        </div>
    }
}
