//! Hero with the token pack visualization and trust bar

use bt_core::content::{catalog, HeroNode};
use bt_core::SectionId;
use leptos::*;
use crate::components::ActionRow;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section
            data-section=SectionId::Hero.name()
            class="flex flex-col items-center gap-8 md:gap-12 w-full px-5 sm:px-8 lg:px-20 pt-16 md:pt-[100px] pb-12 md:pb-20 bg-[radial-gradient(ellipse_150%_150%_at_50%_30%,#1E3A5F30_0%,#09090B_100%)]"
        >
            <div class="flex items-center gap-2 px-4 py-1.5 rounded-[20px] border border-[#27272A]">
                <div class="w-1.5 h-1.5 rounded-full bg-[#22C55E]"></div>
                <span class="text-[13px] font-medium text-[#A1A1AA]">{catalog::HERO_BADGE}</span>
            </div>

            <div class="flex flex-col items-center gap-4 md:gap-6 max-w-[900px]">
                <h1 class="text-4xl sm:text-5xl md:text-[64px] font-extrabold text-[#FAFAFA] text-center leading-[1.1] md:leading-[1.05] tracking-[-1px] md:tracking-[-2px]">
                    {catalog::HERO_TITLE}
                </h1>
                <p class="text-base sm:text-lg md:text-xl text-[#A1A1AA] text-center leading-[1.6] max-w-[680px]">
                    {catalog::HERO_LEDE}
                </p>
            </div>

            <ActionRow actions=catalog::HERO_ACTIONS large=true/>

            <TokenVisualization/>

            <div class="flex flex-col items-center gap-4 w-full">
                <span class="text-[11px] font-semibold text-[#52525B] tracking-[2px]">
                    {catalog::TRUST_HEADING}
                </span>
                <div class="flex flex-wrap items-center justify-center gap-6 sm:gap-12 w-full">
                    {catalog::TRUST_LOGOS
                        .iter()
                        .map(|logo| view! {
                            <span class="text-base sm:text-lg font-bold text-[#52525B]">{*logo}</span>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Root token fanning out to sub-tokens. Wide displays only.
#[component]
fn TokenVisualization() -> impl IntoView {
    view! {
        <div class="relative w-full max-w-[800px] h-[280px] rounded-2xl border border-[#1E1E24] overflow-hidden bg-[#0C0C0F] hidden md:block">
            <img
                src=catalog::HERO_BACKDROP.as_str()
                alt="Token visualization background"
                class="absolute inset-0 w-full h-full object-cover"
            />

            <div class="absolute top-5 left-1/2 -translate-x-1/2 flex items-center gap-2.5 px-5 py-3 rounded-[10px] bg-[#2563EB]">
                <span aria-hidden="true">{bt_core::Icon::Box.glyph()}</span>
                <span class="text-[13px] font-semibold text-white">{catalog::HERO_ROOT}</span>
            </div>
            <div class="absolute top-[60px] left-1/2 w-px h-10 bg-[#2563EB50]"></div>
            <div class="absolute top-[100px] left-[calc(50%-220px)] w-[440px] h-px bg-[#2563EB30]"></div>

            {catalog::HERO_CHILDREN
                .iter()
                .map(|node| positioned(*node, "gap-2 px-4 py-2.5 rounded-lg bg-[#131316] border border-[#27272A] text-xs font-medium text-[#A1A1AA]"))
                .collect_view()}
            {catalog::HERO_LEAVES
                .iter()
                .map(|node| positioned(*node, "gap-1.5 px-3 py-2 rounded-md bg-[#111114] border border-[#1E1E24] text-[11px] text-[#71717A]"))
                .collect_view()}

            <span class="absolute bottom-8 left-1/2 -translate-x-1/2 text-[11px] font-medium text-[#FAFAFA]">
                {catalog::HERO_CAPTION}
            </span>
        </div>
    }
}

fn positioned(node: HeroNode, class: &'static str) -> impl IntoView {
    view! {
        <div
            class=format!("absolute flex items-center {}", class)
            style=format!("left: {}px; top: {}px", node.x, node.y)
        >
            <span aria-hidden="true">{node.icon.glyph()}</span>
            <span>{node.label}</span>
        </div>
    }
}
