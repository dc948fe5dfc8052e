//! Solution: token pack trees for two industries

use bt_core::content::{catalog, TokenExample};
use bt_core::{layout, SectionId};
use leptos::*;
use super::SectionFrame;
use crate::components::{SectionHeader, TreeRow};

#[component]
pub fn SolutionSection() -> impl IntoView {
    view! {
        <SectionFrame section=SectionId::Solution>
            <SectionHeader heading=catalog::SOLUTION_HEADING/>
            <div class=format!(
                "grid {} gap-6 lg:gap-8 w-full max-w-[1192px]",
                layout::responsive_grid(SectionId::Solution),
            )>
                {catalog::TOKEN_EXAMPLES
                    .iter()
                    .map(|example| view! { <ExampleCard example=*example/> })
                    .collect_view()}
            </div>
        </SectionFrame>
    }
}

#[component]
fn ExampleCard(example: TokenExample) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-5 md:gap-6 w-full p-6 md:p-9 rounded-2xl bg-[#131316] border border-[#27272A]">
            <div class="flex items-center gap-2.5">
                <span aria-hidden="true">{example.icon.glyph()}</span>
                <span class="text-lg font-bold text-[#FAFAFA]">{example.title}</span>
            </div>
            <div class="flex flex-col gap-1 w-full">
                {example.nodes.iter().map(|node| view! { <TreeRow node=*node/> }).collect_view()}
            </div>
        </div>
    }
}
