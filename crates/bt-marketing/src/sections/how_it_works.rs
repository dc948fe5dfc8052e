//! Layered architecture stack

use bt_core::content::catalog;
use bt_core::SectionId;
use leptos::*;
use super::SectionFrame;
use crate::components::{LayerRow, SectionHeader};

#[component]
pub fn HowItWorksSection() -> impl IntoView {
    view! {
        <SectionFrame section=SectionId::HowItWorks>
            <SectionHeader heading=catalog::ARCHITECTURE_HEADING/>
            <div class="flex flex-col items-center gap-2 w-full max-w-[900px]">
                {catalog::LAYERS.iter().map(|layer| view! { <LayerRow layer=*layer/> }).collect_view()}
            </div>
        </SectionFrame>
    }
}
