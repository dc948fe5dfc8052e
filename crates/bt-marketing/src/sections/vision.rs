//! Long-term vision, four numbered points

use bt_core::content::catalog;
use bt_core::{layout, SectionId};
use leptos::*;
use super::SectionFrame;
use crate::components::{SectionHeader, VisionCard};

#[component]
pub fn VisionSection() -> impl IntoView {
    view! {
        <SectionFrame section=SectionId::Vision>
            <SectionHeader heading=catalog::VISION_HEADING/>
            <div class=format!("grid {} gap-8 w-full", layout::responsive_grid(SectionId::Vision))>
                {catalog::VISION_POINTS
                    .iter()
                    .map(|point| view! { <VisionCard point=*point/> })
                    .collect_view()}
            </div>
        </SectionFrame>
    }
}
