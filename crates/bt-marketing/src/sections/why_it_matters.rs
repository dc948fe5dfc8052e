//! Benefits of hierarchical token packs, laid out three over two

use bt_core::content::{catalog, FeatureCard};
use bt_core::{layout, SectionId};
use leptos::*;
use super::SectionFrame;
use crate::components::{FeatureTile, SectionHeader};

#[component]
pub fn WhyItMattersSection() -> impl IntoView {
    view! {
        <SectionFrame section=SectionId::WhyItMatters>
            <SectionHeader heading=catalog::WHY_HEADING/>
            <BrickGrid section=SectionId::WhyItMatters cards=catalog::WHY_CARDS/>
        </SectionFrame>
    }
}

/// Full first row, narrower centered second row on wide displays
#[component]
pub(super) fn BrickGrid(section: SectionId, cards: &'static [FeatureCard]) -> impl IntoView {
    let theme = section.theme();
    let (top, bottom) = layout::brick_rows(section, cards);
    let tiles = move |cards: &'static [FeatureCard]| {
        cards
            .iter()
            .map(|card| view! { <FeatureTile card=*card theme=theme/> })
            .collect_view()
    };

    view! {
        <div class="flex flex-col gap-5 w-full">
            <div class=format!("grid {} gap-5 w-full", layout::responsive_grid(section))>
                {tiles(top)}
            </div>
            <div class=format!(
                "grid {} gap-5 w-full lg:w-2/3 lg:mx-auto",
                layout::second_row_grid(section, bottom.len()),
            )>
                {tiles(bottom)}
            </div>
        </div>
    }
}
