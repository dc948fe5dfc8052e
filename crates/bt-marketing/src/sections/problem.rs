//! Problem statement: today versus with BlockTrace

use bt_core::content::catalog;
use bt_core::{layout, SectionId};
use leptos::*;
use super::SectionFrame;
use crate::components::{ComparisonCard, SectionHeader};

#[component]
pub fn ProblemSection() -> impl IntoView {
    view! {
        <SectionFrame section=SectionId::Problem>
            <SectionHeader heading=catalog::PROBLEM_HEADING/>
            <div class=format!(
                "grid {} gap-6 lg:gap-8 w-full max-w-[1152px]",
                layout::responsive_grid(SectionId::Problem),
            )>
                {catalog::COMPARISONS
                    .iter()
                    .map(|comparison| view! { <ComparisonCard comparison=*comparison/> })
                    .collect_view()}
            </div>
        </SectionFrame>
    }
}
