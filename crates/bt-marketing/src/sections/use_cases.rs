//! Industry use cases

use bt_core::content::catalog;
use bt_core::{layout, SectionId};
use leptos::*;
use super::SectionFrame;
use crate::components::{SectionHeader, UseCaseCard};

#[component]
pub fn UseCasesSection() -> impl IntoView {
    view! {
        <SectionFrame section=SectionId::UseCases>
            <SectionHeader heading=catalog::USE_CASES_HEADING/>
            <div class=format!(
                "grid {} gap-5 md:gap-6 w-full",
                layout::responsive_grid(SectionId::UseCases),
            )>
                {catalog::USE_CASES
                    .iter()
                    .map(|use_case| view! { <UseCaseCard use_case=*use_case/> })
                    .collect_view()}
            </div>
        </SectionFrame>
    }
}
