//! Dashboard screenshots

use bt_core::content::catalog;
use bt_core::{layout, SectionId};
use leptos::*;
use super::SectionFrame;
use crate::components::{ProductCard, SectionHeader};

#[component]
pub fn ProductSection() -> impl IntoView {
    view! {
        <SectionFrame section=SectionId::Product>
            <SectionHeader heading=catalog::PRODUCT_HEADING/>
            <div class=format!("grid {} gap-5 w-full", layout::responsive_grid(SectionId::Product))>
                {catalog::PRODUCT_SHOTS
                    .iter()
                    .map(|shot| view! { <ProductCard shot=*shot/> })
                    .collect_view()}
            </div>
        </SectionFrame>
    }
}
