//! Security guarantees, laid out three over two

use bt_core::content::catalog;
use bt_core::SectionId;
use leptos::*;
use super::why_it_matters::BrickGrid;
use super::SectionFrame;
use crate::components::SectionHeader;

#[component]
pub fn SecuritySection() -> impl IntoView {
    view! {
        <SectionFrame section=SectionId::Security>
            <SectionHeader heading=catalog::SECURITY_HEADING/>
            <BrickGrid section=SectionId::Security cards=catalog::SECURITY_CARDS/>
        </SectionFrame>
    }
}
