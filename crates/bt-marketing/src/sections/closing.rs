//! Closing call to action

use bt_core::content::catalog;
use bt_core::SectionId;
use leptos::*;
use crate::components::ActionRow;

#[component]
pub fn FinalCtaSection() -> impl IntoView {
    view! {
        <section
            data-section=SectionId::FinalCta.name()
            class="flex flex-col items-center gap-10 w-full px-5 sm:px-8 lg:px-20 py-20 md:py-[120px] bg-[linear-gradient(to_bottom,#09090B_0%,#0F172A_100%)]"
        >
            <h2 class="text-4xl md:text-[56px] font-extrabold text-[#FAFAFA] text-center leading-[1.1] tracking-[-2px] max-w-[800px]">
                {catalog::CLOSING_TITLE}
            </h2>
            <p class="text-lg text-[#A1A1AA] text-center leading-[1.6] max-w-[550px]">
                {catalog::CLOSING_LEDE}
            </p>
            <ActionRow actions=catalog::CLOSING_ACTIONS large=true/>
        </section>
    }
}
