//! Enterprise platform and business model

use bt_core::content::catalog;
use bt_core::SectionId;
use leptos::*;
use crate::components::FeatureRow;

#[component]
pub fn EnterprisePlatformSection() -> impl IntoView {
    let section = SectionId::EnterprisePlatform;
    let heading = catalog::PLATFORM_HEADING;

    view! {
        <section
            id=section.anchor()
            data-section=section.name()
            class=format!(
                "flex flex-col lg:flex-row items-start lg:items-center gap-10 lg:gap-20 w-full px-5 sm:px-8 lg:px-20 py-16 md:py-[100px] {}",
                section.theme().background(),
            )
        >
            <div class="flex flex-col gap-5 md:gap-8 flex-1">
                <span class=format!("text-xs font-semibold tracking-[2px] {}", heading.theme.eyebrow())>
                    {heading.eyebrow}
                </span>
                <h2 class="text-3xl sm:text-4xl md:text-[44px] font-extrabold text-[#FAFAFA] leading-[1.1] tracking-[-1px] md:tracking-[-1.5px]">
                    {heading.title}
                </h2>
                <p class="text-base md:text-[17px] text-[#A1A1AA] leading-[1.7]">{heading.lede}</p>
            </div>
            <div class="flex flex-col gap-3 md:gap-4 flex-1 w-full">
                {catalog::BUSINESS_CARDS
                    .iter()
                    .map(|card| view! { <FeatureRow card=*card/> })
                    .collect_view()}
            </div>
        </section>
    }
}
