//! Site footer

use bt_core::content::{catalog, FooterColumn};
use bt_core::{layout, SectionId};
use leptos::*;
use crate::components::BrandMark;

#[component]
pub fn Footer() -> impl IntoView {
    let section = SectionId::Footer;

    view! {
        <footer
            id=section.anchor()
            data-section=section.name()
            class="flex flex-col gap-12 w-full px-5 sm:px-8 lg:px-20 pt-[60px] pb-10 bg-[#09090B] border-t border-[#131316]"
        >
            <div class="flex flex-col lg:flex-row justify-between gap-10 w-full">
                <div class="flex flex-col gap-4 lg:w-[300px]">
                    <BrandMark compact=true/>
                    <p class="text-[13px] text-[#71717A] leading-[1.5]">{catalog::TAGLINE}</p>
                </div>
                <div class=format!("grid {} gap-10 lg:gap-16", layout::responsive_grid(section))>
                    {catalog::FOOTER_COLUMNS
                        .iter()
                        .map(|column| view! { <LinkColumn column=*column/> })
                        .collect_view()}
                </div>
            </div>

            <div class="w-full h-px bg-[#131316]"></div>

            <div class="flex flex-col sm:flex-row items-center justify-between gap-4 w-full">
                <span class="text-xs text-[#3F3F46]">{catalog::COPYRIGHT}</span>
                <div class="flex items-center gap-5">
                    {catalog::SOCIALS
                        .iter()
                        .map(|social| view! {
                            <a href="#" class="text-xs font-medium text-[#52525B] hover:text-[#A1A1AA] transition-colors">
                                {*social}
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(column: FooterColumn) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-3.5">
            <span class="text-[13px] font-semibold text-[#FAFAFA]">{column.title}</span>
            {column
                .links
                .iter()
                .map(|link| view! {
                    <a href="#" class="text-[13px] text-[#71717A] hover:text-[#A1A1AA] transition-colors">
                        {*link}
                    </a>
                })
                .collect_view()}
        </div>
    }
}
