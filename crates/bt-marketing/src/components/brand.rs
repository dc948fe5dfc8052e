//! Logo mark and wordmark

use bt_core::content::catalog;
use leptos::*;

#[component]
pub fn BrandMark(#[prop(optional)] compact: bool) -> impl IntoView {
    let (tile, inner, word) = if compact {
        ("w-7 h-7 rounded-[7px]", "top-1 left-1 w-3 h-3", "text-lg")
    } else {
        ("w-8 h-8 rounded-lg", "top-[5px] left-[5px] w-3.5 h-3.5", "text-xl tracking-[-0.5px]")
    };

    view! {
        <a href="#" class="flex items-center gap-2.5">
            <div class=format!("{} bg-[#2563EB] relative", tile)>
                <div class=format!("absolute {} rounded-[3px] bg-white/20", inner)></div>
            </div>
            <span class=format!("{} font-bold text-[#FAFAFA]", word)>{catalog::BRAND}</span>
        </a>
    }
}
