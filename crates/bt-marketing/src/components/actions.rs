//! Call-to-action links

use bt_core::content::{CallToAction, Emphasis};
use leptos::*;

fn emphasis_class(emphasis: Emphasis) -> &'static str {
    match emphasis {
        Emphasis::Primary => "bg-[#2563EB] hover:bg-[#1D4ED8] text-white font-semibold",
        Emphasis::Secondary => "border border-[#3F3F46] hover:border-[#52525B] text-[#A1A1AA] font-medium",
        Emphasis::Plain => "text-[#A1A1AA] hover:text-[#FAFAFA] font-medium",
    }
}

#[component]
pub fn ActionLink(
    action: CallToAction,
    /// Larger padding for hero and closing buttons
    #[prop(optional)]
    large: bool,
    /// Stretch to the container width
    #[prop(optional)]
    block: bool,
) -> impl IntoView {
    let size = match (action.emphasis, large) {
        (Emphasis::Plain, _) => "text-sm",
        (_, true) => "px-7 py-3.5 rounded-[10px] text-base",
        (_, false) => "px-5 py-2.5 rounded-lg text-sm",
    };
    let width = if block { "w-full justify-center" } else { "" };

    view! {
        <a
            href=action.href
            class=format!(
                "flex items-center gap-2 transition-colors {} {} {}",
                size,
                width,
                emphasis_class(action.emphasis),
            )
        >
            <span>{action.label}</span>
            {action.trailing_icon.map(|icon| view! { <span aria-hidden="true">{icon.glyph()}</span> })}
        </a>
    }
}

#[component]
pub fn ActionRow(actions: &'static [CallToAction], #[prop(optional)] large: bool) -> impl IntoView {
    view! {
        <div class="flex flex-col sm:flex-row items-center gap-3 sm:gap-4 w-full sm:w-auto">
            {actions
                .iter()
                .map(|action| view! { <ActionLink action=*action large=large/> })
                .collect_view()}
        </div>
    }
}
