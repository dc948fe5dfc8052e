//! Site header with the navigation disclosure

use bt_core::disclosure::{self, Disclosure, ToggleGlyph};
use bt_core::{NavTarget, ViewportClass};
use leptos::*;
use crate::components::{ActionLink, BrandMark};

#[component]
pub fn SiteHeader() -> impl IntoView {
    let (menu, set_menu) = create_signal(Disclosure::new());

    // Wide layout ignores the open flag
    let inline = disclosure::render(false, ViewportClass::Wide);
    let compact = move || menu.get().render(ViewportClass::Narrow);
    let glyph = move || compact().toggle_glyph().unwrap_or(ToggleGlyph::Open);

    view! {
        <header class="sticky top-0 z-50 w-full bg-[#09090BCC] backdrop-blur-md">
            <div class="flex items-center justify-between h-[72px] px-5 sm:px-8 lg:px-20">
                <BrandMark/>

                // Desktop Nav
                <nav class="hidden lg:flex items-center gap-9">
                    {inline
                        .visible_links()
                        .iter()
                        .map(|target| view! {
                            <a
                                href=target.href()
                                class="text-sm font-medium text-[#A1A1AA] hover:text-[#FAFAFA] transition-colors"
                            >
                                {target.label()}
                            </a>
                        })
                        .collect_view()}
                </nav>
                <div class="hidden lg:flex items-center gap-4">
                    {inline
                        .visible_actions()
                        .iter()
                        .map(|action| view! { <ActionLink action=*action/> })
                        .collect_view()}
                </div>

                // Mobile menu button
                <button
                    class="lg:hidden p-2 rounded-md text-[#A1A1AA] hover:text-[#FAFAFA] hover:bg-white/5"
                    aria-label=move || glyph().aria_label()
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| set_menu.update(Disclosure::toggle)
                >
                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d=move || glyph().path()
                        />
                    </svg>
                </button>
            </div>

            // Mobile menu
            {move || compact().overlay().copied().map(|overlay| view! {
                <div class="lg:hidden border-t border-[#27272A] bg-[#09090B]">
                    <div class="px-5 py-4 space-y-3">
                        {overlay
                            .links
                            .iter()
                            .map(|target| nav_item(*target, set_menu))
                            .collect_view()}
                        <div class="pt-4 border-t border-[#27272A] space-y-3">
                            {overlay
                                .actions
                                .iter()
                                .map(|action| view! { <ActionLink action=*action block=true/> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            })}
        </header>
    }
}

fn nav_item(target: NavTarget, set_menu: WriteSignal<Disclosure>) -> impl IntoView {
    view! {
        <a
            href=target.href()
            class="block text-[#A1A1AA] hover:text-[#FAFAFA]"
            on:click=move |_| set_menu.update(|menu| {
                menu.select(target);
            })
        >
            {target.label()}
        </a>
    }
}
