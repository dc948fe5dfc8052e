//! Main application component

use bt_core::content::catalog;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html lang="en"/>
        <Title text=catalog::BRAND/>
        <Meta name="description" content=catalog::TAGLINE/>
        <Meta name="viewport" content="width=device-width, initial-scale=1"/>
        <Script src="https://cdn.tailwindcss.com"/>
        <Router>
            <main class="flex flex-col w-full min-h-screen bg-[#09090B] font-sans antialiased">
                <Routes>
                    <Route path="/" view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}
