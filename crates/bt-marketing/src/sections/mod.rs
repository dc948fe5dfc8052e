//! The twelve page sections

mod closing;
mod footer;
mod hero;
mod how_it_works;
mod platform;
mod problem;
mod product;
mod security;
mod solution;
mod use_cases;
mod vision;
mod why_it_matters;

pub use closing::FinalCtaSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use how_it_works::HowItWorksSection;
pub use platform::EnterprisePlatformSection;
pub use problem::ProblemSection;
pub use product::ProductSection;
pub use security::SecuritySection;
pub use solution::SolutionSection;
pub use use_cases::UseCasesSection;
pub use vision::VisionSection;
pub use why_it_matters::WhyItMattersSection;

use bt_core::SectionId;
use leptos::*;

/// Render one section by identity
#[component]
pub fn PageSection(section: SectionId) -> impl IntoView {
    match section {
        SectionId::Hero => view! { <HeroSection/> }.into_view(),
        SectionId::Problem => view! { <ProblemSection/> }.into_view(),
        SectionId::Solution => view! { <SolutionSection/> }.into_view(),
        SectionId::HowItWorks => view! { <HowItWorksSection/> }.into_view(),
        SectionId::WhyItMatters => view! { <WhyItMattersSection/> }.into_view(),
        SectionId::UseCases => view! { <UseCasesSection/> }.into_view(),
        SectionId::Product => view! { <ProductSection/> }.into_view(),
        SectionId::Security => view! { <SecuritySection/> }.into_view(),
        SectionId::EnterprisePlatform => view! { <EnterprisePlatformSection/> }.into_view(),
        SectionId::Vision => view! { <VisionSection/> }.into_view(),
        SectionId::FinalCta => view! { <FinalCtaSection/> }.into_view(),
        SectionId::Footer => view! { <Footer/> }.into_view(),
    }
}

/// Standard section frame: anchor id, themed background, centered column
#[component]
fn SectionFrame(section: SectionId, children: Children) -> impl IntoView {
    view! {
        <section
            id=section.anchor()
            data-section=section.name()
            class=format!(
                "flex flex-col items-center gap-10 md:gap-16 w-full px-5 sm:px-8 lg:px-20 py-16 md:py-[100px] {}",
                section.theme().background(),
            )
        >
            {children()}
        </section>
    }
}
