//! Marketing site components

mod actions;
mod brand;
mod cards;
mod header;

pub use actions::{ActionLink, ActionRow};
pub use brand::BrandMark;
pub use cards::*;
pub use header::SiteHeader;
