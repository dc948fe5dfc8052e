//! BlockTrace Site Core
//!
//! This crate holds everything the marketing site needs that is not markup:
//! the typed content records, the navigation disclosure state machine,
//! the responsive layout mapping and the fixed page composition. The
//! investor deck outline is built from the same content.

pub mod config;
pub mod content;
pub mod deck;
pub mod disclosure;
pub mod layout;
pub mod page;
pub mod sections;

use thiserror::Error;

pub use config::SiteConfig;
pub use content::{AssetRef, CallToAction, Icon, NavTarget, Theme, Tone};
pub use deck::{Deck, DeckFormat, DeckPoint, Slide};
pub use disclosure::{Disclosure, DisclosureState, NavPresentation, Overlay, ToggleGlyph};
pub use layout::ViewportClass;
pub use page::{compose, PageBlock};
pub use sections::SectionId;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid address {value:?}: {reason}")]
    InvalidAddress { value: String, reason: String },

    #[error("Render error: {0}")]
    Render(String),
}

pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::InvalidAddress {
            value: "nowhere".to_string(),
            reason: "invalid socket address syntax".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid address \"nowhere\": invalid socket address syntax"
        );

        let err = SiteError::Config("missing output name".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing output name");
    }

    #[test]
    fn test_io_error_converts() {
        fn open() -> SiteResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::AddrInUse, "busy"))?;
            Ok(())
        }
        assert!(matches!(open(), Err(SiteError::Io(_))));
    }
}
