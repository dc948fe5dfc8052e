//! Investor pitch deck outline
//!
//! The deck tells the same story as the landing page, one slide per beat.
//! Where a slide covers a page section it is built from the same catalog
//! records; deck-only material lives in [`pitch`].

pub mod pitch;

use crate::{SiteError, SiteResult};
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

/// One titled line on a slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckPoint {
    pub title: String,
    pub detail: String,
}

impl DeckPoint {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    /// 1-based position, maintained by [`Deck`]
    pub number: usize,
    pub name: &'static str,
    pub label: Option<&'static str>,
    pub title: &'static str,
    pub lede: Option<&'static str>,
    pub points: Vec<DeckPoint>,
}

impl Slide {
    pub fn new(name: &'static str, title: &'static str) -> Self {
        Self {
            number: 0,
            name,
            label: None,
            title,
            lede: None,
            points: Vec::new(),
        }
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn lede(mut self, lede: Option<&'static str>) -> Self {
        self.lede = lede;
        self
    }

    pub fn points(mut self, points: impl IntoIterator<Item = DeckPoint>) -> Self {
        self.points = points.into_iter().collect();
        self
    }

    /// Slide name as it appears in the deck's layer list, e.g. `06 - The Platform`
    pub fn heading(&self) -> String {
        format!("{:02} - {}", self.number, self.name)
    }
}

/// Ordered slides, numbered consecutively from 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Self {
        let mut deck = Self { slides };
        deck.renumber();
        deck
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Insert `slide` so that it becomes slide `number`.
    ///
    /// Later slides shift up by one. A number past the end appends.
    pub fn insert(&mut self, number: usize, slide: Slide) {
        let index = number.saturating_sub(1).min(self.slides.len());
        debug!(slide = slide.name, index, "inserting slide");
        self.slides.insert(index, slide);
        self.renumber();
    }

    /// The standard deck with the platform slide placed after the architecture slide
    pub fn with_platform(mut self) -> Self {
        self.insert(pitch::PLATFORM_POSITION, pitch::platform_slide());
        self
    }

    fn renumber(&mut self) {
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.number = i + 1;
        }
    }
}

/// Deck output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckFormat {
    Markdown,
    Json,
}

impl FromStr for DeckFormat {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(DeckFormat::Markdown),
            "json" => Ok(DeckFormat::Json),
            other => Err(SiteError::Config(format!("unknown deck format: {}", other))),
        }
    }
}

/// Render the deck outline in the given format
pub fn generate(deck: &Deck, format: DeckFormat) -> SiteResult<String> {
    match format {
        DeckFormat::Markdown => Ok(markdown(deck)),
        DeckFormat::Json => serde_json::to_string_pretty(deck)
            .map_err(|e| SiteError::Render(format!("JSON serialization failed: {}", e))),
    }
}

fn markdown(deck: &Deck) -> String {
    let mut out = String::new();

    for slide in deck.slides() {
        out.push_str(&format!("## {}\n\n", slide.heading()));
        if let Some(label) = slide.label {
            out.push_str(&format!("_{}_\n\n", label));
        }
        out.push_str(&format!("### {}\n\n", slide.title));
        if let Some(lede) = slide.lede {
            out.push_str(&format!("{}\n\n", lede));
        }
        for point in &slide.points {
            if point.detail.is_empty() {
                out.push_str(&format!("- **{}**\n", point.title));
            } else {
                out.push_str(&format!("- **{}**: {}\n", point.title, point.detail));
            }
        }
        if !slide.points.is_empty() {
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Deck {
        Deck::new(vec![
            Slide::new("Title", "First"),
            Slide::new("Middle", "Second"),
            Slide::new("Closing", "Third"),
        ])
    }

    #[test]
    fn test_new_numbers_from_one() {
        let deck = sample();
        let numbers: Vec<_> = deck.slides().iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_shifts_later_slides() {
        let mut deck = sample();
        deck.insert(2, Slide::new("Inserted", "New"));

        let headings: Vec<_> = deck.slides().iter().map(Slide::heading).collect();
        assert_eq!(
            headings,
            vec!["01 - Title", "02 - Inserted", "03 - Middle", "04 - Closing"]
        );
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut deck = sample();
        deck.insert(99, Slide::new("Appendix", "Extra"));
        assert_eq!(deck.len(), 4);
        assert_eq!(deck.slides()[3].heading(), "04 - Appendix");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("Markdown".parse::<DeckFormat>().unwrap(), DeckFormat::Markdown);
        assert_eq!("json".parse::<DeckFormat>().unwrap(), DeckFormat::Json);
        assert!(matches!(
            "pptx".parse::<DeckFormat>(),
            Err(SiteError::Config(_))
        ));
    }

    #[test]
    fn test_markdown_layout() {
        let deck = Deck::new(vec![Slide::new("Problem", "Broken")
            .label("THE PROBLEM")
            .lede(Some("Silos everywhere."))
            .points([DeckPoint::new("Siloed", "No interop"), DeckPoint::new("contact", "")])]);

        let out = generate(&deck, DeckFormat::Markdown).unwrap();
        assert_eq!(
            out,
            "## 01 - Problem\n\n_THE PROBLEM_\n\n### Broken\n\nSilos everywhere.\n\n\
- **Siloed**: No interop\n- **contact**\n\n"
        );
    }

    #[test]
    fn test_json_carries_numbers() {
        let out = generate(&sample(), DeckFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["slides"][2]["number"], 3);
        assert_eq!(value["slides"][2]["name"], "Closing");
    }
}
