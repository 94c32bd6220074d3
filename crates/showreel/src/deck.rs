//! Deck files: the fixed, ordered set of slides the show plays.
//!
//! A deck is a small YAML document. The slide set is static for the lifetime
//! of the app; only per-slide visual flags mutate at runtime (those live in
//! the controller, not here).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub meta: DeckMeta,
    pub slides: Vec<SlideSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}

/// One slide as authored in the deck file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlideSpec {
    pub title: String,

    /// Poster image shown as the slide backdrop (and loader snapshot source).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<PathBuf>,

    /// Video file backing this slide's play button. Playback itself is
    /// delegated to the media layer; an absent video means no play button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<PathBuf>,

    /// Backdrop color as `#RRGGBB`, used when no poster is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl Deck {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read deck file {}", path.display()))?;
        let mut deck = Self::parse(&contents)?;
        let base = path.parent().unwrap_or(Path::new("."));
        deck.resolve_paths(base);
        Ok(deck)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let deck: Deck = serde_yaml::from_str(contents).context("Invalid deck file")?;
        if deck.slides.is_empty() {
            anyhow::bail!("Deck contains no slides");
        }
        Ok(deck)
    }

    /// Make poster/video paths relative to the deck file's directory.
    fn resolve_paths(&mut self, base: &Path) {
        for slide in &mut self.slides {
            if let Some(poster) = &slide.poster {
                if poster.is_relative() {
                    slide.poster = Some(base.join(poster));
                }
            }
            if let Some(video) = &slide.video {
                if video.is_relative() {
                    slide.video = Some(base.join(video));
                }
            }
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn display_title(&self) -> &str {
        self.meta.title.as_deref().unwrap_or("showreel")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_deck() {
        let deck = Deck::parse("slides:\n  - title: One\n  - title: Two\n").unwrap();
        assert_eq!(deck.slide_count(), 2);
        assert_eq!(deck.slides[0].title, "One");
        assert!(deck.slides[0].poster.is_none());
        assert_eq!(deck.display_title(), "showreel");
    }

    #[test]
    fn parses_meta_and_media() {
        let yaml = "\
meta:
  title: Portfolio
  theme: dark
  footer: 2026
slides:
  - title: Reel
    poster: img/reel.jpg
    video: clips/reel.mp4
    background: \"#101218\"
";
        let deck = Deck::parse(yaml).unwrap();
        assert_eq!(deck.display_title(), "Portfolio");
        assert_eq!(deck.meta.theme.as_deref(), Some("dark"));
        assert_eq!(deck.slides[0].video.as_deref(), Some(Path::new("clips/reel.mp4")));
        assert_eq!(deck.slides[0].background.as_deref(), Some("#101218"));
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert!(Deck::parse("slides: []\n").is_err());
        assert!(Deck::parse("not yaml: [").is_err());
    }

    #[test]
    fn relative_paths_resolve_against_deck_dir() {
        let mut deck = Deck::parse("slides:\n  - title: A\n    poster: p.png\n").unwrap();
        deck.resolve_paths(Path::new("/decks"));
        assert_eq!(deck.slides[0].poster.as_deref(), Some(Path::new("/decks/p.png")));
    }
}
