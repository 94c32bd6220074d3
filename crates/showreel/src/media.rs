//! Media layer: per-slide playback commands and the loader snapshot source.
//!
//! The controller only speaks the [`MediaDeck`] trait, so tests run against a
//! stub and the shipped poster-backed implementation stays swappable for a
//! real video backend. Playback failures are logged, never surfaced: a slide
//! whose media refuses to start is still a working slide.

use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::deck::Deck;

/// Playback surface for the slide set. Index is the slide position.
pub trait MediaDeck {
    /// Whether the slide owns any playable media at all.
    fn has_media(&self, index: usize) -> bool;

    /// Start playback. May fail (missing file, backend refusal); the caller
    /// logs and moves on.
    fn play(&mut self, index: usize) -> Result<()>;

    fn pause(&mut self, index: usize);

    /// Reset playback position to the start. Always leaves the slide paused.
    fn rewind(&mut self, index: usize);

    fn is_paused(&self, index: usize) -> bool;

    /// Capture a backdrop image for the loader. `None` means no capture was
    /// possible; callers fall back to a neutral backdrop.
    fn snapshot(&self, index: usize) -> Option<image::RgbaImage>;
}

/// Poster-backed media: playback is simulated state, the snapshot comes from
/// the slide's poster file.
pub struct PosterDeck {
    slides: Vec<PosterSlide>,
}

struct PosterSlide {
    poster: Option<PathBuf>,
    video: Option<PathBuf>,
    paused: bool,
}

impl PosterDeck {
    pub fn from_deck(deck: &Deck) -> Self {
        let slides = deck
            .slides
            .iter()
            .map(|s| PosterSlide {
                poster: s.poster.clone(),
                video: s.video.clone(),
                paused: true,
            })
            .collect();
        Self { slides }
    }
}

impl MediaDeck for PosterDeck {
    fn has_media(&self, index: usize) -> bool {
        self.slides.get(index).is_some_and(|s| s.video.is_some())
    }

    fn play(&mut self, index: usize) -> Result<()> {
        let Some(slide) = self.slides.get_mut(index) else {
            anyhow::bail!("No slide at index {index}");
        };
        let Some(video) = &slide.video else {
            anyhow::bail!("Slide {index} has no media");
        };
        if !video.exists() {
            anyhow::bail!("Media file not found: {}", video.display());
        }
        slide.paused = false;
        Ok(())
    }

    fn pause(&mut self, index: usize) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.paused = true;
        }
    }

    fn rewind(&mut self, index: usize) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.paused = true;
        }
    }

    fn is_paused(&self, index: usize) -> bool {
        self.slides.get(index).is_none_or(|s| s.paused)
    }

    fn snapshot(&self, index: usize) -> Option<image::RgbaImage> {
        let poster = self.slides.get(index)?.poster.as_ref()?;
        match image::open(poster) {
            Ok(img) => Some(img.into_rgba8()),
            Err(e) => {
                debug!("Snapshot capture from {} failed: {e}", poster.display());
                None
            }
        }
    }
}
