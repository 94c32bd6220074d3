//! Intro reel: the one-shot slot-machine sweep played before the first user
//! interaction is allowed.
//!
//! A virtual frame counter runs from 0 to `N * loops - 1` under a
//! decelerating ease, highlighting `floor(frame) mod N` as it goes, while a
//! backdrop blur and a vertical stretch ramp down to sell the deceleration.
//! When the sweep ends the final layout is forced in one shot (slide 0
//! centered, wrap neighbors pre-staged just off-screen) so no straggling
//! per-frame motion can corrupt it, then a short press/release settle plays
//! before the controller unlocks.

use crate::anim;

use super::{CHROME_TITLE, ChromeVisual, SlideVisual, StageVisual};

const BLUR_START: f32 = 20.0;
const STRETCH_START: f32 = 1.15;
/// Z order of the slide the sweep is currently highlighting.
const SWEEP_Z: i32 = 10;

const PRESS_SCALE: f32 = 0.8;
const PRESS_DURATION: f32 = 1.0;
const RELEASE_DURATION: f32 = 0.6;
const TITLE_DURATION: f32 = 0.8;
/// Title fade starts this long before the release stage ends.
const TITLE_OVERLAP: f32 = 0.6;
const TITLE_RISE: f32 = 50.0;
const LOGO_FADE: f32 = 0.5;

enum Phase {
    Sweep { elapsed: f32 },
    Settle { elapsed: f32 },
}

pub(super) struct IntroReel {
    loops: u32,
    duration: f32,
    phase: Phase,
    last_index: Option<usize>,
}

impl IntroReel {
    /// Virtual frame target for a sweep over `slide_count` slides.
    pub(crate) fn total_frames(slide_count: usize, loops: u32) -> f32 {
        (slide_count as f32) * (loops as f32) - 1.0
    }

    pub(super) fn begin(
        loops: u32,
        duration: f32,
        slides: &mut [SlideVisual],
        stage: &mut StageVisual,
    ) -> Self {
        for slide in slides.iter_mut() {
            slide.z_index = 1;
            slide.opacity = 0.0;
            slide.scale = 1.0;
            slide.y_percent = 0.0;
            slide.visible = true;
            slide.active = false;
            slide.playing = false;
        }
        stage.blur = BLUR_START;
        stage.container_stretch = STRETCH_START;

        Self {
            loops,
            duration,
            phase: Phase::Sweep { elapsed: 0.0 },
            last_index: None,
        }
    }

    /// Advance the reel; returns true exactly once, when the settle sequence
    /// has fully played out.
    pub(super) fn advance(
        &mut self,
        dt: f32,
        slides: &mut [SlideVisual],
        stage: &mut StageVisual,
    ) -> bool {
        match &mut self.phase {
            Phase::Sweep { elapsed } => {
                *elapsed += dt.max(0.0);
                let p = anim::ease_out_quad(anim::window(*elapsed, 0.0, self.duration));

                stage.blur = anim::lerp(BLUR_START, 0.0, p);
                stage.container_stretch = anim::lerp(STRETCH_START, 1.0, p);

                let n = slides.len();
                let frame = p * Self::total_frames(n, self.loops);
                let index = (frame.floor() as usize) % n;
                if self.last_index != Some(index) {
                    if let Some(prev) = self.last_index {
                        slides[prev].z_index = 1;
                        slides[prev].opacity = 0.0;
                    }
                    slides[index].z_index = SWEEP_Z;
                    slides[index].opacity = 1.0;
                    slides[index].scale = 1.0;
                    self.last_index = Some(index);
                }

                if *elapsed >= self.duration {
                    // Forced layout overwrites any in-flight sweep state;
                    // this is the sequence's one cancellation point.
                    stage_final_layout(slides, stage);
                    self.phase = Phase::Settle { elapsed: 0.0 };
                }
                false
            }
            Phase::Settle { elapsed } => {
                *elapsed += dt.max(0.0);

                if *elapsed < PRESS_DURATION {
                    let t =
                        anim::ease_in_out_quart(anim::window(*elapsed, 0.0, PRESS_DURATION));
                    stage.container_scale = anim::lerp(1.0, PRESS_SCALE, t);
                } else {
                    let t = anim::ease_out_quart(anim::window(
                        *elapsed,
                        PRESS_DURATION,
                        RELEASE_DURATION,
                    ));
                    stage.container_scale = anim::lerp(PRESS_SCALE, 1.0, t);
                }

                let title_start = PRESS_DURATION + RELEASE_DURATION - TITLE_OVERLAP;
                let t =
                    anim::ease_out_quart(anim::window(*elapsed, title_start, TITLE_DURATION));
                slides[0].chrome[CHROME_TITLE] = ChromeVisual {
                    offset: anim::lerp(TITLE_RISE, 0.0, t),
                    opacity: t,
                };

                stage.logo_opacity = anim::window(*elapsed, 0.0, LOGO_FADE);

                *elapsed >= settle_total()
            }
        }
    }
}

fn settle_total() -> f32 {
    let title_end = PRESS_DURATION + RELEASE_DURATION - TITLE_OVERLAP + TITLE_DURATION;
    (PRESS_DURATION + RELEASE_DURATION).max(title_end)
}

/// Layout at the end of the sweep: slide 0 front and center, its wrap
/// neighbors parked just off the top and bottom edges so the first gesture
/// never reveals a blank gap, everything else faded out.
fn stage_final_layout(slides: &mut [SlideVisual], stage: &mut StageVisual) {
    let n = slides.len();
    for slide in slides.iter_mut() {
        slide.z_index = 1;
        slide.opacity = 1.0;
        slide.scale = 1.0;
        slide.y_percent = 0.0;
        slide.visible = true;
    }

    if n > 1 {
        slides[n - 1].y_percent = -100.0;
        slides[1].y_percent = 100.0;
    }
    slides[0].z_index = 2;
    // The title replays its fade during the settle.
    slides[0].chrome[CHROME_TITLE] = ChromeVisual::hidden();

    for (i, slide) in slides.iter_mut().enumerate() {
        if i >= 2 && i < n - 1 {
            slide.opacity = 0.0;
        }
    }

    stage.blur = 0.0;
    stage.container_stretch = 1.0;
    stage.loader_visible = false;
}

/// The steady rest state after the intro (or a skipped intro): only slide 0
/// visible and active, everything else parked at neutral.
pub(super) fn apply_rest_layout(slides: &mut [SlideVisual], stage: &mut StageVisual) {
    for slide in slides.iter_mut() {
        slide.y_percent = 0.0;
        slide.z_index = 1;
        slide.opacity = 0.0;
        slide.visible = false;
        slide.scale = 1.0;
        slide.active = false;
        slide.playing = false;
        slide.chrome = [ChromeVisual::shown(); 3];
    }
    let first = &mut slides[0];
    first.z_index = 2;
    first.opacity = 1.0;
    first.visible = true;
    first.active = true;

    stage.container_scale = 1.0;
    stage.container_stretch = 1.0;
    stage.blur = 0.0;
    stage.loader_visible = false;
    stage.logo_opacity = 1.0;
}
