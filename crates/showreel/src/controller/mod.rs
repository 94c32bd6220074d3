//! The show controller: slide sequencing, the shared animation lock, and the
//! visual state the renderer draws from.
//!
//! All animated state changes (slide transitions, the intro reel, the about
//! overlay) are serialized through a single `is_animating` lock. Contention
//! never queues: a request arriving while the lock is held is dropped, and an
//! optional reject hook lets callers observe that it happened. Time only
//! moves through [`ShowController::tick`], so tests drive the whole machine
//! deterministically.

mod intro;
mod overlay;
mod transition;

#[cfg(test)]
mod tests;

use log::{debug, warn};

use crate::gesture::{GestureAdapter, GestureConfig, NavIntent};
use crate::media::MediaDeck;

use intro::IntroReel;
use overlay::OverlayMotion;
use transition::SlideTransition;

pub const CHROME_TITLE: usize = 0;
pub const CHROME_PLAY: usize = 1;
pub const CHROME_LOGO: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Operations dropped by the no-op rejection policy. Fed to the reject hook
/// so tests can tell "attempted and refused" apart from "never issued".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectedOp {
    Navigate,
    OverlayOpen,
    OverlayClose,
    IntroReplay,
    MediaToggle,
}

/// Per-slide chrome element (title, play button, logo) enter state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeVisual {
    /// Downward offset in points; 0 is the resting position.
    pub offset: f32,
    pub opacity: f32,
}

impl ChromeVisual {
    pub(crate) fn hidden() -> Self {
        Self {
            offset: 50.0,
            opacity: 0.0,
        }
    }

    pub(crate) fn shown() -> Self {
        Self {
            offset: 0.0,
            opacity: 1.0,
        }
    }
}

/// Everything the renderer needs to draw one slide. The controller mutates
/// these; the render layer only reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideVisual {
    /// Vertical offset as a percentage of viewport height. 0 = centered,
    /// +100 = parked below the bottom edge, -100 = above the top edge.
    pub y_percent: f32,
    pub opacity: f32,
    pub z_index: i32,
    pub visible: bool,
    pub scale: f32,
    /// The currently displayed slide.
    pub active: bool,
    /// The "is-playing" class flag.
    pub playing: bool,
    pub chrome: [ChromeVisual; 3],
}

impl SlideVisual {
    fn resting() -> Self {
        Self {
            y_percent: 0.0,
            opacity: 0.0,
            z_index: 1,
            visible: false,
            scale: 1.0,
            active: false,
            playing: false,
            chrome: [ChromeVisual::shown(); 3],
        }
    }
}

/// Stage-wide visual state: container transform, cosmetic intro overlays,
/// the loader, and the about panel offset.
#[derive(Debug, Clone, PartialEq)]
pub struct StageVisual {
    pub container_scale: f32,
    /// Vertical stretch applied during the intro reel (scaleY).
    pub container_stretch: f32,
    /// Backdrop blur amount in pseudo-pixels; 0 = sharp.
    pub blur: f32,
    pub loader_visible: bool,
    pub logo_opacity: f32,
    /// About panel offset in percent of viewport height; 100 = hidden below.
    pub overlay_offset: f32,
}

impl StageVisual {
    fn initial() -> Self {
        Self {
            container_scale: 1.0,
            container_stretch: 1.0,
            blur: 0.0,
            loader_visible: true,
            logo_opacity: 0.0,
            overlay_offset: 100.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntroConfig {
    /// Full sweeps over the slide set before the reel settles.
    pub loops: u32,
    /// Wall-clock length of the sweep in seconds.
    pub duration: f32,
    /// Longest wait for a media-readiness signal before starting anyway.
    pub media_wait: f32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            loops: 6,
            duration: 3.0,
            media_wait: 2.0,
        }
    }
}

/// The one in-flight animated activity. `Idle` with the lock held only
/// happens before the intro starts.
enum Activity {
    Idle,
    Intro(IntroReel),
    Transition(SlideTransition),
    Overlay(OverlayMotion),
}

enum Finished {
    None,
    Intro,
    Transition { to: usize },
    Overlay { opening: bool },
}

pub struct ShowController {
    slide_count: usize,
    current_index: usize,
    is_animating: bool,
    intro_has_played: bool,
    overlay_open: bool,
    slides: Vec<SlideVisual>,
    stage: StageVisual,
    gestures: GestureAdapter,
    activity: Activity,
    intro_config: IntroConfig,
    media_ready: bool,
    media_wait_elapsed: f32,
    reject_hook: Option<Box<dyn FnMut(RejectedOp)>>,
}

impl ShowController {
    /// The lock starts pre-acquired: nothing navigates until the intro has
    /// run (or been skipped).
    pub fn new(slide_count: usize, intro: IntroConfig, gestures: GestureConfig) -> Self {
        assert!(slide_count > 0, "a show needs at least one slide");
        Self {
            slide_count,
            current_index: 0,
            is_animating: true,
            intro_has_played: false,
            overlay_open: false,
            slides: vec![SlideVisual::resting(); slide_count],
            stage: StageVisual::initial(),
            gestures: GestureAdapter::new(gestures),
            activity: Activity::Idle,
            intro_config: intro,
            media_ready: false,
            media_wait_elapsed: 0.0,
            reject_hook: None,
        }
    }

    pub fn set_reject_hook(&mut self, hook: impl FnMut(RejectedOp) + 'static) {
        self.reject_hook = Some(Box::new(hook));
    }

    // --- accessors ---

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn intro_has_played(&self) -> bool {
        self.intro_has_played
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn gestures_enabled(&self) -> bool {
        self.gestures.is_enabled()
    }

    pub fn slide(&self, index: usize) -> &SlideVisual {
        &self.slides[index]
    }

    pub fn slides(&self) -> &[SlideVisual] {
        &self.slides
    }

    pub fn stage(&self) -> &StageVisual {
        &self.stage
    }

    // --- clock ---

    /// Advance the active animation by `dt` seconds. Completion side effects
    /// (lock release, index updates, gesture enablement) happen here, exactly
    /// once per activity.
    pub fn tick(&mut self, dt: f32) {
        let finished = match &mut self.activity {
            Activity::Idle => {
                if !self.intro_has_played {
                    // Liveness fallback: start after a bounded wait even if
                    // the media-ready signal never arrives.
                    self.media_wait_elapsed += dt;
                    if self.media_ready || self.media_wait_elapsed >= self.intro_config.media_wait
                    {
                        self.start_intro();
                    }
                }
                Finished::None
            }
            Activity::Intro(reel) => {
                if reel.advance(dt, &mut self.slides, &mut self.stage) {
                    Finished::Intro
                } else {
                    Finished::None
                }
            }
            Activity::Transition(tr) => {
                if tr.advance(dt, &mut self.slides) {
                    Finished::Transition { to: tr.to() }
                } else {
                    Finished::None
                }
            }
            Activity::Overlay(motion) => {
                if motion.advance(dt, &mut self.stage) {
                    Finished::Overlay {
                        opening: motion.is_opening(),
                    }
                } else {
                    Finished::None
                }
            }
        };

        match finished {
            Finished::None => {}
            Finished::Intro => {
                self.activity = Activity::Idle;
                self.finish_intro();
            }
            Finished::Transition { to } => {
                self.activity = Activity::Idle;
                self.current_index = to;
                self.is_animating = false;
            }
            Finished::Overlay { opening } => {
                self.activity = Activity::Idle;
                self.overlay_open = opening;
                self.is_animating = false;
                if !opening {
                    self.gestures.enable();
                }
            }
        }
    }

    /// Signal that slide media is ready; the intro starts on the next tick
    /// instead of waiting out the fallback timeout.
    pub fn notify_media_ready(&mut self) {
        self.media_ready = true;
    }

    /// Whether the controller needs ticks to make progress (an animation is
    /// in flight, or the intro is still pending).
    pub fn needs_ticks(&self) -> bool {
        self.is_animating || !self.intro_has_played
    }

    // --- intro ---

    /// Kick the intro reel. One-shot: replay attempts are dropped.
    pub fn start_intro(&mut self) {
        if self.intro_has_played {
            self.reject(RejectedOp::IntroReplay);
            return;
        }
        self.intro_has_played = true;
        self.is_animating = true;
        self.activity = Activity::Intro(IntroReel::begin(
            self.intro_config.loops,
            self.intro_config.duration,
            &mut self.slides,
            &mut self.stage,
        ));
    }

    /// Jump straight to the post-intro rest state (CLI `--skip-intro`).
    pub fn skip_intro(&mut self) {
        if self.intro_has_played {
            self.reject(RejectedOp::IntroReplay);
            return;
        }
        self.intro_has_played = true;
        self.activity = Activity::Idle;
        self.finish_intro();
    }

    fn finish_intro(&mut self) {
        intro::apply_rest_layout(&mut self.slides, &mut self.stage);
        // The reel lands on slide 0 no matter where the sweep stopped.
        self.current_index = 0;
        self.is_animating = false;
        self.gestures.enable();
    }

    // --- navigation ---

    /// Handle a discrete navigation intent with wrap-around index arithmetic.
    pub fn navigate(&mut self, intent: NavIntent, media: &mut dyn MediaDeck) {
        if self.is_animating {
            self.reject(RejectedOp::Navigate);
            return;
        }
        let n = self.slide_count;
        let (target, direction) = match intent {
            NavIntent::Advance => ((self.current_index + 1) % n, Direction::Forward),
            NavIntent::Retreat => ((self.current_index + n - 1) % n, Direction::Backward),
        };
        if target == self.current_index {
            return;
        }
        self.goto(target, direction, media);
    }

    /// Start a transition to `target`. No-op while the lock is held or for
    /// out-of-range/current targets.
    pub fn goto(&mut self, target: usize, direction: Direction, media: &mut dyn MediaDeck) {
        if self.is_animating {
            self.reject(RejectedOp::Navigate);
            return;
        }
        if target >= self.slide_count || target == self.current_index {
            return;
        }
        self.is_animating = true;

        let from = self.current_index;
        self.slides[from].playing = false;
        self.slides[from].active = false;
        if media.has_media(from) {
            media.pause(from);
            media.rewind(from);
        }
        self.slides[target].playing = false;
        self.slides[target].active = true;

        self.activity = Activity::Transition(SlideTransition::begin(
            from,
            target,
            direction,
            &mut self.slides,
        ));
    }

    /// Feed a raw scroll/drag delta through the gesture adapter.
    pub fn feed_scroll(&mut self, delta_y: f32, over_ignored: bool, media: &mut dyn MediaDeck) {
        if let Some(intent) = self.gestures.feed_scroll(delta_y, over_ignored) {
            self.navigate(intent, media);
        }
    }

    // --- media ---

    /// Toggle playback on a slide. Gated on "is the current slide, not
    /// mid-transition, intro finished"; playback failures are logged and the
    /// playing flag is cleared, never surfaced.
    pub fn toggle_media(&mut self, index: usize, media: &mut dyn MediaDeck) {
        if index != self.current_index || self.is_animating || !self.intro_has_played {
            self.reject(RejectedOp::MediaToggle);
            return;
        }
        if !media.has_media(index) {
            return;
        }
        if media.is_paused(index) {
            self.slides[index].playing = true;
            if let Err(e) = media.play(index) {
                warn!("Media playback on slide {index} did not start: {e}");
                self.slides[index].playing = false;
            }
        } else {
            self.slides[index].playing = false;
            media.pause(index);
        }
    }

    // --- overlay ---

    /// Open the about overlay. Shares the transition lock with slide
    /// navigation and disables gestures while shown.
    pub fn open_overlay(&mut self) {
        if self.is_animating || self.overlay_open {
            self.reject(RejectedOp::OverlayOpen);
            return;
        }
        self.is_animating = true;
        self.gestures.disable();
        self.activity = Activity::Overlay(OverlayMotion::opening());
    }

    pub fn close_overlay(&mut self) {
        if self.is_animating || !self.overlay_open {
            self.reject(RejectedOp::OverlayClose);
            return;
        }
        self.is_animating = true;
        self.activity = Activity::Overlay(OverlayMotion::closing());
    }

    fn reject(&mut self, op: RejectedOp) {
        debug!("Dropped {op:?} (lock held or precondition unmet)");
        if let Some(hook) = &mut self.reject_hook {
            hook(op);
        }
    }
}
