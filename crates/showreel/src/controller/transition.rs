//! Slide-to-slide transition: a two-stage sequence that slides the target in
//! from the far edge, then fades its chrome up with a per-element stagger.

use crate::anim;

use super::{ChromeVisual, Direction, SlideVisual};

const ENTER_DURATION: f32 = 1.0;
const CHROME_DURATION: f32 = 0.8;
/// Chrome starts this long before the enter stage ends.
const CHROME_OVERLAP: f32 = 0.5;
const CHROME_STAGGER: f32 = 0.2;
const CHROME_RISE: f32 = 50.0;

pub(super) struct SlideTransition {
    from: usize,
    to: usize,
    direction: Direction,
    elapsed: f32,
}

impl SlideTransition {
    /// Stage the target slide at the far edge and put it above the current
    /// one. Forward travel enters from the bottom (+100%), backward from the
    /// top (-100%).
    pub(super) fn begin(
        from: usize,
        to: usize,
        direction: Direction,
        slides: &mut [SlideVisual],
    ) -> Self {
        let next = &mut slides[to];
        next.visible = true;
        next.z_index = 2;
        next.opacity = 1.0;
        next.scale = 1.0;
        next.y_percent = Self::entry_offset(direction);
        next.chrome = [ChromeVisual::hidden(); 3];

        slides[from].z_index = 1;

        Self {
            from,
            to,
            direction,
            elapsed: 0.0,
        }
    }

    fn entry_offset(direction: Direction) -> f32 {
        match direction {
            Direction::Forward => 100.0,
            Direction::Backward => -100.0,
        }
    }

    pub(super) fn to(&self) -> usize {
        self.to
    }

    /// Full sequence length: the chrome stagger outlasts the enter stage.
    fn total() -> f32 {
        let chrome_end = ENTER_DURATION - CHROME_OVERLAP + 2.0 * CHROME_STAGGER + CHROME_DURATION;
        ENTER_DURATION.max(chrome_end)
    }

    /// Advance the sequence; returns true exactly once, when every sub-step
    /// has finished and the previous slide has been parked back to neutral.
    pub(super) fn advance(&mut self, dt: f32, slides: &mut [SlideVisual]) -> bool {
        self.elapsed += dt.max(0.0);

        let enter = anim::ease_in_out_quint(anim::window(self.elapsed, 0.0, ENTER_DURATION));
        slides[self.to].y_percent = anim::lerp(Self::entry_offset(self.direction), 0.0, enter);

        let chrome_start = ENTER_DURATION - CHROME_OVERLAP;
        for (i, chrome) in slides[self.to].chrome.iter_mut().enumerate() {
            let t = anim::ease_out_cubic(anim::window(
                self.elapsed,
                chrome_start + i as f32 * CHROME_STAGGER,
                CHROME_DURATION,
            ));
            chrome.offset = anim::lerp(CHROME_RISE, 0.0, t);
            chrome.opacity = t;
        }

        if self.elapsed < Self::total() {
            return false;
        }

        let prev = &mut slides[self.from];
        prev.visible = false;
        prev.opacity = 0.0;
        prev.y_percent = 0.0;
        prev.z_index = 1;

        let next = &mut slides[self.to];
        next.y_percent = 0.0;
        next.chrome = [ChromeVisual::shown(); 3];
        true
    }
}
