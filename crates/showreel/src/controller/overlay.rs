//! About overlay motion: a panel sliding between fully hidden (+100%) and
//! fully shown (0%). Opening and closing are transitions like any other and
//! hold the same lock.

use crate::anim::{Tween, ease_in_out_quint};

use super::StageVisual;

const OPEN_DURATION: f32 = 1.0;
const CLOSE_DURATION: f32 = 0.8;

pub(super) struct OverlayMotion {
    opening: bool,
    tween: Tween,
}

impl OverlayMotion {
    pub(super) fn opening() -> Self {
        Self {
            opening: true,
            tween: Tween::new(OPEN_DURATION, ease_in_out_quint),
        }
    }

    pub(super) fn closing() -> Self {
        Self {
            opening: false,
            tween: Tween::new(CLOSE_DURATION, ease_in_out_quint),
        }
    }

    pub(super) fn is_opening(&self) -> bool {
        self.opening
    }

    pub(super) fn advance(&mut self, dt: f32, stage: &mut StageVisual) -> bool {
        self.tween.advance(dt);
        stage.overlay_offset = if self.opening {
            self.tween.lerp(100.0, 0.0)
        } else {
            self.tween.lerp(0.0, 100.0)
        };
        self.tween.finished()
    }
}
