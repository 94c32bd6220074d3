//! Gesture input adapter: turns raw wheel/touch deltas into discrete
//! navigation intents.
//!
//! Deltas accumulate until they clear a dead-zone tolerance, then a single
//! intent is emitted and the accumulator resets. The adapter can be disabled
//! wholesale (during the intro and while the about overlay is open) and
//! callers flag deltas originating over ignored regions (logo, buttons),
//! which are dropped.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Advance,
    Retreat,
}

#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Dead zone: accumulated delta must exceed this before an intent fires.
    pub tolerance: f32,
    /// Invert wheel direction so wheel-down advances (natural scrolling).
    pub invert_wheel: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tolerance: 10.0,
            invert_wheel: true,
        }
    }
}

#[derive(Debug)]
pub struct GestureAdapter {
    config: GestureConfig,
    enabled: bool,
    accum: f32,
}

impl GestureAdapter {
    /// Starts disabled: the intro owns the stage until it completes.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            enabled: false,
            accum: 0.0,
        }
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
        self.accum = 0.0;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Feed a vertical scroll/drag delta (egui convention: negative = down).
    /// Returns an intent once the accumulated travel clears the tolerance.
    pub fn feed_scroll(&mut self, delta_y: f32, over_ignored: bool) -> Option<NavIntent> {
        if !self.enabled {
            return None;
        }
        if over_ignored {
            self.accum = 0.0;
            return None;
        }

        let effective = if self.config.invert_wheel {
            -delta_y
        } else {
            delta_y
        };
        // Direction flip mid-accumulation restarts the dead zone.
        if self.accum != 0.0 && effective.signum() != self.accum.signum() {
            self.accum = 0.0;
        }
        self.accum += effective;

        if self.accum.abs() <= self.config.tolerance {
            return None;
        }
        let intent = if self.accum > 0.0 {
            NavIntent::Advance
        } else {
            NavIntent::Retreat
        };
        self.accum = 0.0;
        Some(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> GestureAdapter {
        let mut a = GestureAdapter::new(GestureConfig::default());
        a.enable();
        a
    }

    #[test]
    fn starts_disabled_and_ignores_input() {
        let mut a = GestureAdapter::new(GestureConfig::default());
        assert!(!a.is_enabled());
        assert_eq!(a.feed_scroll(-100.0, false), None);
    }

    #[test]
    fn small_deltas_stay_in_dead_zone() {
        let mut a = adapter();
        assert_eq!(a.feed_scroll(-4.0, false), None);
        assert_eq!(a.feed_scroll(-4.0, false), None);
        // Third nudge crosses tolerance 10.
        assert_eq!(a.feed_scroll(-4.0, false), Some(NavIntent::Advance));
        // Accumulator reset: the next nudge starts over.
        assert_eq!(a.feed_scroll(-4.0, false), None);
    }

    #[test]
    fn wheel_inversion_maps_down_to_advance() {
        let mut a = adapter();
        assert_eq!(a.feed_scroll(-50.0, false), Some(NavIntent::Advance));
        assert_eq!(a.feed_scroll(50.0, false), Some(NavIntent::Retreat));

        let mut plain = GestureAdapter::new(GestureConfig {
            invert_wheel: false,
            ..GestureConfig::default()
        });
        plain.enable();
        assert_eq!(plain.feed_scroll(-50.0, false), Some(NavIntent::Retreat));
    }

    #[test]
    fn ignored_regions_drop_and_reset() {
        let mut a = adapter();
        assert_eq!(a.feed_scroll(-8.0, false), None);
        // Delta over the logo: dropped, and the pending travel is discarded.
        assert_eq!(a.feed_scroll(-50.0, true), None);
        assert_eq!(a.feed_scroll(-8.0, false), None);
    }

    #[test]
    fn direction_flip_restarts_dead_zone() {
        let mut a = adapter();
        assert_eq!(a.feed_scroll(-8.0, false), None);
        assert_eq!(a.feed_scroll(8.0, false), None);
        assert_eq!(a.feed_scroll(-8.0, false), None);
    }

    #[test]
    fn disable_clears_pending_travel() {
        let mut a = adapter();
        assert_eq!(a.feed_scroll(-8.0, false), None);
        a.disable();
        a.enable();
        assert_eq!(a.feed_scroll(-8.0, false), None);
    }
}
