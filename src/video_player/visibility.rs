// SPDX-License-Identifier: MPL-2.0
//! Auto-hide timer for the overlay controls.
//!
//! Two states, [`Visibility::Visible`] and [`Visibility::Hidden`]:
//! - any activity forces `Visible` and re-arms the timer
//! - the timer hides the controls only if playback is still running when it fires
//! - pausing while hidden changes nothing; only activity brings them back
//!
//! The timer is a deadline, not a thread. The host feeds `Instant`s in
//! through [`ControlsTimer::note_activity`] and [`ControlsTimer::tick`] and can
//! schedule its own wakeup from [`ControlsTimer::deadline`]. Re-arming replaces
//! the previous deadline, so timers never overlap.

use crate::domain::video::ControlsHideDelay;
use std::time::{Duration, Instant};

/// Whether the overlay controls are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// Visibility state plus the pending hide deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsTimer {
    visibility: Visibility,
    hide_at: Option<Instant>,
    delay: Duration,
}

impl ControlsTimer {
    /// Creates a timer with controls visible and nothing armed.
    pub fn new(delay: ControlsHideDelay) -> Self {
        Self {
            visibility: Visibility::Visible,
            hide_at: None,
            delay: delay.as_duration(),
        }
    }

    /// Current visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns true while the controls are shown.
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// When the armed timer fires, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    /// Pointer activity: show the controls and (re)arm the timer.
    pub fn note_activity(&mut self, now: Instant) {
        self.visibility = Visibility::Visible;
        self.hide_at = Some(now + self.delay);
    }

    /// Fires the timer if its deadline has passed.
    ///
    /// Returns true if the controls were hidden by this call.
    pub fn tick(&mut self, now: Instant, is_playing: bool) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide_at = None;
                if is_playing && self.is_visible() {
                    self.visibility = Visibility::Hidden;
                    return true;
                }
                false
            }
            _ => false,
        }
    }

    /// Pointer left the player: hide at once while playing.
    pub fn pointer_left(&mut self, is_playing: bool) {
        if is_playing {
            self.visibility = Visibility::Hidden;
            self.hide_at = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer() -> ControlsTimer {
        ControlsTimer::new(ControlsHideDelay::default())
    }

    #[test]
    fn starts_visible_and_unarmed() {
        let timer = timer();
        assert!(timer.is_visible());
        assert!(timer.deadline().is_none());
    }

    #[test]
    fn hides_exactly_at_delay_while_playing() {
        let start = Instant::now();
        let mut timer = timer();
        timer.note_activity(start);

        assert!(!timer.tick(start + Duration::from_millis(2_999), true));
        assert!(timer.is_visible());

        assert!(timer.tick(start + Duration::from_millis(3_000), true));
        assert_eq!(timer.visibility(), Visibility::Hidden);
        assert!(timer.deadline().is_none());
    }

    #[test]
    fn expiry_while_paused_keeps_controls() {
        let start = Instant::now();
        let mut timer = timer();
        timer.note_activity(start);

        assert!(!timer.tick(start + Duration::from_secs(5), false));
        assert!(timer.is_visible());
        assert!(timer.deadline().is_none());
    }

    #[test]
    fn activity_rearms_instead_of_stacking() {
        let start = Instant::now();
        let mut timer = timer();
        timer.note_activity(start);
        timer.note_activity(start + Duration::from_millis(2_000));

        // The first deadline no longer applies
        assert!(!timer.tick(start + Duration::from_millis(3_000), true));
        assert!(timer.is_visible());
        assert!(timer.tick(start + Duration::from_millis(5_000), true));
    }

    #[test]
    fn activity_reveals_hidden_controls() {
        let start = Instant::now();
        let mut timer = timer();
        timer.note_activity(start);
        timer.tick(start + Duration::from_secs(3), true);
        assert!(!timer.is_visible());

        timer.note_activity(start + Duration::from_secs(4));
        assert!(timer.is_visible());
        assert_eq!(
            timer.deadline(),
            Some(start + Duration::from_secs(4) + Duration::from_secs(3))
        );
    }

    #[test]
    fn pointer_left_hides_only_while_playing() {
        let mut timer = timer();
        timer.pointer_left(false);
        assert!(timer.is_visible());

        timer.note_activity(Instant::now());
        timer.pointer_left(true);
        assert!(!timer.is_visible());
        assert!(timer.deadline().is_none());
    }

    #[test]
    fn custom_delay_is_respected() {
        let start = Instant::now();
        let mut timer = ControlsTimer::new(ControlsHideDelay::from_millis(1_000));
        timer.note_activity(start);
        assert!(timer.tick(start + Duration::from_millis(1_000), true));
    }
}
