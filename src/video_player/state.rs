// SPDX-License-Identifier: MPL-2.0
//! Playback controller.
//!
//! [`VideoPlayer`] maps user intents (play, pause, seek, volume, mute, speed,
//! fullscreen) onto a [`MediaSurface`] and keeps the [`PlaybackState`] the
//! controls render from. Every transition runs synchronously inside a host
//! callback; the only time-based behavior is the controls hide timer.
//!
//! Lifecycle:
//! - Assigning a source resets the state to defaults and pushes them to the surface
//! - Replacing or clearing the source drops the previous [`SourceHandle`], revoking it
//! - Dropping the player drops the current handle the same way

use super::settings::PlayerSettings;
use super::shortcuts::{KeyOutcome, ScopeGuard, Shortcut, ShortcutScope};
use super::time_format::{format_speed, speed_label, time_label};
use super::visibility::ControlsTimer;
use crate::application::port::{FullscreenHost, MediaEvent, MediaSurface, SourceHandle};
use crate::config::{PLAYBACK_SPEED_KEY_STEP, SEEK_BAR_FALLBACK_MAX_SECS};
use crate::domain::error::PlaybackError;
use crate::domain::video::{
    speed_intensity, ControlsHideDelay, PlaybackSpeed, PlaybackStatus, SpeedBounds, SpeedTier,
    Volume,
};
use iced_core::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Clamps a seek target to `[0, duration]`.
///
/// Only the lower bound applies while the duration is unknown. Returns
/// `None` for non-finite targets.
pub fn clamp_position(target: f64, duration: Option<f64>) -> Option<f64> {
    if !target.is_finite() {
        return None;
    }
    let lower = target.max(0.0);
    Some(match duration {
        Some(duration) => lower.min(duration),
        None => lower,
    })
}

// =============================================================================
// PlaybackState
// =============================================================================

/// State of the single loaded source, as the controls see it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    status: PlaybackStatus,
    current_time: f64,
    duration: Option<f64>,
    volume: Volume,
    muted: bool,
    speed: PlaybackSpeed,
    controls: ControlsTimer,
    speed_menu_open: bool,
}

impl PlaybackState {
    /// Fresh state for a newly assigned source.
    pub fn new(hide_delay: ControlsHideDelay) -> Self {
        Self {
            status: PlaybackStatus::default(),
            current_time: 0.0,
            duration: None,
            volume: Volume::default(),
            muted: false,
            speed: PlaybackSpeed::default(),
            controls: ControlsTimer::new(hide_delay),
            speed_menu_open: false,
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Returns true while the surface is actively playing.
    pub fn is_playing(&self) -> bool {
        self.status.is_playing()
    }

    /// Playback position in seconds.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Media duration, once metadata has loaded.
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Stored level in `[0, 1]`, independent of mute.
    pub fn volume(&self) -> f64 {
        self.volume.value()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn playback_speed(&self) -> f64 {
        self.speed.value()
    }

    pub fn controls_visible(&self) -> bool {
        self.controls.is_visible()
    }

    pub fn controls_timer(&self) -> &ControlsTimer {
        &self.controls
    }

    pub fn speed_menu_open(&self) -> bool {
        self.speed_menu_open
    }

    /// Level the volume slider shows: zero while muted.
    pub fn displayed_volume(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.volume.value()
        }
    }

    /// Returns true if the mute button should show the muted icon.
    pub fn shows_muted_icon(&self) -> bool {
        self.muted || self.volume.is_silent()
    }

    /// Upper bound of the seek bar.
    pub fn seek_bar_max(&self) -> f64 {
        self.duration.unwrap_or(SEEK_BAR_FALLBACK_MAX_SECS)
    }

    /// `m:ss / m:ss` label under the seek bar.
    pub fn time_label(&self) -> String {
        time_label(self.current_time, self.duration)
    }

    /// Short speed label (`1x`, `2.75x`).
    pub fn speed_label(&self) -> String {
        speed_label(self.speed.value())
    }

    /// Two-decimal speed readout (`2.75x`).
    pub fn speed_readout(&self) -> String {
        format_speed(self.speed.value())
    }

    pub fn speed_tier(&self) -> SpeedTier {
        SpeedTier::classify(self.speed.value())
    }
}

// =============================================================================
// VideoPlayer
// =============================================================================

/// Playback controller for one media surface.
pub struct VideoPlayer<M, F> {
    settings: PlayerSettings,
    surface: M,
    fullscreen: F,
    source: Option<SourceHandle>,
    state: PlaybackState,
    shortcuts: Option<ScopeGuard>,
}

impl<M: MediaSurface, F: FullscreenHost> VideoPlayer<M, F> {
    /// Creates a player with no source loaded.
    pub fn new(settings: PlayerSettings, surface: M, fullscreen: F) -> Self {
        Self {
            state: PlaybackState::new(settings.hide_delay),
            settings,
            surface,
            fullscreen,
            source: None,
            shortcuts: None,
        }
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn surface(&self) -> &M {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut M {
        &mut self.surface
    }

    pub fn fullscreen_host(&self) -> &F {
        &self.fullscreen
    }

    /// The loaded source, if any.
    pub fn source(&self) -> Option<&SourceHandle> {
        self.source.as_ref()
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    fn speed_bounds(&self) -> SpeedBounds {
        self.settings.speed_bounds()
    }

    /// Emphasis factor of the current speed within the profile's range.
    pub fn speed_intensity(&self) -> f64 {
        speed_intensity(self.state.playback_speed(), self.speed_bounds())
    }

    /// Speeds offered by the preset menu of the active profile.
    pub fn speed_presets(&self) -> Vec<f64> {
        self.settings.profile.presets()
    }

    // -------------------------------------------------------------------------
    // Source lifecycle
    // -------------------------------------------------------------------------

    /// Assigns a new source, replacing (and revoking) the previous one.
    ///
    /// State is reset to defaults and pushed to the surface.
    pub fn load_source(&mut self, handle: SourceHandle) {
        log::debug!("loading source {}", handle.url());
        self.surface.set_source(Some(handle.url()));
        self.source = Some(handle);
        self.reset_state();
    }

    /// Unloads the current source, revoking its handle.
    pub fn clear_source(&mut self) {
        if self.state.is_playing() {
            self.surface.pause();
        }
        self.surface.set_source(None);
        if self.source.take().is_some() {
            log::debug!("source cleared");
        }
        self.reset_state();
    }

    fn reset_state(&mut self) {
        self.state = PlaybackState::new(self.settings.hide_delay);
        self.surface.set_volume(self.state.volume());
        self.surface.set_muted(self.state.is_muted());
        self.surface.set_playback_rate(self.state.playback_speed());
    }

    fn require_source(&self) -> Result<(), PlaybackError> {
        if self.source.is_some() {
            Ok(())
        } else {
            Err(PlaybackError::NoSource)
        }
    }

    // -------------------------------------------------------------------------
    // Transport
    // -------------------------------------------------------------------------

    /// Starts playback if stopped, stops it if playing.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::NoSource`] when nothing is loaded. A play
    /// request refused by the surface is logged and leaves the player paused.
    pub fn toggle_play_pause(&mut self) -> Result<(), PlaybackError> {
        self.require_source()?;

        if self.state.is_playing() {
            self.surface.pause();
            self.state.status = PlaybackStatus::Paused;
            return Ok(());
        }

        match self.surface.play() {
            Ok(()) => self.state.status = PlaybackStatus::Playing,
            Err(err) => log::debug!("play request ignored: {err}"),
        }
        Ok(())
    }

    /// Jumps to `target` seconds, clamped to `[0, duration]`.
    ///
    /// Non-finite targets are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::NoSource`] when nothing is loaded.
    pub fn seek(&mut self, target: f64) -> Result<(), PlaybackError> {
        self.require_source()?;

        if let Some(position) = clamp_position(target, self.state.duration) {
            self.state.current_time = position;
            self.surface.set_current_time(position);
        }
        Ok(())
    }

    /// Seeks relative to the current position.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::NoSource`] when nothing is loaded.
    pub fn skip(&mut self, delta: f64) -> Result<(), PlaybackError> {
        self.seek(self.state.current_time + delta)
    }

    // -------------------------------------------------------------------------
    // Volume
    // -------------------------------------------------------------------------

    /// Volume slider: sets the level and unmutes.
    pub fn set_volume(&mut self, volume: f64) {
        self.state.volume = Volume::new(volume);
        self.surface.set_volume(self.state.volume());
        if self.state.muted {
            self.state.muted = false;
            self.surface.set_muted(false);
        }
    }

    /// Volume keys: shifts the level, mute untouched.
    pub fn adjust_volume(&mut self, delta: f64) {
        self.state.volume = self.state.volume.adjust(delta);
        self.surface.set_volume(self.state.volume());
    }

    /// Flips mute without changing the stored level.
    pub fn toggle_mute(&mut self) {
        self.state.muted = !self.state.muted;
        self.surface.set_muted(self.state.muted);
    }

    // -------------------------------------------------------------------------
    // Speed
    // -------------------------------------------------------------------------

    /// Sets the speed, clamped to the profile and snapped to 0.25 steps.
    pub fn set_speed(&mut self, speed: f64) {
        self.state.speed = PlaybackSpeed::new(speed, self.speed_bounds());
        self.surface.set_playback_rate(self.state.playback_speed());
    }

    /// Shifts the speed by `delta`, clamped and snapped.
    pub fn adjust_speed(&mut self, delta: f64) {
        self.set_speed(self.state.playback_speed() + delta);
    }

    /// Applies a preset from the speed menu and closes the menu.
    pub fn select_speed_preset(&mut self, speed: f64) {
        self.set_speed(speed);
        self.state.speed_menu_open = false;
    }

    pub fn toggle_speed_menu(&mut self) {
        self.state.speed_menu_open = !self.state.speed_menu_open;
    }

    // -------------------------------------------------------------------------
    // Fullscreen
    // -------------------------------------------------------------------------

    /// Whether the host reports fullscreen right now.
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    /// Enters fullscreen, or leaves it if already fullscreen.
    ///
    /// Host refusals are logged and swallowed.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::NoSource`] when nothing is loaded.
    pub fn toggle_fullscreen(&mut self) -> Result<(), PlaybackError> {
        self.require_source()?;

        let result = if self.fullscreen.is_fullscreen() {
            self.fullscreen.exit_fullscreen()
        } else {
            self.fullscreen.request_fullscreen()
        };
        if let Err(err) = result {
            log::debug!("fullscreen toggle ignored: {err}");
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Controls visibility
    // -------------------------------------------------------------------------

    /// Pointer moved over the player.
    pub fn note_activity(&mut self, now: Instant) {
        self.state.controls.note_activity(now);
    }

    /// Pointer left the player.
    pub fn pointer_left(&mut self) {
        let playing = self.state.is_playing();
        self.state.controls.pointer_left(playing);
    }

    /// Advances the hide timer; returns true if controls were just hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        let playing = self.state.is_playing();
        self.state.controls.tick(now, playing)
    }

    /// When the host should call [`tick`](Self::tick) next, if anything is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.controls.deadline()
    }

    // -------------------------------------------------------------------------
    // Media events
    // -------------------------------------------------------------------------

    /// Applies a lifecycle notification from the surface.
    ///
    /// Events arriving with no source loaded are dropped.
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        if self.source.is_none() {
            log::debug!("dropping {event:?} without a source");
            return;
        }

        match event {
            MediaEvent::LoadedMetadata { duration } => {
                if self.state.duration.is_some() {
                    return;
                }
                if duration.is_finite() && duration >= 0.0 {
                    self.state.duration = Some(duration);
                    self.state.current_time = self.state.current_time.min(duration);
                }
            }
            MediaEvent::TimeUpdate { current_time } => {
                if let Some(position) = clamp_position(current_time, self.state.duration) {
                    self.state.current_time = position;
                }
            }
            MediaEvent::Ended => {
                self.state.status = PlaybackStatus::Ended;
                if let Some(duration) = self.state.duration {
                    self.state.current_time = duration;
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard
    // -------------------------------------------------------------------------

    /// Registers this player as the shortcut receiver of `scope`.
    pub fn attach_shortcuts(&mut self, scope: &ShortcutScope) {
        self.shortcuts = Some(scope.acquire());
    }

    /// Gives up the shortcut registration, if held.
    pub fn detach_shortcuts(&mut self) {
        self.shortcuts = None;
    }

    /// Returns true if key events should reach this player.
    pub fn receives_shortcuts(&self) -> bool {
        self.shortcuts.as_ref().is_some_and(ScopeGuard::is_active)
    }

    /// Handles a key press.
    ///
    /// Keys are only consumed while a source is loaded and this player
    /// holds the shortcut scope.
    pub fn handle_key(&mut self, key: &Key, modifiers: Modifiers) -> KeyOutcome {
        if !self.receives_shortcuts() || self.source.is_none() {
            return KeyOutcome::Ignored;
        }
        let Some(shortcut) = Shortcut::from_key(key, modifiers) else {
            return KeyOutcome::Ignored;
        };
        if let Err(err) = self.apply_shortcut(shortcut) {
            log::debug!("shortcut {shortcut:?} ignored: {err}");
        }
        KeyOutcome::Handled
    }

    /// Runs the intent bound to `shortcut`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::NoSource`] for transport shortcuts when
    /// nothing is loaded.
    pub fn apply_shortcut(&mut self, shortcut: Shortcut) -> Result<(), PlaybackError> {
        let skip = self.settings.skip_step.value();
        let volume_step = self.settings.volume_step;
        match shortcut {
            Shortcut::TogglePlayback => self.toggle_play_pause()?,
            Shortcut::SkipBackward => self.skip(-skip)?,
            Shortcut::SkipForward => self.skip(skip)?,
            Shortcut::VolumeUp => self.adjust_volume(volume_step),
            Shortcut::VolumeDown => self.adjust_volume(-volume_step),
            Shortcut::ToggleMute => self.toggle_mute(),
            Shortcut::SpeedUp => self.adjust_speed(PLAYBACK_SPEED_KEY_STEP),
            Shortcut::SpeedDown => self.adjust_speed(-PLAYBACK_SPEED_KEY_STEP),
        }
        Ok(())
    }
}

impl<M, F> std::fmt::Debug for VideoPlayer<M, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoPlayer")
            .field("settings", &self.settings)
            .field("source", &self.source)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
