// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts for the player.
//!
//! [`Shortcut::from_key`] maps toolkit key events to player intents.
//! [`ShortcutScope`] replaces a global key listener: a player acquires the
//! scope when it mounts and the returned [`ScopeGuard`] releases it on drop,
//! so exactly one player receives shortcuts at a time.

use iced_core::keyboard::{key::Named, Key, Modifiers};
use std::cell::Cell;
use std::rc::Rc;

/// Player intents reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Space.
    TogglePlayback,
    /// ArrowLeft.
    SkipBackward,
    /// ArrowRight.
    SkipForward,
    /// ArrowUp.
    VolumeUp,
    /// ArrowDown.
    VolumeDown,
    /// `m`.
    ToggleMute,
    /// `+` or `=`.
    SpeedUp,
    /// `-`.
    SpeedDown,
}

impl Shortcut {
    /// Maps a key press to a shortcut.
    ///
    /// Presses with Ctrl/Cmd or Alt held are left to the host so browser
    /// and OS bindings keep working. Shift is allowed: `+` needs it on most
    /// layouts.
    pub fn from_key(key: &Key, modifiers: Modifiers) -> Option<Self> {
        if modifiers.command() || modifiers.control() || modifiers.alt() {
            return None;
        }

        match key {
            Key::Named(Named::Space) => Some(Self::TogglePlayback),
            Key::Named(Named::ArrowLeft) => Some(Self::SkipBackward),
            Key::Named(Named::ArrowRight) => Some(Self::SkipForward),
            Key::Named(Named::ArrowUp) => Some(Self::VolumeUp),
            Key::Named(Named::ArrowDown) => Some(Self::VolumeDown),
            Key::Character(c) => match c.as_str() {
                "m" | "M" => Some(Self::ToggleMute),
                "+" | "=" => Some(Self::SpeedUp),
                "-" => Some(Self::SpeedDown),
                _ => None,
            },
            _ => None,
        }
    }
}

/// One row of the shortcuts help card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutHelp {
    pub keys: &'static str,
    pub action: &'static str,
}

/// Rows shown in the shortcuts help card, in display order.
pub const SHORTCUT_HELP: &[ShortcutHelp] = &[
    ShortcutHelp {
        keys: "Space",
        action: "Play / Pause",
    },
    ShortcutHelp {
        keys: "← / →",
        action: "Skip 5s backward / forward",
    },
    ShortcutHelp {
        keys: "↑ / ↓",
        action: "Volume up / down",
    },
    ShortcutHelp {
        keys: "+ / -",
        action: "Speed up / down (0.25x)",
    },
    ShortcutHelp {
        keys: "M",
        action: "Mute / Unmute",
    },
];

/// Whether the host must suppress the key's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The player consumed the key; suppress the default action.
    Handled,
    /// Not a player shortcut (or no player is listening); let it through.
    Ignored,
}

impl KeyOutcome {
    /// Returns true if the host should call its `preventDefault` equivalent.
    pub fn should_prevent_default(self) -> bool {
        matches!(self, Self::Handled)
    }
}

// =============================================================================
// ShortcutScope
// =============================================================================

/// Single-owner registration point for keyboard shortcuts.
///
/// Cloning yields another handle to the same scope. Acquiring hands the
/// scope to the new guard; a previous holder stays alive but inactive.
#[derive(Debug, Clone, Default)]
pub struct ShortcutScope {
    owner: Rc<Cell<Option<u64>>>,
    next_id: Rc<Cell<u64>>,
}

impl ShortcutScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the caller the active shortcut receiver.
    pub fn acquire(&self) -> ScopeGuard {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.owner.set(Some(id));
        ScopeGuard {
            id,
            owner: Rc::clone(&self.owner),
        }
    }

    /// Returns true if some guard currently holds the scope.
    pub fn is_held(&self) -> bool {
        self.owner.get().is_some()
    }
}

/// Registration held by one player; unregisters on drop.
#[derive(Debug)]
pub struct ScopeGuard {
    id: u64,
    owner: Rc<Cell<Option<u64>>>,
}

impl ScopeGuard {
    /// Returns true while this guard is the scope's owner.
    pub fn is_active(&self) -> bool {
        self.owner.get() == Some(self.id)
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        if self.is_active() {
            self.owner.set(None);
        }
    }
}
