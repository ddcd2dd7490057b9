//! Repeat and shuffle mode state
//!
//! Pure state holders with no side effects. Modes are independent of the
//! session lifecycle and persist across track changes; the session
//! consults the repeat mode only when a track finishes naturally.

use serde::{Deserialize, Serialize};

/// Repeat mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when the track ends
    #[default]
    Off,

    /// Repeat everything
    All,

    /// Repeat the current track only
    One,
}

impl RepeatMode {
    /// Advance one step through the cycle `Off -> All -> One -> Off`
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

/// Repeat and shuffle flags for a player
///
/// The shuffle flag has no sequencing semantics of its own; it is carried
/// for hosts that attach a queue model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerModes {
    repeat: RepeatMode,
    shuffle: bool,
}

impl PlayerModes {
    /// Create modes with explicit initial values
    pub fn new(repeat: RepeatMode, shuffle: bool) -> Self {
        Self { repeat, shuffle }
    }

    /// Current repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Whether shuffle is enabled
    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle
    }

    /// Advance the repeat mode one step, returning the new mode
    pub fn cycle_repeat(&mut self) -> RepeatMode {
        self.repeat = self.repeat.cycle();
        self.repeat
    }

    /// Flip the shuffle flag, returning the new value
    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.shuffle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_cycle_order() {
        assert_eq!(RepeatMode::Off.cycle(), RepeatMode::All);
        assert_eq!(RepeatMode::All.cycle(), RepeatMode::One);
        assert_eq!(RepeatMode::One.cycle(), RepeatMode::Off);
    }

    #[test]
    fn cycle_has_period_three() {
        let mode = RepeatMode::Off;
        assert_eq!(mode.cycle().cycle().cycle(), mode);
    }

    #[test]
    fn toggle_shuffle_flips() {
        let mut modes = PlayerModes::default();
        assert!(!modes.shuffle_enabled());
        assert!(modes.toggle_shuffle());
        assert!(!modes.toggle_shuffle());
    }

    #[test]
    fn modes_independent() {
        let mut modes = PlayerModes::default();
        modes.toggle_shuffle();
        assert_eq!(modes.repeat(), RepeatMode::Off);

        modes.cycle_repeat();
        assert!(modes.shuffle_enabled());
    }
}
