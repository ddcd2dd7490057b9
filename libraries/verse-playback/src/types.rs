//! Core types for playback session management

use crate::modes::RepeatMode;
use crate::ticker::DEFAULT_TICK_INTERVAL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Playback state of a session
///
/// `Paused` covers loaded-but-not-playing, including a freshly loaded
/// track that has never started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No resource loaded
    Unloaded,

    /// Resource creation in progress
    Loading,

    /// Loaded, not playing
    Paused,

    /// Playing
    Playing,
}

/// Configuration for a playback session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Position sampling interval while playing (default: 1s)
    pub tick_interval: Duration,

    /// Step for skip forward/backward, in seconds (default: 10)
    pub skip_step_secs: i64,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Initial shuffle flag (default: off)
    pub shuffle: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            skip_step_secs: 10,
            repeat: RepeatMode::Off,
            shuffle: false,
        }
    }
}
