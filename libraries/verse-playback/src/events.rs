//! Session events
//!
//! Event-based communication for host synchronization. Events accumulate
//! in the session's pending queue and are drained by the host:
//! - State changes (play/pause/load/release)
//! - Track lifecycle (loaded, finished)
//! - Position updates (periodic, while playing)
//! - Mode changes (repeat/shuffle)

use crate::modes::RepeatMode;
use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};
use verse_core::TrackId;

/// Events emitted by a playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Playback state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A track finished loading
    TrackLoaded {
        /// ID of the loaded track
        track_id: TrackId,
        /// Engine-reported duration (0 when unknown)
        duration_ms: u64,
    },

    /// Position update (periodic, typically every second)
    PositionUpdate {
        /// Current playback position
        position_ms: u64,
        /// Total track duration (0 when unknown)
        duration_ms: u64,
    },

    /// Track finished playing naturally (reached end unprompted)
    TrackFinished {
        /// ID of the finished track
        track_id: TrackId,
    },

    /// Repeat or shuffle mode changed
    ModesChanged {
        /// Current repeat mode
        repeat: RepeatMode,
        /// Current shuffle flag
        shuffle: bool,
    },

    /// Error surfaced during playback
    Error {
        /// Error message
        message: String,
    },
}
