//! Error types for playback session management

use crate::engine::ResourceHandle;
use thiserror::Error;

/// Errors reported by a platform audio engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The audio source could not be reached (bad URL, missing file)
    #[error("audio source unreachable: {0}")]
    Unreachable(String),

    /// The audio source was reached but could not be decoded
    #[error("cannot decode audio source: {0}")]
    Undecodable(String),

    /// A transport call (play/pause/seek/status) failed on a loaded resource
    #[error("audio engine transport failure: {0}")]
    Transport(String),

    /// The engine does not know the given resource handle
    #[error("unknown resource handle: {0}")]
    UnknownHandle(ResourceHandle),
}

/// Errors from loading a track into a session
///
/// A load failure always leaves the session unloaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The audio source could not be reached
    #[error("audio source unreachable: {0}")]
    Unreachable(String),

    /// The audio source could not be decoded
    #[error("cannot decode audio source: {0}")]
    Undecodable(String),

    /// The engine rejected the load for another reason
    #[error("engine rejected load: {0}")]
    Engine(EngineError),
}

impl From<EngineError> for LoadError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Unreachable(source) => LoadError::Unreachable(source),
            EngineError::Undecodable(source) => LoadError::Undecodable(source),
            other => LoadError::Engine(other),
        }
    }
}

/// Errors from playback control on a session
///
/// Transport errors leave the session loaded and retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// No track is currently loaded
    #[error("no track loaded")]
    NoTrackLoaded,

    /// A transport call failed on an already-loaded resource
    #[error("engine transport failure: {0}")]
    Transport(EngineError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
