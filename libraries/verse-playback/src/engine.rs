//! Platform-agnostic audio engine trait
//!
//! Abstracts the host audio capability (desktop output, mobile bridge,
//! test double) behind a small command/status surface.

use crate::error::EngineError;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use verse_core::SourceRef;

/// Opaque handle to an engine-owned audio resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceHandle(u64);

impl ResourceHandle {
    /// Create a handle from a raw engine value
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw engine value
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Engine-reported status of one resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStatus {
    /// Current playback position
    pub position: Duration,

    /// Total duration, if the engine knows it yet
    pub duration: Option<Duration>,

    /// Whether the resource is loaded and usable
    pub is_loaded: bool,

    /// Whether playback just reached end-of-track unprompted
    ///
    /// One-shot: an engine reports this once per completion.
    pub did_just_finish: bool,
}

/// Platform-agnostic audio engine
///
/// Implementors provide resource loading and transport control.
/// This trait allows [`PlaybackSession`](crate::PlaybackSession) to work
/// with different audio backends without knowing any concrete engine.
pub trait AudioEngine: Send {
    /// Create (load) a resource for the given source reference
    ///
    /// # Returns
    /// * `Ok(handle)` - Resource created and ready for status queries
    /// * `Err(_)` - Source unreachable or undecodable
    fn create_resource(&mut self, source: &SourceRef) -> Result<ResourceHandle, EngineError>;

    /// Start or resume playback of a resource
    fn play(&mut self, handle: ResourceHandle) -> Result<(), EngineError>;

    /// Pause playback of a resource
    fn pause(&mut self, handle: ResourceHandle) -> Result<(), EngineError>;

    /// Reposition a resource
    ///
    /// Repositioning may complete asynchronously inside the engine; the
    /// caller must not assume the next status already reflects it.
    fn set_position(
        &mut self,
        handle: ResourceHandle,
        position: Duration,
    ) -> Result<(), EngineError>;

    /// Query the current status of a resource
    fn status(&mut self, handle: ResourceHandle) -> Result<EngineStatus, EngineError>;

    /// Release a resource
    ///
    /// Idempotent per handle; releasing an unknown handle is a no-op.
    fn release(&mut self, handle: ResourceHandle);
}

/// Simulated resource state inside [`SilentEngine`]
#[derive(Debug, Clone, Copy)]
struct SilentResource {
    position: Duration,
    duration: Duration,
    playing: bool,
    just_finished: bool,
}

/// No-audio engine for host development and tests
///
/// Resources load instantly with a configurable duration, transport
/// calls always succeed, and [`advance`](SilentEngine::advance) moves the
/// simulated position (there is no internal clock). Useful when running
/// the UI shell without an audio device.
pub struct SilentEngine {
    default_duration: Duration,
    next_handle: u64,
    resources: HashMap<u64, SilentResource>,
}

impl SilentEngine {
    /// Create an engine whose resources all report the given duration
    pub fn new(default_duration: Duration) -> Self {
        Self {
            default_duration,
            next_handle: 1,
            resources: HashMap::new(),
        }
    }

    /// Advance the simulated position of a resource while it is playing
    ///
    /// Clamps at the resource duration; reaching the end marks a one-shot
    /// natural completion reported by the next status query.
    pub fn advance(&mut self, handle: ResourceHandle, delta: Duration) {
        if let Some(res) = self.resources.get_mut(&handle.raw()) {
            if !res.playing || res.position >= res.duration {
                return;
            }
            res.position = (res.position + delta).min(res.duration);
            if res.position >= res.duration {
                res.playing = false;
                res.just_finished = true;
            }
        }
    }

    /// Number of live (unreleased) resources
    pub fn live_resources(&self) -> usize {
        self.resources.len()
    }

    fn resource_mut(&mut self, handle: ResourceHandle) -> Result<&mut SilentResource, EngineError> {
        self.resources
            .get_mut(&handle.raw())
            .ok_or(EngineError::UnknownHandle(handle))
    }
}

impl AudioEngine for SilentEngine {
    fn create_resource(&mut self, _source: &SourceRef) -> Result<ResourceHandle, EngineError> {
        let handle = ResourceHandle::new(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1).max(1);
        self.resources.insert(
            handle.raw(),
            SilentResource {
                position: Duration::ZERO,
                duration: self.default_duration,
                playing: false,
                just_finished: false,
            },
        );
        Ok(handle)
    }

    fn play(&mut self, handle: ResourceHandle) -> Result<(), EngineError> {
        self.resource_mut(handle)?.playing = true;
        Ok(())
    }

    fn pause(&mut self, handle: ResourceHandle) -> Result<(), EngineError> {
        self.resource_mut(handle)?.playing = false;
        Ok(())
    }

    fn set_position(
        &mut self,
        handle: ResourceHandle,
        position: Duration,
    ) -> Result<(), EngineError> {
        let res = self.resource_mut(handle)?;
        res.position = position.min(res.duration);
        Ok(())
    }

    fn status(&mut self, handle: ResourceHandle) -> Result<EngineStatus, EngineError> {
        let res = self.resource_mut(handle)?;
        let status = EngineStatus {
            position: res.position,
            duration: Some(res.duration),
            is_loaded: true,
            did_just_finish: res.just_finished,
        };
        // one-shot completion flag
        res.just_finished = false;
        Ok(status)
    }

    fn release(&mut self, handle: ResourceHandle) {
        self.resources.remove(&handle.raw());
    }
}
