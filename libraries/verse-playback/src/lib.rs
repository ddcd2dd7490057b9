//! Verse Player - Playback Session Management
//!
//! Platform-agnostic playback session core for Verse Player.
//!
//! This crate provides:
//! - One-resource-at-a-time session lifecycle (load/play/pause/release)
//! - Seek and skip with position clamping
//! - A cooperative 1-second position ticker
//! - Repeat modes (Off, All, One) and a shuffle flag
//! - A single serializable event type for host synchronization
//!
//! # Architecture
//!
//! `verse-playback` is completely platform-agnostic:
//! - No dependency on any audio output library
//! - No dependency on any UI framework
//! - No network or storage access
//!
//! Platform-specific audio is provided via the [`AudioEngine`] trait.
//! Everything runs on one logical thread: operations return immediately
//! and the host drives periodic work through
//! [`PlaybackSession::tick`] from its event loop.
//!
//! # Example: Basic Session
//!
//! ```rust
//! use std::time::Duration;
//! use verse_core::{SourceRef, Track};
//! use verse_playback::{PlaybackSession, SessionConfig, SilentEngine};
//!
//! let engine = SilentEngine::new(Duration::from_secs(180));
//! let mut session = PlaybackSession::new(Box::new(engine), SessionConfig::default());
//!
//! let track = Track::new(
//!     "Blinding Lights",
//!     "The Weeknd",
//!     SourceRef::remote("https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3"),
//! );
//!
//! let duration = session.load(track).unwrap();
//! assert_eq!(duration, Duration::from_secs(180));
//!
//! session.play().unwrap();
//! session.seek(Duration::from_secs(30)).unwrap();
//! session.skip_forward().unwrap(); // +10s, clamped to duration
//!
//! // host teardown: always release, idempotent
//! session.release();
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use verse_core::SourceRef;
//! use verse_playback::{AudioEngine, EngineError, EngineStatus, ResourceHandle};
//!
//! // Implement AudioEngine for your platform
//! struct MyEngine {
//!     // ... platform-specific audio handle
//! }
//!
//! impl AudioEngine for MyEngine {
//!     fn create_resource(&mut self, source: &SourceRef) -> Result<ResourceHandle, EngineError> {
//!         // resolve the source and prepare a playable resource
//!         Ok(ResourceHandle::new(1))
//!     }
//!
//!     fn play(&mut self, handle: ResourceHandle) -> Result<(), EngineError> {
//!         Ok(())
//!     }
//!
//!     fn pause(&mut self, handle: ResourceHandle) -> Result<(), EngineError> {
//!         Ok(())
//!     }
//!
//!     fn set_position(
//!         &mut self,
//!         handle: ResourceHandle,
//!         position: Duration,
//!     ) -> Result<(), EngineError> {
//!         Ok(())
//!     }
//!
//!     fn status(&mut self, handle: ResourceHandle) -> Result<EngineStatus, EngineError> {
//!         Ok(EngineStatus {
//!             position: Duration::ZERO,
//!             duration: Some(Duration::from_secs(180)),
//!             is_loaded: true,
//!             did_just_finish: false,
//!         })
//!     }
//!
//!     fn release(&mut self, handle: ResourceHandle) {}
//! }
//! ```

mod engine;
mod error;
mod events;
mod modes;
mod session;
mod ticker;
pub mod types;

// Public exports
pub use engine::{AudioEngine, EngineStatus, ResourceHandle, SilentEngine};
pub use error::{EngineError, LoadError, PlaybackError, Result};
pub use events::SessionEvent;
pub use modes::{PlayerModes, RepeatMode};
pub use session::PlaybackSession;
pub use ticker::{PositionTicker, DEFAULT_TICK_INTERVAL};
pub use types::{PlaybackState, SessionConfig};
