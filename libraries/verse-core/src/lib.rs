//! Verse Player Core
//!
//! Platform-agnostic domain types and error handling for Verse Player.
//!
//! This crate provides the foundational building blocks shared by the
//! playback core and any host integration (UI shell, server, CLI).
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: [`Track`], [`SourceRef`], [`TrackId`]
//! - **Error Handling**: Unified [`CoreError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use verse_core::{SourceRef, Track};
//!
//! let track = Track::new(
//!     "Blinding Lights",
//!     "The Weeknd",
//!     SourceRef::remote("https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3"),
//! );
//!
//! assert!(track.source.is_remote());
//! assert!(track.duration_ms.is_none()); // known only after load
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{SourceRef, Track, TrackId};
