//! Domain types for Verse Player

mod ids;
mod track;

pub use ids::TrackId;
pub use track::{SourceRef, Track};
