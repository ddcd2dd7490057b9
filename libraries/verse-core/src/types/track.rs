/// Track domain type
use crate::error::CoreError;
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Reference to an audio resource
///
/// A track's audio may come from a remote URL or a file bundled with the
/// host application. The playback engine resolves the reference; this
/// crate only carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceRef {
    /// Remote audio URL (http/https)
    Remote(String),

    /// Local file path
    Local(PathBuf),
}

impl SourceRef {
    /// Create a remote source reference
    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote(url.into())
    }

    /// Create a local source reference
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::Local(path.into())
    }

    /// Whether this reference points at a remote URL
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

impl FromStr for SourceRef {
    type Err = CoreError;

    /// Classify a reference string by scheme: `http(s)://` is remote,
    /// anything else is a local path. Empty input is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(CoreError::InvalidSourceRef(s.to_string()));
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(Self::Remote(s.to_string()))
        } else {
            Ok(Self::Local(PathBuf::from(s)))
        }
    }
}

/// Audio track
///
/// Immutable once constructed. Duration is unknown until the playback
/// engine has loaded the resource, hence `Option`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: Option<String>,

    /// Artwork reference (URL or bundled asset path)
    pub artwork: Option<String>,

    /// Audio source reference
    pub source: SourceRef,

    /// Track duration in milliseconds (known only after load)
    pub duration_ms: Option<u64>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(title: impl Into<String>, artist: impl Into<String>, source: SourceRef) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            artist: artist.into(),
            album: None,
            artwork: None,
            source,
            duration_ms: None,
        }
    }

    /// Set the album name
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Set the artwork reference
    pub fn with_artwork(mut self, artwork: impl Into<String>) -> Self {
        self.artwork = Some(artwork.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_ref_from_str() {
        let remote: SourceRef = "https://example.com/song.mp3".parse().unwrap();
        assert!(remote.is_remote());

        let local: SourceRef = "/music/song.mp3".parse().unwrap();
        assert!(!local.is_remote());
        assert_eq!(local, SourceRef::local("/music/song.mp3"));
    }

    #[test]
    fn empty_source_ref_rejected() {
        assert!("".parse::<SourceRef>().is_err());
        assert!("   ".parse::<SourceRef>().is_err());
    }

    #[test]
    fn track_builder() {
        let track = Track::new("Song", "Artist", SourceRef::remote("https://x/y.mp3"))
            .with_album("Album")
            .with_artwork("https://x/cover.jpg");

        assert_eq!(track.album.as_deref(), Some("Album"));
        assert_eq!(track.artwork.as_deref(), Some("https://x/cover.jpg"));
        assert!(track.duration_ms.is_none());
    }
}
