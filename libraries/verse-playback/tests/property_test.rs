//! Property-based tests for the playback session
//!
//! Uses proptest to verify clamping and mode-cycling invariants across
//! many random inputs.

use proptest::prelude::*;
use std::time::Duration;
use verse_core::{SourceRef, Track};
use verse_playback::{PlaybackSession, RepeatMode, SessionConfig, SilentEngine};

// ===== Helpers =====

fn session_with_duration(duration_secs: u64) -> PlaybackSession {
    let engine = SilentEngine::new(Duration::from_secs(duration_secs));
    let mut session = PlaybackSession::new(Box::new(engine), SessionConfig::default());
    let track = Track::new(
        "Test Song",
        "Test Artist",
        SourceRef::remote("https://example.com/song.mp3"),
    );
    session.load(track).expect("load against silent engine");
    session
}

fn arbitrary_repeat_mode() -> impl Strategy<Value = RepeatMode> {
    prop_oneof![
        Just(RepeatMode::Off),
        Just(RepeatMode::All),
        Just(RepeatMode::One),
    ]
}

// ===== Property Tests =====

proptest! {
    /// Property: every seek result lies in [0, duration]
    #[test]
    fn seek_position_always_within_bounds(
        duration_secs in 1u64..600,
        target_secs in 0u64..10_000,
    ) {
        let mut session = session_with_duration(duration_secs);
        session.seek(Duration::from_secs(target_secs)).unwrap();

        prop_assert!(session.position() <= session.duration());
    }

    /// Property: skip_by never leaves [0, duration], whatever the
    /// starting position and delta
    #[test]
    fn skip_by_always_clamps(
        duration_secs in 1u64..600,
        start_secs in 0u64..600,
        delta_secs in -600i64..600,
    ) {
        let mut session = session_with_duration(duration_secs);
        session.seek(Duration::from_secs(start_secs)).unwrap();

        session.skip_by(delta_secs).unwrap();

        prop_assert!(session.position() <= session.duration());
    }

    /// Property: a sequence of skips is equivalent to one clamped sum
    /// only when no clamp fires; either way bounds hold throughout
    #[test]
    fn repeated_skips_stay_bounded(
        duration_secs in 10u64..600,
        deltas in prop::collection::vec(-60i64..60, 1..30),
    ) {
        let mut session = session_with_duration(duration_secs);

        for delta in deltas {
            session.skip_by(delta).unwrap();
            prop_assert!(session.position() <= session.duration());
        }
    }

    /// Property: cycling repeat three times returns to the start from
    /// any mode; one or two cycles never do
    #[test]
    fn repeat_cycle_has_period_three(mode in arbitrary_repeat_mode()) {
        prop_assert_ne!(mode.cycle(), mode);
        prop_assert_ne!(mode.cycle().cycle(), mode);
        prop_assert_eq!(mode.cycle().cycle().cycle(), mode);
    }

    /// Property: toggling shuffle an even number of times restores the
    /// flag, an odd number flips it
    #[test]
    fn shuffle_toggle_parity(toggles in 0usize..20) {
        let mut session = session_with_duration(60);
        let initial = session.modes().shuffle_enabled();

        for _ in 0..toggles {
            session.toggle_shuffle();
        }

        prop_assert_eq!(
            session.modes().shuffle_enabled(),
            initial ^ (toggles % 2 == 1)
        );
    }
}
