//! Playback session - core orchestration
//!
//! Binds the player to one loaded audio resource at a time and
//! coordinates transport control, the position ticker, repeat/shuffle
//! modes, and status handling.

use crate::{
    engine::{AudioEngine, EngineStatus, ResourceHandle},
    error::{LoadError, PlaybackError, Result},
    events::SessionEvent,
    modes::{PlayerModes, RepeatMode},
    ticker::PositionTicker,
    types::{PlaybackState, SessionConfig},
};
use std::time::{Duration, Instant};
use verse_core::Track;

/// Live binding between the player and one loaded audio resource
///
/// All operations are synchronous calls from a single logical thread;
/// results are reported via `Result` returns and the pending-event queue
/// (see [`drain_events`](PlaybackSession::drain_events)).
///
/// Ordering discipline:
/// - a new load releases the previous resource first
/// - the ticker stops before pause completes
/// - release is idempotent and bumps the status generation, so callbacks
///   from a freed resource are rejected as stale
pub struct PlaybackSession {
    engine: Box<dyn AudioEngine>,
    config: SessionConfig,
    modes: PlayerModes,
    ticker: PositionTicker,

    state: PlaybackState,
    track: Option<Track>,
    handle: Option<ResourceHandle>,

    /// Bumped on every load and release; stale statuses carry an old value
    generation: u64,

    position: Duration,
    duration: Duration,

    /// Set when a completion has been handled; cleared by the next
    /// non-completion status. Dedupes duplicate completion reports.
    finish_latched: bool,

    pending_events: Vec<SessionEvent>,
}

impl PlaybackSession {
    /// Create a new session over the given engine
    ///
    /// The session starts unloaded.
    pub fn new(engine: Box<dyn AudioEngine>, config: SessionConfig) -> Self {
        let modes = PlayerModes::new(config.repeat, config.shuffle);
        let ticker = PositionTicker::new(config.tick_interval);
        Self {
            engine,
            config,
            modes,
            ticker,
            state: PlaybackState::Unloaded,
            track: None,
            handle: None,
            generation: 0,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            finish_latched: false,
            pending_events: Vec::new(),
        }
    }

    // ===== Loading =====

    /// Load a track, releasing any previously loaded resource first
    ///
    /// On success the session is loaded and not playing, and the
    /// engine-reported duration is returned (zero when the engine does
    /// not know it yet). On failure the session is left fully unloaded.
    pub fn load(&mut self, track: Track) -> std::result::Result<Duration, LoadError> {
        self.release_resource();
        self.set_state(PlaybackState::Loading);

        let handle = match self.engine.create_resource(&track.source) {
            Ok(handle) => handle,
            Err(err) => {
                tracing::warn!(track_id = %track.id, err = %err, "load failed");
                self.set_state(PlaybackState::Unloaded);
                return Err(LoadError::from(err));
            }
        };

        let status = match self.engine.status(handle) {
            Ok(status) if status.is_loaded => status,
            Ok(_) => {
                self.engine.release(handle);
                self.set_state(PlaybackState::Unloaded);
                return Err(LoadError::Undecodable(track.source.to_string()));
            }
            Err(err) => {
                self.engine.release(handle);
                self.set_state(PlaybackState::Unloaded);
                return Err(LoadError::from(err));
            }
        };

        // original behavior: unknown duration is reported as zero
        let duration = status.duration.unwrap_or(Duration::ZERO);

        self.handle = Some(handle);
        self.position = Duration::ZERO;
        self.duration = duration;
        self.finish_latched = false;

        tracing::debug!(
            track_id = %track.id,
            duration_ms = duration.as_millis() as u64,
            "track loaded"
        );
        self.pending_events.push(SessionEvent::TrackLoaded {
            track_id: track.id.clone(),
            duration_ms: duration.as_millis() as u64,
        });
        self.track = Some(track);
        self.set_state(PlaybackState::Paused);

        Ok(duration)
    }

    /// Release the loaded resource, if any
    ///
    /// Idempotent; safe to call on teardown regardless of session state.
    /// The session stays usable for a subsequent `load`.
    pub fn release(&mut self) {
        if self.handle.is_none() && self.state == PlaybackState::Unloaded {
            return;
        }
        tracing::debug!("releasing playback session resource");
        self.release_resource();
        self.set_state(PlaybackState::Unloaded);
    }

    /// Free the engine resource and invalidate outstanding callbacks
    fn release_resource(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.engine.release(handle);
        }
        self.ticker.stop();
        self.generation = self.generation.wrapping_add(1);
        self.track = None;
        self.position = Duration::ZERO;
        self.duration = Duration::ZERO;
        self.finish_latched = false;
    }

    // ===== Transport =====

    /// Start or resume playback
    ///
    /// Starts the position ticker. Already-playing is a no-op; a
    /// transport failure leaves the session paused and retryable.
    pub fn play(&mut self) -> Result<()> {
        match self.state {
            PlaybackState::Unloaded | PlaybackState::Loading => Err(PlaybackError::NoTrackLoaded),
            PlaybackState::Playing => Ok(()),
            PlaybackState::Paused => {
                let handle = self.handle.ok_or(PlaybackError::NoTrackLoaded)?;
                self.engine.play(handle).map_err(PlaybackError::Transport)?;
                self.ticker.start();
                self.set_state(PlaybackState::Playing);
                Ok(())
            }
        }
    }

    /// Pause playback, retaining position
    ///
    /// The ticker stops before the pause completes. A transport failure
    /// leaves the session playing (ticker included) and retryable.
    pub fn pause(&mut self) -> Result<()> {
        match self.state {
            PlaybackState::Unloaded | PlaybackState::Loading => Err(PlaybackError::NoTrackLoaded),
            PlaybackState::Paused => Ok(()),
            PlaybackState::Playing => {
                let handle = self.handle.ok_or(PlaybackError::NoTrackLoaded)?;
                self.ticker.stop();
                match self.engine.pause(handle) {
                    Ok(()) => {
                        self.set_state(PlaybackState::Paused);
                        Ok(())
                    }
                    Err(err) => {
                        self.ticker.start();
                        Err(PlaybackError::Transport(err))
                    }
                }
            }
        }
    }

    /// Seek to a position in the current track
    ///
    /// The target is clamped to `[0, duration]` and the session position
    /// updates immediately; the engine repositions asynchronously, and a
    /// transport failure does not roll the session position back.
    pub fn seek(&mut self, target: Duration) -> Result<()> {
        let handle = self.handle.ok_or(PlaybackError::NoTrackLoaded)?;
        let target = target.min(self.duration);
        self.position = target;
        self.emit_position_update();
        self.engine
            .set_position(handle, target)
            .map_err(PlaybackError::Transport)?;
        Ok(())
    }

    /// Skip by a signed number of seconds, clamped to `[0, duration]`
    pub fn skip_by(&mut self, delta_secs: i64) -> Result<()> {
        let target = if delta_secs >= 0 {
            self.position
                .saturating_add(Duration::from_secs(delta_secs as u64))
        } else {
            self.position
                .saturating_sub(Duration::from_secs(delta_secs.unsigned_abs()))
        };
        self.seek(target)
    }

    /// Skip forward by the configured step
    pub fn skip_forward(&mut self) -> Result<()> {
        self.skip_by(self.config.skip_step_secs)
    }

    /// Skip backward by the configured step
    pub fn skip_backward(&mut self) -> Result<()> {
        self.skip_by(-self.config.skip_step_secs)
    }

    // ===== Status handling =====

    /// Apply an engine-reported status change
    ///
    /// Push-style entry point for engines that deliver status callbacks.
    /// `generation` must be the value of [`generation`](Self::generation)
    /// captured when the callback was registered; a mismatch means the
    /// resource was superseded or freed and the status is dropped.
    ///
    /// On natural completion the session stops playing and resets the
    /// position to zero; with repeat-one active it immediately re-issues
    /// playback from the start, exactly once per completion event.
    pub fn apply_engine_status(&mut self, generation: u64, status: EngineStatus) {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "ignoring stale engine status"
            );
            return;
        }
        if self.handle.is_none() || !status.is_loaded {
            return;
        }
        if status.did_just_finish && self.finish_latched {
            // duplicate completion report
            return;
        }

        // engines may learn the duration after load
        if self.duration.is_zero() {
            if let Some(duration) = status.duration {
                self.duration = duration;
            }
        }

        self.position = if self.duration.is_zero() {
            status.position
        } else {
            status.position.min(self.duration)
        };

        if status.did_just_finish {
            self.finish_latched = true;
            self.handle_natural_completion();
        } else {
            self.finish_latched = false;
            self.emit_position_update();
        }
    }

    /// Drive the session from the host event loop
    ///
    /// While playing, polls the engine status at the ticker interval and
    /// feeds it through the status path. A transport failure on the
    /// status call is reported as an event; the session stays playing.
    pub fn tick(&mut self, now: Instant) {
        if self.state != PlaybackState::Playing {
            return;
        }
        if !self.ticker.poll(now) {
            return;
        }
        let Some(handle) = self.handle else {
            return;
        };
        match self.engine.status(handle) {
            Ok(status) => {
                let generation = self.generation;
                self.apply_engine_status(generation, status);
            }
            Err(err) => {
                tracing::warn!(err = %err, "position sample failed");
                self.pending_events.push(SessionEvent::Error {
                    message: err.to_string(),
                });
            }
        }
    }

    /// Handle engine-reported end-of-track
    fn handle_natural_completion(&mut self) {
        self.position = Duration::ZERO;
        if let Some(track) = self.track.as_ref() {
            let track_id = track.id.clone();
            tracing::debug!(track_id = %track_id, "track finished");
            self.pending_events
                .push(SessionEvent::TrackFinished { track_id });
        }

        if self.modes.repeat() == RepeatMode::One {
            if let Some(handle) = self.handle {
                let replay = self
                    .engine
                    .set_position(handle, Duration::ZERO)
                    .and_then(|()| self.engine.play(handle));
                match replay {
                    Ok(()) => {
                        // still playing; keep the ticker running
                        self.ticker.start();
                        self.set_state(PlaybackState::Playing);
                        self.emit_position_update();
                        return;
                    }
                    Err(err) => {
                        tracing::warn!(err = %err, "repeat-one replay failed");
                        self.pending_events.push(SessionEvent::Error {
                            message: err.to_string(),
                        });
                    }
                }
            }
        }

        self.ticker.stop();
        self.set_state(PlaybackState::Paused);
        self.emit_position_update();
    }

    // ===== Modes =====

    /// Advance the repeat mode through `Off -> All -> One -> Off`
    pub fn cycle_repeat(&mut self) -> RepeatMode {
        let repeat = self.modes.cycle_repeat();
        self.emit_modes_changed();
        repeat
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) -> bool {
        let shuffle = self.modes.toggle_shuffle();
        self.emit_modes_changed();
        shuffle
    }

    /// Current repeat/shuffle modes
    pub fn modes(&self) -> &PlayerModes {
        &self.modes
    }

    // ===== State queries =====

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether the session is currently playing
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Currently loaded track
    pub fn current_track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    /// Current playback position
    pub fn position(&self) -> Duration {
        self.position
    }

    /// Duration of the loaded track (zero when unknown or unloaded)
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Current status generation
    ///
    /// Engines registering push callbacks capture this value and pass it
    /// back through [`apply_engine_status`](Self::apply_engine_status).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the position ticker is running
    pub fn ticker_running(&self) -> bool {
        self.ticker.is_running()
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns the events emitted since the last drain. The host should
    /// call this from its event loop to synchronize with session state.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.pending_events
                .push(SessionEvent::StateChanged { state });
        }
    }

    fn emit_position_update(&mut self) {
        self.pending_events.push(SessionEvent::PositionUpdate {
            position_ms: self.position.as_millis() as u64,
            duration_ms: self.duration.as_millis() as u64,
        });
    }

    fn emit_modes_changed(&mut self) {
        self.pending_events.push(SessionEvent::ModesChanged {
            repeat: self.modes.repeat(),
            shuffle: self.modes.shuffle_enabled(),
        });
    }
}
