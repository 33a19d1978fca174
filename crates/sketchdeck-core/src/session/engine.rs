//! Slideshow session state machine.
//!
//! The engine is a caller-ticked state machine. It does not use internal
//! threads: whoever drives it (see [`super::player`]) calls `tick()` once per
//! elapsed second and forwards play/pause requests through `toggle()`.
//!
//! ## State Transitions
//!
//! ```text
//! Idle/Finished --toggle--> Displaying <--expire--> Resting
//!                               |  ^                  |  ^
//!                          toggle  toggle        toggle  toggle
//!                               v  |                  v  |
//!                               Paused (remembers which)
//! Displaying(last) --expire--> Finished
//! Resting(last+1)  --expire--> Finished
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = SlideshowEngine::new(settings, MemoryHistory::new())?;
//! engine.load_images(images);
//! engine.toggle();
//! // Once per second:
//! engine.tick()?; // Returns Some(Event) when a phase ends
//! ```

use chrono::Utc;
use tracing::{debug, info, trace, warn};

use super::settings::SlideshowSettings;
use super::state::{Phase, SessionState};
use super::summary::SessionSummary;
use crate::error::{CoreError, ImageLoadError, Result, ValidationError};
use crate::events::Event;
use crate::history::HistoryRecorder;
use crate::images::{entropy_rng, ImageRef, ImageSet, RandomSource};
use crate::timer::Countdown;

/// Core slideshow engine.
///
/// Owns the image set, the current playlist and the only countdown for the
/// session. Finished runs are reported to the history recorder `H`.
pub struct SlideshowEngine<H: HistoryRecorder> {
    images: ImageSet,
    settings: SlideshowSettings,
    playlist: Vec<ImageRef>,
    phase: Phase,
    /// Phase to resume into; only meaningful while `Paused`.
    paused_from: Option<Phase>,
    index: usize,
    countdown: Countdown,
    rng: Box<dyn RandomSource + Send>,
    history: H,
}

impl<H: HistoryRecorder> SlideshowEngine<H> {
    /// Create an idle engine with no images.
    ///
    /// # Errors
    /// Returns an error if `settings` do not validate.
    pub fn new(settings: SlideshowSettings, history: H) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(Self {
            images: ImageSet::default(),
            settings,
            playlist: Vec::new(),
            phase: Phase::Idle,
            paused_from: None,
            index: 0,
            countdown: Countdown::new(),
            rng: Box::new(entropy_rng()),
            history,
        })
    }

    /// Replace the shuffle source, e.g. with a seeded generator.
    pub fn with_random_source(mut self, rng: impl RandomSource + Send + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn remaining_secs(&self) -> u64 {
        self.countdown.remaining_secs()
    }

    pub fn is_playing(&self) -> bool {
        self.phase.is_playing()
    }

    pub fn is_ready(&self) -> bool {
        self.images.is_ready()
    }

    pub fn settings(&self) -> &SlideshowSettings {
        &self.settings
    }

    pub fn images(&self) -> &[ImageRef] {
        self.images.images()
    }

    pub fn playlist(&self) -> &[ImageRef] {
        &self.playlist
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// The image currently on screen.
    ///
    /// `None` while resting (the screen is blank) and outside a run.
    pub fn current_image(&self) -> Option<&ImageRef> {
        let showing = match self.phase {
            Phase::Displaying => true,
            Phase::Paused => self.paused_from == Some(Phase::Displaying),
            _ => false,
        };
        if showing {
            self.playlist.get(self.index)
        } else {
            None
        }
    }

    pub fn snapshot(&self) -> SessionState {
        SessionState {
            phase: self.phase,
            paused_from: self.paused_from,
            index: self.index,
            remaining_secs: self.countdown.remaining_secs(),
            is_playing: self.is_playing(),
            playlist_len: self.playlist.len(),
        }
    }

    /// Snapshot wrapped as an event, for observers that only consume events.
    pub fn tick_event(&self) -> Event {
        Event::Tick {
            phase: self.phase,
            index: self.index,
            remaining_secs: self.countdown.remaining_secs(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the image set. Any run in progress is abandoned.
    pub fn load_images(&mut self, images: Vec<ImageRef>) -> Event {
        let count = images.len();
        self.images.set_images(images);
        self.reset();
        info!(count, "images loaded");
        Event::ImagesLoaded {
            count,
            at: Utc::now(),
        }
    }

    /// Apply the outcome of an image acquisition.
    ///
    /// On failure the engine is left idle with an empty set.
    ///
    /// # Errors
    /// Returns the load error unchanged.
    pub fn try_load_images(
        &mut self,
        loaded: std::result::Result<Vec<ImageRef>, ImageLoadError>,
    ) -> std::result::Result<Event, ImageLoadError> {
        match loaded {
            Ok(images) => Ok(self.load_images(images)),
            Err(e) => {
                warn!(error = %e, "image load failed, clearing image set");
                self.images.clear();
                self.reset();
                Err(e)
            }
        }
    }

    /// Change playback options.
    ///
    /// The running phase keeps its remaining time; new durations apply from
    /// the next phase and the playlist options from the next fresh start.
    ///
    /// # Errors
    /// Returns an error if `settings` do not validate; nothing changes then.
    pub fn update_settings(&mut self, settings: SlideshowSettings) -> Result<(), ValidationError> {
        settings.validate()?;
        debug!(?settings, "settings updated");
        self.settings = settings;
        if self.phase == Phase::Idle {
            self.prime_idle();
        }
        Ok(())
    }

    /// Play/pause request.
    ///
    /// Starts a fresh run from `Idle` or `Finished`, resumes from `Paused`,
    /// and pauses a playing session. Returns `None` when nothing happened.
    pub fn toggle(&mut self) -> Option<Event> {
        match self.phase {
            Phase::Idle | Phase::Finished => self.start_run(),
            Phase::Paused => self.resume(),
            Phase::Displaying | Phase::Resting => self.pause(),
        }
    }

    /// Start or resume playback. No-op if already playing.
    pub fn play(&mut self) -> Option<Event> {
        if self.is_playing() {
            return None;
        }
        self.toggle()
    }

    /// Pause playback. No-op unless playing.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.is_playing() {
            return None;
        }
        let from = self.phase;
        let remaining_secs = self.countdown.cancel();
        self.paused_from = Some(from);
        self.phase = Phase::Paused;
        debug!(?from, remaining_secs, "paused");
        Some(Event::Paused {
            from,
            remaining_secs,
            at: Utc::now(),
        })
    }

    /// Call once per elapsed second.
    ///
    /// Returns `Some(Event)` when the tick ends a phase.
    ///
    /// # Errors
    /// Returns `CoreError::History` if the run finished but the summary could
    /// not be saved. The engine is `Finished` regardless.
    pub fn tick(&mut self) -> Result<Option<Event>> {
        if !self.is_playing() {
            return Ok(None);
        }
        if !self.countdown.tick() {
            trace!(remaining = self.countdown.remaining_secs(), "tick");
            return Ok(None);
        }
        self.on_expire()
    }

    /// Stop the current run early and record what was reached so far.
    ///
    /// No-op from `Idle` or `Finished`.
    ///
    /// # Errors
    /// Same as [`SlideshowEngine::tick`].
    pub fn end_session(&mut self) -> Result<Option<Event>> {
        match self.phase {
            Phase::Idle | Phase::Finished => Ok(None),
            _ => {
                let reached = (self.index + 1).min(self.playlist.len());
                self.finish(reached)
            }
        }
    }

    /// Abandon any run and return to `Idle`. The image set is kept.
    pub fn reset(&mut self) -> Event {
        self.countdown = Countdown::new();
        self.playlist.clear();
        self.phase = Phase::Idle;
        self.paused_from = None;
        self.index = 0;
        self.prime_idle();
        Event::SessionReset { at: Utc::now() }
    }

    /// Tear down: cancel the countdown so no further tick can fire.
    pub fn dispose(&mut self) {
        if self.countdown.is_active() {
            debug!("disposing engine with an active countdown");
        }
        self.reset();
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// While idle with images, show the first interval without counting.
    fn prime_idle(&mut self) {
        let secs = if self.images.is_ready() {
            self.settings.interval_sec
        } else {
            0
        };
        self.countdown.prime(secs);
    }

    fn start_run(&mut self) -> Option<Event> {
        if !self.images.is_ready() {
            debug!("toggle ignored: no images loaded");
            return None;
        }
        self.playlist = self.images.prepare_playlist(
            self.settings.randomize,
            self.settings.image_count,
            &mut *self.rng,
        );
        self.index = 0;
        self.paused_from = None;
        self.phase = Phase::Displaying;
        self.countdown.start(self.settings.interval_sec);
        info!(
            playlist_len = self.playlist.len(),
            interval_sec = self.settings.interval_sec,
            rest_sec = self.settings.rest_sec,
            "session started"
        );
        Some(Event::SessionStarted {
            playlist_len: self.playlist.len(),
            interval_sec: self.settings.interval_sec,
            rest_sec: self.settings.rest_sec,
            image: self.playlist.first().map(ImageRef::identifier).unwrap_or_default(),
            at: Utc::now(),
        })
    }

    fn resume(&mut self) -> Option<Event> {
        let phase = self.paused_from.take().unwrap_or(Phase::Displaying);
        let remaining_secs = self.countdown.remaining_secs();
        self.phase = phase;
        self.countdown.start(remaining_secs);
        debug!(?phase, remaining_secs, "resumed");
        Some(Event::Resumed {
            phase,
            remaining_secs,
            at: Utc::now(),
        })
    }

    fn on_expire(&mut self) -> Result<Option<Event>> {
        match self.phase {
            Phase::Displaying => {
                let is_last = self.index + 1 >= self.playlist.len();
                if self.settings.rest_sec > 0 && !is_last {
                    self.phase = Phase::Resting;
                    self.countdown.start(self.settings.rest_sec);
                    debug!(index = self.index, "resting");
                    Ok(Some(Event::RestStarted {
                        index: self.index,
                        duration_secs: self.settings.rest_sec,
                        at: Utc::now(),
                    }))
                } else if is_last {
                    self.finish(self.playlist.len())
                } else {
                    self.index += 1;
                    Ok(Some(self.show_current()))
                }
            }
            Phase::Resting => {
                self.index += 1;
                if self.index < self.playlist.len() {
                    self.phase = Phase::Displaying;
                    Ok(Some(self.show_current()))
                } else {
                    self.finish(self.playlist.len())
                }
            }
            _ => Ok(None),
        }
    }

    fn show_current(&mut self) -> Event {
        self.countdown.start(self.settings.interval_sec);
        let image = self
            .playlist
            .get(self.index)
            .map(ImageRef::identifier)
            .unwrap_or_default();
        debug!(index = self.index, %image, "showing image");
        Event::ImageShown {
            index: self.index,
            image,
            duration_secs: self.settings.interval_sec,
            at: Utc::now(),
        }
    }

    /// Enter `Finished` and hand a summary of `playlist[..played]` to the recorder.
    fn finish(&mut self, played: usize) -> Result<Option<Event>> {
        self.countdown.cancel();
        self.phase = Phase::Finished;
        self.paused_from = None;

        let completed = played == self.playlist.len();
        let summary = SessionSummary::new(
            &self.playlist[..played],
            self.settings.interval_sec,
            self.settings.rest_sec,
        );
        info!(id = %summary.id, image_count = summary.image_count, completed, "session finished");

        if let Err(e) = self.history.save_history(&summary) {
            warn!(error = %e, id = %summary.id, "failed to record session history");
            return Err(CoreError::History(e));
        }

        Ok(Some(Event::SessionFinished {
            summary,
            completed,
            at: Utc::now(),
        }))
    }
}

impl<H: HistoryRecorder> Drop for SlideshowEngine<H> {
    fn drop(&mut self) {
        self.countdown.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use crate::images::seeded_rng;

    fn refs(names: &[&str]) -> Vec<ImageRef> {
        names.iter().map(|n| ImageRef::from_path(*n)).collect()
    }

    fn engine(interval_sec: u64, rest_sec: u64, names: &[&str]) -> SlideshowEngine<MemoryHistory> {
        let settings = SlideshowSettings {
            interval_sec,
            rest_sec,
            randomize: false,
            image_count: 0,
        };
        let mut e = SlideshowEngine::new(settings, MemoryHistory::new())
            .unwrap()
            .with_random_source(seeded_rng(7));
        e.load_images(refs(names));
        e
    }

    fn current(e: &SlideshowEngine<MemoryHistory>) -> Option<String> {
        e.current_image().map(ImageRef::identifier)
    }

    /// Ticks `n` times, asserting nothing but the last tick ends the phase.
    fn run_phase(e: &mut SlideshowEngine<MemoryHistory>, n: u64) -> Option<Event> {
        for left in (1..n).rev() {
            assert!(e.tick().unwrap().is_none());
            assert_eq!(e.remaining_secs(), left);
        }
        e.tick().unwrap()
    }

    #[test]
    fn starting_sets_full_interval() {
        let mut e = engine(5, 0, &["a"]);
        assert!(matches!(e.toggle(), Some(Event::SessionStarted { playlist_len: 1, .. })));
        assert_eq!(e.phase(), Phase::Displaying);
        assert_eq!(e.remaining_secs(), 5);
        assert!(e.is_playing());
    }

    #[test]
    fn scenario_a_display_rest_alternate_then_finish() {
        let mut e = engine(2, 1, &["A", "B", "C"]);
        e.toggle();
        assert_eq!(current(&e).as_deref(), Some("A"));

        assert!(matches!(run_phase(&mut e, 2), Some(Event::RestStarted { index: 0, .. })));
        assert_eq!(e.phase(), Phase::Resting);
        assert!(e.current_image().is_none());

        assert!(matches!(run_phase(&mut e, 1), Some(Event::ImageShown { index: 1, .. })));
        assert_eq!(current(&e).as_deref(), Some("B"));
        assert_eq!(e.remaining_secs(), 2);

        assert!(matches!(run_phase(&mut e, 2), Some(Event::RestStarted { index: 1, .. })));
        assert!(matches!(run_phase(&mut e, 1), Some(Event::ImageShown { index: 2, .. })));
        assert_eq!(current(&e).as_deref(), Some("C"));

        // Last image: no rest, straight to finished.
        match run_phase(&mut e, 2) {
            Some(Event::SessionFinished { summary, completed, .. }) => {
                assert!(completed);
                assert_eq!(summary.image_count, 3);
                assert_eq!(summary.images, vec!["A", "B", "C"]);
                assert_eq!(summary.interval_sec, 2);
                assert_eq!(summary.rest_sec, 1);
            }
            other => panic!("expected SessionFinished, got {other:?}"),
        }
        assert_eq!(e.phase(), Phase::Finished);
        assert!(!e.is_playing());
        assert_eq!(e.history().entries().len(), 1);
    }

    #[test]
    fn scenario_b_empty_set_toggle_is_noop() {
        let mut e = engine(5, 1, &[]);
        assert!(e.toggle().is_none());
        assert_eq!(e.phase(), Phase::Idle);
        assert_eq!(e.remaining_secs(), 0);
        assert!(e.tick().unwrap().is_none());
        assert_eq!(e.remaining_secs(), 0);
    }

    #[test]
    fn scenario_c_no_rest_advances_back_to_back() {
        let mut e = engine(3, 0, &["A", "B"]);
        e.toggle();
        let mut phases = vec![e.phase()];

        assert!(matches!(run_phase(&mut e, 3), Some(Event::ImageShown { index: 1, .. })));
        phases.push(e.phase());
        assert_eq!(current(&e).as_deref(), Some("B"));

        assert!(matches!(run_phase(&mut e, 3), Some(Event::SessionFinished { .. })));
        phases.push(e.phase());

        assert!(!phases.contains(&Phase::Resting));
        assert_eq!(e.phase(), Phase::Finished);
    }

    #[test]
    fn scenario_d_resume_keeps_remaining() {
        let mut e = engine(6, 0, &["A", "B"]);
        e.toggle();
        e.tick().unwrap();
        e.tick().unwrap();
        assert_eq!(e.remaining_secs(), 4);

        assert!(matches!(e.toggle(), Some(Event::Paused { from: Phase::Displaying, remaining_secs: 4, .. })));
        assert_eq!(e.phase(), Phase::Paused);
        assert!(!e.is_playing());

        // Ticks while paused change nothing.
        e.tick().unwrap();
        assert_eq!(e.remaining_secs(), 4);
        assert_eq!(current(&e).as_deref(), Some("A"));

        assert!(matches!(e.toggle(), Some(Event::Resumed { phase: Phase::Displaying, remaining_secs: 4, .. })));
        assert_eq!(e.remaining_secs(), 4);
        assert!(matches!(run_phase(&mut e, 4), Some(Event::ImageShown { index: 1, .. })));
    }

    #[test]
    fn pause_during_rest_resumes_resting() {
        let mut e = engine(1, 3, &["A", "B"]);
        e.toggle();
        e.tick().unwrap();
        assert_eq!(e.phase(), Phase::Resting);
        e.tick().unwrap();

        e.toggle();
        assert_eq!(e.snapshot().paused_from, Some(Phase::Resting));
        assert!(e.current_image().is_none());

        e.toggle();
        assert_eq!(e.phase(), Phase::Resting);
        assert_eq!(e.remaining_secs(), 2);
    }

    #[test]
    fn toggle_twice_from_idle_without_images_is_identity() {
        let mut e = engine(5, 1, &[]);
        let before = e.snapshot();
        e.toggle();
        e.toggle();
        assert_eq!(e.snapshot(), before);
        assert_eq!(e.phase(), Phase::Idle);
    }

    #[test]
    fn toggle_twice_from_idle_with_images_pauses_at_start() {
        let mut e = engine(5, 1, &["A", "B"]);
        let before = e.snapshot();
        assert_eq!(before.remaining_secs, 5);
        e.toggle();
        e.toggle();
        let s = e.snapshot();
        assert_eq!(s.phase, Phase::Paused);
        assert_eq!((s.index, s.remaining_secs), (before.index, before.remaining_secs));
    }

    #[test]
    fn idle_remaining_follows_images_and_settings() {
        let mut e = engine(5, 0, &[]);
        assert_eq!(e.remaining_secs(), 0);

        e.load_images(refs(&["A"]));
        assert_eq!(e.remaining_secs(), 5);
        assert!(e.tick().unwrap().is_none());
        assert_eq!(e.remaining_secs(), 5);

        e.update_settings(SlideshowSettings {
            interval_sec: 8,
            rest_sec: 0,
            randomize: false,
            image_count: 0,
        })
        .unwrap();
        assert_eq!(e.remaining_secs(), 8);

        e.try_load_images(Err(ImageLoadError::NoImages)).unwrap_err();
        assert_eq!(e.remaining_secs(), 0);
    }

    #[test]
    fn image_count_truncates_playlist() {
        let mut e = engine(1, 0, &["A", "B", "C", "D"]);
        e.update_settings(SlideshowSettings {
            interval_sec: 1,
            rest_sec: 0,
            randomize: false,
            image_count: 2,
        })
        .unwrap();
        e.toggle();
        assert_eq!(e.playlist().len(), 2);
        e.tick().unwrap();
        match e.tick().unwrap() {
            Some(Event::SessionFinished { summary, .. }) => assert_eq!(summary.images, vec!["A", "B"]),
            other => panic!("expected SessionFinished, got {other:?}"),
        }
    }

    #[test]
    fn restart_after_finish_recomputes_playlist() {
        let mut e = engine(1, 0, &["A", "B", "C", "D", "E", "F"]);
        e.update_settings(SlideshowSettings {
            interval_sec: 1,
            rest_sec: 0,
            randomize: true,
            image_count: 0,
        })
        .unwrap();

        e.toggle();
        let first = e.playlist().to_vec();
        for _ in 0..6 {
            e.tick().unwrap();
        }
        assert_eq!(e.phase(), Phase::Finished);

        e.toggle();
        assert_eq!(e.phase(), Phase::Displaying);
        assert_eq!(e.index(), 0);
        assert_eq!(e.remaining_secs(), 1);
        let mut a: Vec<_> = first.iter().map(ImageRef::identifier).collect();
        let mut b: Vec<_> = e.playlist().iter().map(ImageRef::identifier).collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
        assert_eq!(e.history().entries().len(), 1);
    }

    #[test]
    fn resume_does_not_reshuffle() {
        let mut e = engine(3, 0, &["A", "B", "C", "D", "E"]);
        e.update_settings(SlideshowSettings {
            interval_sec: 3,
            rest_sec: 0,
            randomize: true,
            image_count: 0,
        })
        .unwrap();
        e.toggle();
        let before = e.playlist().to_vec();
        e.toggle();
        e.toggle();
        assert_eq!(e.playlist(), before.as_slice());
    }

    #[test]
    fn loading_images_resets_to_idle() {
        let mut e = engine(3, 0, &["A", "B"]);
        e.toggle();
        e.tick().unwrap();
        e.load_images(refs(&["C"]));
        assert_eq!(e.phase(), Phase::Idle);
        assert_eq!(e.index(), 0);
        assert!(e.tick().unwrap().is_none());
        assert_eq!(e.images().len(), 1);
    }

    #[test]
    fn failed_load_leaves_empty_idle_engine() {
        let mut e = engine(3, 0, &["A", "B"]);
        e.toggle();
        let result = e.try_load_images(Err(ImageLoadError::NoImages));
        assert!(result.is_err());
        assert_eq!(e.phase(), Phase::Idle);
        assert!(!e.is_ready());
        assert!(e.toggle().is_none());
    }

    #[test]
    fn history_failure_still_finishes() {
        let settings = SlideshowSettings {
            interval_sec: 1,
            rest_sec: 0,
            ..SlideshowSettings::default()
        };
        let mut e = SlideshowEngine::new(settings, MemoryHistory::failing()).unwrap();
        e.load_images(refs(&["A"]));
        e.toggle();
        let result = e.tick();
        assert!(matches!(result, Err(CoreError::History(_))));
        assert_eq!(e.phase(), Phase::Finished);
        assert!(!e.is_playing());
    }

    #[test]
    fn end_session_records_images_reached() {
        let mut e = engine(2, 1, &["A", "B", "C"]);
        e.toggle();
        e.tick().unwrap();
        e.tick().unwrap(); // rest
        e.tick().unwrap(); // B
        e.toggle(); // paused on B
        match e.end_session().unwrap() {
            Some(Event::SessionFinished { summary, completed, .. }) => {
                assert!(!completed);
                assert_eq!(summary.images, vec!["A", "B"]);
            }
            other => panic!("expected SessionFinished, got {other:?}"),
        }
        assert_eq!(e.phase(), Phase::Finished);
        assert!(e.end_session().unwrap().is_none());
    }

    #[test]
    fn settings_change_applies_from_next_phase() {
        let mut e = engine(5, 0, &["A", "B"]);
        e.toggle();
        e.tick().unwrap();
        e.update_settings(SlideshowSettings {
            interval_sec: 2,
            rest_sec: 0,
            randomize: false,
            image_count: 0,
        })
        .unwrap();
        assert_eq!(e.remaining_secs(), 4);
        assert!(matches!(run_phase(&mut e, 4), Some(Event::ImageShown { duration_secs: 2, .. })));
        assert_eq!(e.remaining_secs(), 2);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let mut e = engine(5, 0, &["A"]);
        let bad = SlideshowSettings {
            interval_sec: 0,
            ..SlideshowSettings::default()
        };
        assert!(e.update_settings(bad).is_err());
        assert_eq!(e.settings().interval_sec, 5);
        assert!(SlideshowEngine::new(bad, MemoryHistory::new()).is_err());
    }

    #[test]
    fn play_and_pause_are_directional() {
        let mut e = engine(5, 0, &["A"]);
        assert!(e.pause().is_none());
        assert!(e.play().is_some());
        assert!(e.play().is_none());
        assert!(e.pause().is_some());
        assert!(e.pause().is_none());
        assert!(matches!(e.play(), Some(Event::Resumed { .. })));
    }

    #[test]
    fn dispose_stops_ticks() {
        let mut e = engine(2, 0, &["A"]);
        e.toggle();
        e.dispose();
        assert_eq!(e.phase(), Phase::Idle);
        assert!(e.tick().unwrap().is_none());
        assert!(e.history().entries().is_empty());
    }
}
