//! Async driver for a [`SlideshowEngine`].
//!
//! The player owns the one periodic source of a session: a one-second tokio
//! interval. It multiplexes that interval with caller commands and a
//! shutdown signal, feeds everything into the engine, and hands each
//! resulting event to an observer. The interval lives only as long as
//! [`Player::run`]; once it returns no tick can reach the engine.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use super::engine::SlideshowEngine;
use crate::error::Result;
use crate::events::Event;
use crate::history::HistoryRecorder;

const TICK: Duration = Duration::from_secs(1);

/// Requests a front end can send to a running player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Pause or resume.
    Toggle,
    /// Finish now, recording the images reached so far.
    EndSession,
    /// Abandon the run without recording it.
    Stop,
}

/// How a call to [`Player::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOutcome {
    /// The session reached `Finished` and was handed to the recorder.
    Finished,
    /// Stopped by command or shutdown; the engine was disposed.
    Stopped,
    /// No images were loaded, nothing was played.
    NotReady,
}

pub struct Player<H: HistoryRecorder> {
    engine: SlideshowEngine<H>,
}

impl<H: HistoryRecorder> Player<H> {
    pub fn new(engine: SlideshowEngine<H>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &SlideshowEngine<H> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SlideshowEngine<H> {
        &mut self.engine
    }

    pub fn into_engine(self) -> SlideshowEngine<H> {
        self.engine
    }

    /// Play one session to the end.
    ///
    /// Starts playback, then ticks the engine once per second until the
    /// session finishes, a `Stop` command arrives, or `shutdown` resolves.
    /// A closed command channel is ignored; playback carries on.
    ///
    /// # Errors
    /// Returns `CoreError::History` if the finished session could not be
    /// recorded. The engine is `Finished` in that case.
    pub async fn run<S, F>(
        &mut self,
        mut commands: mpsc::Receiver<PlayerCommand>,
        shutdown: S,
        mut on_event: F,
    ) -> Result<PlayerOutcome>
    where
        S: Future<Output = ()>,
        F: FnMut(&Event),
    {
        let Some(started) = self.engine.play() else {
            debug!("player not started: engine has no images");
            return Ok(PlayerOutcome::NotReady);
        };
        on_event(&started);

        let mut ticker = interval_at(Instant::now() + TICK, TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);
        let mut commands_open = true;

        let outcome = loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("shutdown requested, stopping playback");
                    break PlayerOutcome::Stopped;
                }
                cmd = commands.recv(), if commands_open => match cmd {
                    None => {
                        debug!("command channel closed");
                        commands_open = false;
                    }
                    Some(PlayerCommand::Toggle) => {
                        if let Some(event) = self.engine.toggle() {
                            if self.engine.is_playing() {
                                // A full second must pass before the first decrement after resuming.
                                ticker.reset();
                            }
                            on_event(&event);
                        }
                    }
                    Some(PlayerCommand::EndSession) => {
                        if let Some(event) = self.engine.end_session()? {
                            on_event(&event);
                        }
                        break PlayerOutcome::Finished;
                    }
                    Some(PlayerCommand::Stop) => break PlayerOutcome::Stopped,
                },
                _ = ticker.tick() => {
                    if !self.engine.is_playing() {
                        continue;
                    }
                    match self.engine.tick()? {
                        Some(event) => {
                            let finished = matches!(event, Event::SessionFinished { .. });
                            on_event(&event);
                            if finished {
                                break PlayerOutcome::Finished;
                            }
                        }
                        None => on_event(&self.engine.tick_event()),
                    }
                }
            }
        };

        if outcome == PlayerOutcome::Stopped {
            self.engine.dispose();
            on_event(&Event::SessionReset {
                at: chrono::Utc::now(),
            });
        }
        Ok(outcome)
    }
}
