//! Lobby inactivity watchdog.
//!
//! Lives outside the engine: the host polls it periodically with its own
//! clock. The watchdog only compares the game's activity counter between
//! polls, so the engine itself never reads time.

use std::time::{Duration, Instant};

use tracing::info;

use super::event::Outbound;
use super::orchestrator::Game;
use crate::core::Phase;

/// How long a lobby may sit idle by default.
pub const DEFAULT_LOBBY_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Reason sent with `game_ended` on timeout.
pub const REASON_INACTIVITY: &str = "inactivity timeout";

/// Terminates games stuck in WAITING.
#[derive(Clone, Debug)]
pub struct InactivityWatchdog {
    timeout: Duration,
    last_activity: Option<u64>,
    idle_since: Option<Instant>,
}

impl Default for InactivityWatchdog {
    fn default() -> Self {
        Self::new(DEFAULT_LOBBY_TIMEOUT)
    }
}

impl InactivityWatchdog {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            last_activity: None,
            idle_since: None,
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check the game at `now`. Returns the `game_ended` event if it was
    /// terminated.
    pub fn poll(&mut self, game: &mut Game, now: Instant) -> Vec<Outbound> {
        if game.phase() != Phase::Waiting {
            self.idle_since = None;
            return Vec::new();
        }

        let activity = game.activity();
        let since = match (self.last_activity, self.idle_since) {
            (Some(seen), Some(since)) if seen == activity => since,
            _ => {
                self.last_activity = Some(activity);
                self.idle_since = Some(now);
                return Vec::new();
            }
        };

        let idle = now.saturating_duration_since(since);
        if idle <= self.timeout {
            return Vec::new();
        }
        info!(idle_secs = idle.as_secs(), "lobby idle, terminating");
        game.terminate(REASON_INACTIVITY)
    }
}
