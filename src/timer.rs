//! Elapsed-time timer for a single work session.
//!
//! A timer is either running or stopped. It stops when its [`StopToken`]
//! fires or when the optional limit passes, whichever comes first. Wall clock
//! time is only used to stamp the start, the elapsed time comes from a
//! monotonic clock.

use chrono::{DateTime, Duration, Local};
use log::{debug, warn};
use std::io::Write;
use tokio::time::{Instant, MissedTickBehavior};

use crate::quarter::QuarterHours;
use crate::signal::StopToken;
use crate::spinner::{Spinner, INTERVAL};

/// A finished timer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub started_at: DateTime<Local>,
    pub elapsed: Duration,
}

impl Session {
    /// Elapsed time rounded to what Tempo bills.
    pub fn billed(&self) -> QuarterHours {
        QuarterHours::from_elapsed(self.elapsed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Running {
        started_at: DateTime<Local>,
        since: Instant,
    },
    Stopped(Session),
}

#[derive(Debug)]
pub struct Timer {
    state: TimerState,
}

impl Timer {
    pub fn start() -> Self {
        let started_at = Local::now();
        debug!("Timer started at {}", started_at.format("%H:%M:%S"));
        Self {
            state: TimerState::Running {
                started_at,
                since: Instant::now(),
            },
        }
    }

    pub fn elapsed(&self) -> Duration {
        match self.state {
            TimerState::Running { since, .. } => to_chrono(since.elapsed()),
            TimerState::Stopped(session) => session.elapsed,
        }
    }

    /// Moves to `Stopped`. Stopping twice returns the first session.
    pub fn stop(&mut self) -> Session {
        match self.state {
            TimerState::Running { started_at, since } => {
                let session = Session {
                    started_at,
                    elapsed: to_chrono(since.elapsed()),
                };
                debug!("Timer stopped after {}s", session.elapsed.num_seconds());
                self.state = TimerState::Stopped(session);
                session
            }
            TimerState::Stopped(session) => session,
        }
    }

    /// Animates `spinner` until `stop` fires or `limit` has passed.
    ///
    /// A limit too far out to be represented means no limit. On return the
    /// stop channel is marked stopped, whatever ended the run.
    pub async fn run<W: Write>(
        mut self,
        mut stop: StopToken,
        limit: Option<std::time::Duration>,
        spinner: &mut Spinner<W>,
    ) -> Session {
        let since = match self.state {
            TimerState::Running { since, .. } => since,
            TimerState::Stopped(session) => {
                stop.finish();
                return session;
            }
        };
        if let Err(e) = spinner.start() {
            warn!("Cannot draw spinner: {}", e);
        }

        let deadline = limit.and_then(|l| since.checked_add(l));
        if limit.is_some() && deadline.is_none() {
            warn!("Timer limit is too large, running until interrupted");
        }
        let mut ticks = tokio::time::interval(INTERVAL);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = stop.stopped() => break,
                _ = wait_until(deadline) => {
                    debug!("Timer limit reached");
                    break;
                }
                _ = ticks.tick() => {
                    if let Err(e) = spinner.tick(self.elapsed()) {
                        warn!("Cannot draw spinner: {}", e);
                    }
                }
            }
        }

        let session = self.stop();
        stop.finish();
        if let Err(e) = spinner.stop() {
            warn!("Cannot restore terminal: {}", e);
        }
        session
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

fn to_chrono(std: std::time::Duration) -> Duration {
    Duration::from_std(std).unwrap_or(Duration::MAX)
}
