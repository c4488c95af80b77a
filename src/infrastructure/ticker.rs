//! One-second countdown timer
//!
//! [`Ticker`] is an explicit `Idle | Running` state machine around a tokio task
//! that sends [`Action::TimerTick`] once per period. Each scheduled task gets a
//! fresh generation number so ticks still queued from a cancelled task can be
//! told apart from live ones.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::action::Action;

pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// Owned handle of a running tick task. Dropping it cancels the task.
#[derive(Debug)]
pub struct TickerHandle {
    generation: u64,
    cancellation_token: CancellationToken,
    task: JoinHandle<()>,
}

impl TickerHandle {
    fn spawn(generation: u64, period: Duration, tx: UnboundedSender<Action>) -> Self {
        let cancellation_token = CancellationToken::new();
        let token = cancellation_token.clone();
        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        if tx.send(Action::TimerTick(generation)).is_err() {
                            log::debug!("tick receiver dropped, stopping timer {generation}");
                            break;
                        }
                    }
                }
            }
        });

        Self {
            generation,
            cancellation_token,
            task,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancellation_token.cancel();
    }
}

#[derive(Debug, Default)]
pub enum TickerState {
    #[default]
    Idle,
    Running(TickerHandle),
}

/// Why [`Ticker::start`] did not schedule a new task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartError {
    AlreadyRunning { generation: u64 },
    NoHandler,
}

impl std::fmt::Display for StartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartError::AlreadyRunning { generation } => {
                write!(f, "timer {generation} is already running")
            }
            StartError::NoHandler => write!(f, "no action handler registered"),
        }
    }
}

impl std::error::Error for StartError {}

#[derive(Debug)]
pub struct Ticker {
    state: TickerState,
    period: Duration,
    last_generation: u64,
    tx: Option<UnboundedSender<Action>>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            state: TickerState::Idle,
            period,
            last_generation: 0,
            tx: None,
        }
    }

    pub fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.tx = Some(tx);
    }

    /// Schedule the repeating tick. Requires the ticker to be idle.
    pub fn start(&mut self) -> Result<u64, StartError> {
        if let TickerState::Running(handle) = &self.state {
            return Err(StartError::AlreadyRunning {
                generation: handle.generation(),
            });
        }
        let tx = self.tx.clone().ok_or(StartError::NoHandler)?;

        self.last_generation += 1;
        let generation = self.last_generation;
        self.state = TickerState::Running(TickerHandle::spawn(generation, self.period, tx));
        log::debug!("timer {generation} started");
        Ok(generation)
    }

    /// Cancel the running tick, if any. Returns whether one was cancelled.
    pub fn stop(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            TickerState::Running(handle) => {
                log::debug!("timer {} stopped", handle.generation());
                true
            }
            TickerState::Idle => false,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TickerState::Running(_))
    }

    /// Whether a tick of `generation` comes from the live task.
    pub fn accepts(&self, generation: u64) -> bool {
        match &self.state {
            TickerState::Running(handle) => handle.generation() == generation,
            TickerState::Idle => false,
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD)
    }
}
