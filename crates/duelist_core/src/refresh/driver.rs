//! Refresh timer task.

use crate::config::{ConfigError, RefreshConfig, RefreshMode};
use crate::overdue::next_midnight;
use crate::refresh::clock::{Clock, SystemClock};
use chrono::{DateTime, Local};
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Publishes a fresh `now` on every tick until stopped or dropped.
///
/// Must be started from within a tokio runtime.
pub struct RefreshDriver {
    now_rx: watch::Receiver<DateTime<Local>>,
    task: Option<JoinHandle<()>>,
}

impl RefreshDriver {
    /// Starts a driver that reads the system clock.
    ///
    /// # Errors
    /// - Returns [`ConfigError`] when `config` fails validation.
    pub fn start(config: &RefreshConfig) -> Result<Self, ConfigError> {
        Self::start_with_clock(config, Arc::new(SystemClock))
    }

    /// Starts a driver that reads time from `clock`.
    ///
    /// The initial value (before the first tick) is `clock.now()` at start.
    pub fn start_with_clock(
        config: &RefreshConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let (now_tx, now_rx) = watch::channel(clock.now());
        let interval = config.interval();
        let task = match config.mode {
            RefreshMode::Fixed => tokio::spawn(run_fixed(now_tx, clock, interval)),
            RefreshMode::Midnight => tokio::spawn(run_midnight(now_tx, clock, interval)),
        };

        info!(
            "event=refresh_start module=refresh status=ok mode={:?} interval_secs={}",
            config.mode, config.interval_secs
        );

        Ok(Self {
            now_rx,
            task: Some(task),
        })
    }

    /// Latest published time.
    pub fn current_time(&self) -> DateTime<Local> {
        *self.now_rx.borrow()
    }

    /// Returns a receiver that is notified on every tick.
    ///
    /// `changed()` on the receiver fails once the driver has stopped.
    pub fn subscribe(&self) -> watch::Receiver<DateTime<Local>> {
        self.now_rx.clone()
    }

    /// Whether the timer task is still scheduled.
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancels the timer task. Equivalent to dropping the driver.
    pub fn stop(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!("event=refresh_stop module=refresh status=ok");
        }
    }
}

impl Drop for RefreshDriver {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run_fixed(
    now_tx: watch::Sender<DateTime<Local>>,
    clock: Arc<dyn Clock>,
    interval: Duration,
) {
    let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        if !publish(&now_tx, clock.as_ref()) {
            return;
        }
    }
}

async fn run_midnight(
    now_tx: watch::Sender<DateTime<Local>>,
    clock: Arc<dyn Clock>,
    cap: Duration,
) {
    loop {
        let now = clock.now();
        let until_midnight = (next_midnight(&now) - now)
            .to_std()
            .unwrap_or(Duration::ZERO);
        tokio::time::sleep(until_midnight.min(cap)).await;
        if !publish(&now_tx, clock.as_ref()) {
            return;
        }
    }
}

fn publish(now_tx: &watch::Sender<DateTime<Local>>, clock: &dyn Clock) -> bool {
    let now = clock.now();
    debug!("event=refresh_tick module=refresh status=ok now={}", now.to_rfc3339());
    now_tx.send(now).is_ok()
}
