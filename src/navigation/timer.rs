//! Auto-advance timer
//!
//! A fixed-period ticker bound to the lifetime of the widget that owns it.
//! The lifecycle is encoded with statum states:
//!
//! ```text
//! AutoAdvanceTimer<Idle> ──start(on_tick)──► AutoAdvanceTimer<Running>
//!          ▲                                          │
//!          └──────────────── stop() ◄─────────────────┘
//! ```
//!
//! A running timer holds a [`DropGuard`] on its cancellation token, so
//! dropping it (a widget unmounting early) cancels the background task just
//! like an explicit `stop()`. No tick is delivered after cancellation.
//!
//! There is deliberately no pause/resume; a slideshow keeps advancing while
//! other UI sits on top of it.

use statum::{machine, state};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, info};

// Timer errors
#[derive(Debug, thiserror::Error)]
pub enum TimerError {
    #[error("Auto-advance period must be greater than zero")]
    ZeroPeriod,

    #[error("No tokio runtime available to drive the timer: {0}")]
    NoRuntime(String),
}

#[state]
#[derive(Debug, Clone)]
pub enum TimerState {
    Idle,
    Running,
}

#[machine]
#[derive(Debug)]
pub struct AutoAdvanceTimer<S: TimerState> {
    // Tick period
    period: Duration,

    // Token observed by the ticking task
    cancel: CancellationToken,

    // Cancels the token when a running timer is dropped
    guard: Option<DropGuard>,

    // Background ticking task
    task: Option<JoinHandle<()>>,
}

// Methods available in all states
impl<S: TimerState> AutoAdvanceTimer<S> {
    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl AutoAdvanceTimer<Idle> {
    pub fn create(period: Duration) -> Result<Self, TimerError> {
        if period.is_zero() {
            return Err(TimerError::ZeroPeriod);
        }
        debug!("Created auto-advance timer with {:?} period", period);
        Ok(Self::new(period, CancellationToken::new(), None, None))
    }

    /// Begins calling `on_tick` once per period.
    ///
    /// The first tick fires one full period after start. `on_tick` receives
    /// the 1-based tick count since this start.
    pub fn start<F>(mut self, mut on_tick: F) -> Result<AutoAdvanceTimer<Running>, TimerError>
    where
        F: FnMut(u64) + Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|e| TimerError::NoRuntime(e.to_string()))?;

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let period = self.period;

        let task = runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut ticks: u64 = 0;

            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        debug!("Auto-advance task cancelled after {} ticks", ticks);
                        break;
                    }
                    _ = ticker.tick() => {
                        if token.is_cancelled() {
                            break;
                        }
                        ticks += 1;
                        debug!("Auto-advance tick {}", ticks);
                        on_tick(ticks);
                    }
                }
            }
        });

        info!("Auto-advance timer started with {:?} period", period);
        self.guard = Some(cancel.clone().drop_guard());
        self.cancel = cancel;
        self.task = Some(task);
        Ok(self.transition())
    }
}

impl AutoAdvanceTimer<Running> {
    /// Cancels all future ticks synchronously
    pub fn stop(mut self) -> AutoAdvanceTimer<Idle> {
        self.cancel.cancel();
        self.guard = None;
        if let Some(task) = self.task.take() {
            task.abort();
        }
        info!("Auto-advance timer stopped");
        self.transition()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::sleep;

    fn ticking(period_ms: u64) -> (AutoAdvanceTimer<Running>, mpsc::UnboundedReceiver<u64>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let timer = AutoAdvanceTimer::create(Duration::from_millis(period_ms))
            .unwrap()
            .start(move |tick| {
                let _ = tx.send(tick);
            })
            .unwrap();
        (timer, rx)
    }

    #[test]
    fn zero_period_is_rejected() {
        assert!(matches!(
            AutoAdvanceTimer::create(Duration::ZERO),
            Err(TimerError::ZeroPeriod)
        ));
    }

    #[test]
    fn start_outside_runtime_fails() {
        let timer = AutoAdvanceTimer::create(Duration::from_millis(10)).unwrap();
        assert!(matches!(timer.start(|_| {}), Err(TimerError::NoRuntime(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_arrives_after_one_period() {
        let (_timer, mut rx) = ticking(5000);

        sleep(Duration::from_millis(4999)).await;
        assert!(rx.try_recv().is_err());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.try_recv().ok(), Some(1));

        sleep(Duration::from_millis(5000)).await;
        assert_eq!(rx.try_recv().ok(), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_future_ticks() {
        let (timer, mut rx) = ticking(1000);

        sleep(Duration::from_millis(1500)).await;
        assert_eq!(rx.try_recv().ok(), Some(1));

        let idle = timer.stop();
        assert!(idle.is_cancelled());

        sleep(Duration::from_millis(10_000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_a_running_timer_cancels_it() {
        let (timer, mut rx) = ticking(1000);
        drop(timer);

        sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_timer_can_be_restarted() {
        let (timer, mut rx) = ticking(1000);
        let idle = timer.stop();

        let (tx, mut restarted) = mpsc::unbounded_channel();
        let _running = idle
            .start(move |tick| {
                let _ = tx.send(tick);
            })
            .unwrap();

        sleep(Duration::from_millis(2500)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(restarted.try_recv().ok(), Some(1));
        assert_eq!(restarted.try_recv().ok(), Some(2));
    }
}
