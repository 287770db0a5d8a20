// SPDX-License-Identifier: MPL-2.0
//! Tokio driver that runs one [`Lifecycle`] on its own timer.
//!
//! Hosts that do not have an Iced subscription to tick notifications can hand
//! a lifecycle to [`Countdown::spawn`]. The driver ticks it at a fixed
//! interval, publishes a [`Snapshot`] after every change, and stops once the
//! notification is closed. Dropping the [`Countdown`] cancels everything
//! synchronously: the close callback can no longer fire once `drop` returns.

use super::lifecycle::{Lifecycle, Phase, Trigger};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// What a rendering surface needs to draw the notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    pub remaining_fraction: f32,
}

impl Snapshot {
    fn of(lifecycle: &Lifecycle) -> Self {
        Self {
            phase: lifecycle.phase(),
            remaining_fraction: lifecycle.remaining_fraction(),
        }
    }
}

struct Shared {
    lifecycle: Lifecycle,
    snapshots: watch::Sender<Snapshot>,
}

impl Shared {
    fn publish(&self) {
        self.snapshots.send_replace(Snapshot::of(&self.lifecycle));
    }
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    // A panicking close callback must not wedge teardown.
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A lifecycle running on a tokio task.
///
/// The close callback runs on the driver task while it holds the internal
/// lock, so it must not call back into the same `Countdown`.
pub struct Countdown {
    shared: Arc<Mutex<Shared>>,
    snapshots: watch::Receiver<Snapshot>,
    task: JoinHandle<()>,
}

impl Countdown {
    /// Current instant on the runtime clock.
    ///
    /// Stamp lifecycles with this so they agree with the driver when the
    /// tokio clock is paused.
    #[must_use]
    pub fn clock_now() -> std::time::Instant {
        Instant::now().into_std()
    }

    /// Spawns the driver on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn(lifecycle: Lifecycle, tick_interval: Duration) -> Self {
        let (sender, receiver) = watch::channel(Snapshot::of(&lifecycle));
        let shared = Arc::new(Mutex::new(Shared {
            lifecycle,
            snapshots: sender,
        }));

        let task_shared = Arc::clone(&shared);
        let task = tokio::spawn(async move {
            let mut ticks = time::interval(tick_interval);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                let closed = {
                    let mut shared = lock(&task_shared);
                    shared.lifecycle.advance(Countdown::clock_now());
                    shared.publish();
                    shared.lifecycle.is_closed()
                };
                if closed {
                    break;
                }
            }
        });

        Self {
            shared,
            snapshots: receiver,
            task,
        }
    }

    /// Requests dismissal; see [`Lifecycle::request_dismiss`].
    pub fn dismiss(&self, trigger: Trigger) -> bool {
        let mut shared = lock(&self.shared);
        let accepted = shared
            .lifecycle
            .request_dismiss(trigger, Countdown::clock_now());
        // A refused request may still have recorded an unticked expiry.
        shared.publish();
        accepted
    }

    /// Latest published state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        *self.snapshots.borrow()
    }

    /// Receiver that wakes on every published change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Returns whether the driver task has stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        lock(&self.shared).lifecycle.teardown();
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Notification;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TICK: Duration = Duration::from_millis(50);
    const EXIT: Duration = Duration::from_millis(300);

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn start(duration_ms: u64) -> (Countdown, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let signal = Arc::clone(&count);
        let lifecycle = Lifecycle::new(
            Notification::info("uploading").with_duration(ms(duration_ms)),
            EXIT,
            Countdown::clock_now(),
        )
        .with_on_close(move || {
            signal.fetch_add(1, Ordering::SeqCst);
        });
        (Countdown::spawn(lifecycle, TICK), count)
    }

    #[tokio::test(start_paused = true)]
    async fn expires_then_closes_once() {
        let (countdown, count) = start(5000);

        time::sleep(ms(4990)).await;
        assert_eq!(countdown.snapshot().phase, Phase::Active);
        assert!(countdown.snapshot().remaining_fraction > 0.0);

        time::sleep(ms(20)).await;
        assert_eq!(countdown.snapshot().phase, Phase::Closing);

        time::sleep(ms(280)).await;
        assert_eq!(countdown.snapshot().phase, Phase::Closing);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        time::sleep(ms(30)).await;
        assert_eq!(countdown.snapshot().phase, Phase::Closed);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        time::sleep(ms(1000)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(countdown.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_dismiss_signals_once() {
        let (countdown, count) = start(5000);

        time::sleep(ms(1000)).await;
        assert!(countdown.dismiss(Trigger::CloseButton));
        assert!(!countdown.dismiss(Trigger::CloseButton));
        assert_eq!(countdown.snapshot().phase, Phase::Closing);

        time::sleep(ms(400)).await;
        assert_eq!(countdown.snapshot().phase, Phase::Closed);

        time::sleep(ms(5000)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_waits_for_dismissal() {
        let (countdown, count) = start(0);

        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(countdown.snapshot().phase, Phase::Active);
        assert_eq!(countdown.snapshot().remaining_fraction, 1.0);

        assert!(countdown.dismiss(Trigger::Caller));
        let mut snapshots = countdown.subscribe();
        snapshots
            .wait_for(|snapshot| snapshot.phase == Phase::Closed)
            .await
            .expect("driver stopped before closing");
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_mid_active_cancels_signal() {
        let (countdown, count) = start(100);

        time::sleep(ms(50)).await;
        drop(countdown);

        time::sleep(ms(2000)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_mid_closing_cancels_signal() {
        let (countdown, count) = start(5000);

        time::sleep(ms(100)).await;
        assert!(countdown.dismiss(Trigger::Escape));
        time::sleep(ms(100)).await;
        drop(countdown);

        time::sleep(ms(2000)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
