//! # Outstanding-delivery bookkeeping.
//!
//! [`PendingDeliveries`] counts spawned deliveries that have not finished yet
//! and backs [`EventBus::wait_async`](crate::EventBus::wait_async): `wait`
//! completes once the count returns to zero.
//!
//! ## Rules
//! - One unit is registered (under the bus-wide lock) per spawned delivery,
//!   before its task is launched.
//! - The unit is released by dropping the [`DeliveryGuard`], which happens on
//!   normal completion and during panic unwind alike, so a panicking
//!   subscriber cannot wedge waiters.
//! - `wait` is not a fence against future work: publishes that start after
//!   the wait began may add new units it will also end up waiting for.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Notify;

/// Count of in-flight spawned deliveries, awaitable at zero.
#[derive(Default)]
pub(crate) struct PendingDeliveries {
    count: AtomicUsize,
    drained: Notify,
}

impl PendingDeliveries {
    /// Registers one unit of outstanding work.
    ///
    /// Consumes an `Arc` handle (clone one in) so the returned guard can
    /// release the unit on drop, wherever the delivery task ends up running.
    pub(crate) fn track(self: Arc<Self>) -> DeliveryGuard {
        self.count.fetch_add(1, Ordering::AcqRel);
        DeliveryGuard { pending: self }
    }

    /// Completes once the outstanding count reaches zero.
    ///
    /// Returns immediately when nothing is in flight.
    pub(crate) async fn wait(&self) {
        loop {
            // register interest before the check to avoid a lost wakeup
            let drained = self.drained.notified();
            if self.count.load(Ordering::Acquire) == 0 {
                return;
            }
            drained.await;
        }
    }

    fn release(&self) {
        if self.count.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.drained.notify_waiters();
        }
    }
}

/// RAII token for one spawned delivery.
pub(crate) struct DeliveryGuard {
    pending: Arc<PendingDeliveries>,
}

impl Drop for DeliveryGuard {
    fn drop(&mut self) {
        self.pending.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_wait_with_nothing_in_flight_returns_immediately() {
        let pending = Arc::new(PendingDeliveries::default());
        pending.wait().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_blocks_until_all_guards_dropped() {
        let pending = Arc::new(PendingDeliveries::default());
        let g1 = Arc::clone(&pending).track();
        let g2 = Arc::clone(&pending).track();

        let waiter = {
            let pending = Arc::clone(&pending);
            tokio::spawn(async move { pending.wait().await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!waiter.is_finished(), "two units still outstanding");

        drop(g1);
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!waiter.is_finished(), "one unit still outstanding");

        drop(g2);
        waiter.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_guard_released_on_panic_unwind() {
        let pending = Arc::new(PendingDeliveries::default());
        let guard = Arc::clone(&pending).track();

        let task = tokio::spawn(async move {
            let _guard = guard;
            panic!("subscriber blew up");
        });
        assert!(task.await.is_err());

        pending.wait().await;
    }
}
