//! # The event bus: registry plus publish/dispatch.
//!
//! [`EventBus`] owns the live [`HandlerTable`] behind a single exclusive lock
//! and the outstanding-delivery count behind [`wait_async`](EventBus::wait_async).
//!
//! ## Publish algorithm
//! ```text
//! publish(topic, payload)
//!   ├─ lock the table
//!   ├─ snapshot handlers for topic (one-shot entries leave the live table here)
//!   │    └─ none? → return (no-op)
//!   └─ for each captured handler (order unspecified):
//!        ├─ Inline      → notify() inline, table lock still held
//!        └─ Spawned     → register one pending unit
//!             ├─ transactional? unlock table → lock handler → relock table
//!             └─ tokio::spawn(notify); on completion the task releases the
//!                handler lock (if held) and the pending unit
//! ```
//!
//! ## Locking rules
//! - Table mutation (subscribe, unsubscribe, one-shot reaping) and inline
//!   delivery happen only under the bus-wide lock; inline subscribers
//!   therefore serialize against every other bus operation.
//! - A spawned `notify` runs outside the lock; only its bookkeeping is inside.
//! - The transactional hand-off drops the bus lock while waiting on the
//!   handler's own lock, so a slow transactional subscriber stalls only its
//!   own future deliveries, never unrelated topics.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::bus::handler::{DeliveryMode, Handler};
use crate::bus::pending::PendingDeliveries;
use crate::bus::table::HandlerTable;
use crate::error::BusError;
use crate::subscribers::{Notifiable, Payload};

/// In-process publish/subscribe bus.
///
/// Topics are plain strings; within a topic, subscribers are keyed by their
/// [`Notifiable::kind`] and a re-subscription under the same kind replaces
/// the previous one. See the [crate docs](crate) for the delivery modes.
///
/// The bus is `Send + Sync`; share it behind an `Arc` between publishers and
/// managing code.
#[derive(Default)]
pub struct EventBus {
    table: Mutex<HandlerTable>,
    pending: Arc<PendingDeliveries>,
}

impl EventBus {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an inline, persistent handler for `topic`.
    ///
    /// Replaces any existing handler for the same (topic, `receiver.kind()`).
    pub async fn subscribe(&self, topic: &str, receiver: Arc<dyn Notifiable>) {
        self.register(topic, Handler::new(receiver, false, DeliveryMode::Inline))
            .await;
    }

    /// Registers a spawned (asynchronous), persistent handler for `topic`.
    ///
    /// With `transactional = true`, deliveries to this handler are serialized:
    /// no two run concurrently, across publishes. Replaces any existing
    /// handler for the same (topic, kind).
    pub async fn subscribe_async(
        &self,
        topic: &str,
        receiver: Arc<dyn Notifiable>,
        transactional: bool,
    ) {
        self.register(
            topic,
            Handler::new(receiver, false, DeliveryMode::Spawned { transactional }),
        )
        .await;
    }

    /// Registers an inline, one-shot handler for `topic`.
    ///
    /// The handler leaves the table on the first publish that captures it,
    /// independent of delivery outcome.
    pub async fn subscribe_once(&self, topic: &str, receiver: Arc<dyn Notifiable>) {
        self.register(topic, Handler::new(receiver, true, DeliveryMode::Inline))
            .await;
    }

    /// Registers a spawned, one-shot, non-transactional handler for `topic`.
    pub async fn subscribe_once_async(&self, topic: &str, receiver: Arc<dyn Notifiable>) {
        self.register(
            topic,
            Handler::new(
                receiver,
                true,
                DeliveryMode::Spawned {
                    transactional: false,
                },
            ),
        )
        .await;
    }

    /// Removes the handler keyed by (`topic`, `receiver.kind()`).
    ///
    /// # Errors
    /// [`BusError::NotFound`] when no such handler is registered. Non-fatal;
    /// callers may ignore or log it.
    pub async fn unsubscribe(
        &self,
        topic: &str,
        receiver: &dyn Notifiable,
    ) -> Result<(), BusError> {
        self.table.lock().await.remove(topic, receiver.kind())
    }

    /// Publishes `payload` to every handler registered under `topic`.
    ///
    /// A topic with no handlers is a no-op, not an error. Inline handlers run
    /// before this call returns (and block it); spawned handlers continue in
    /// the background - use [`wait_async`](Self::wait_async) to await them.
    pub async fn publish(&self, topic: &str, payload: Payload) {
        let mut table = self.table.lock().await;
        let Some(captured) = table.snapshot(topic) else {
            return;
        };
        let topic_shared: Arc<str> = Arc::from(topic);

        for handler in captured {
            match handler.mode {
                DeliveryMode::Inline => {
                    handler.receiver.notify(topic, payload.clone()).await;
                }
                DeliveryMode::Spawned { transactional } => {
                    let unit = Arc::clone(&self.pending).track();
                    let permit = if transactional {
                        // Hand-off: wait for the previous delivery to this
                        // handler without stalling the rest of the bus.
                        drop(table);
                        let permit = Arc::clone(&handler.delivery_lock).lock_owned().await;
                        table = self.table.lock().await;
                        Some(permit)
                    } else {
                        None
                    };

                    let receiver = Arc::clone(&handler.receiver);
                    let topic = Arc::clone(&topic_shared);
                    let payload = payload.clone();
                    tokio::spawn(async move {
                        receiver.notify(&topic, payload).await;
                        // unit and permit are released here, on unwind too
                        drop(permit);
                        drop(unit);
                    });
                }
            }
        }
    }

    /// Completes once every spawned delivery outstanding at the time of the
    /// call has finished.
    ///
    /// Publishes that start after the wait began may add further work this
    /// call also ends up waiting for; it is a drain point, not a fence.
    pub async fn wait_async(&self) {
        self.pending.wait().await;
    }

    async fn register(&self, topic: &str, handler: Handler) {
        self.table.lock().await.insert(topic, handler);
    }
}
