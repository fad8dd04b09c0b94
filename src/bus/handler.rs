//! # Subscription record.
//!
//! A [`Handler`] is one row of the bus registry: the subscriber reference,
//! the one-shot flag, the delivery mode, and the per-handler lock that backs
//! transactional serialization.
//!
//! Handlers are immutable after creation. A re-subscription under the same
//! (topic, kind) replaces the record wholesale; the only other lifecycle
//! transitions are removal by `unsubscribe` or by one-shot consumption.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::subscribers::Notifiable;

/// How deliveries to a handler are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeliveryMode {
    /// `notify` runs inline with the publisher, under the bus-wide lock.
    Inline,
    /// `notify` runs on its own spawned task; the publisher does not await it.
    ///
    /// With `transactional: true`, successive deliveries to this handler are
    /// serialized on the handler's own lock (no two overlap in time). Without
    /// it, any number of deliveries may run concurrently.
    Spawned {
        transactional: bool,
    },
}

/// One subscription: a receiver plus its delivery flags.
pub(crate) struct Handler {
    /// The subscriber capability. The bus holds a reference for dispatch only.
    pub(crate) receiver: Arc<dyn Notifiable>,
    /// Remove this handler from the live table on its first publish.
    pub(crate) once: bool,
    /// Inline vs spawned scheduling.
    pub(crate) mode: DeliveryMode,
    /// Per-handler exclusive lock, acquired only for transactional deliveries.
    ///
    /// Shared between the live table entry and every publish snapshot that
    /// captured it, so serialization holds across publishes. `Arc` so the
    /// owned guard can travel into the spawned delivery task.
    pub(crate) delivery_lock: Arc<Mutex<()>>,
}

impl Handler {
    pub(crate) fn new(receiver: Arc<dyn Notifiable>, once: bool, mode: DeliveryMode) -> Self {
        Self {
            receiver,
            once,
            mode,
            delivery_lock: Arc::new(Mutex::new(())),
        }
    }

    /// The subscriber identity this handler is keyed under.
    pub(crate) fn kind(&self) -> &str {
        self.receiver.kind()
    }
}
