//! # Subscriber capability trait.
//!
//! Provides [`Notifiable`], the extension point a consumer implements to
//! receive deliveries from the [`EventBus`](crate::EventBus).
//!
//! Each subscriber supplies:
//! - **A stable identity** ([`Notifiable::kind`]) used as the deduplication
//!   key within a topic: at most one handler per (topic, kind) pair exists at
//!   any time, and re-subscribing under the same kind replaces the previous
//!   registration.
//! - **A notification entry point** ([`Notifiable::notify`]) invoked with the
//!   exact topic and payload passed to `publish`.
//!
//! The bus never owns a subscriber's lifetime; it holds an `Arc` reference
//! purely for dispatch.
//!
//! ## Rules
//! - An inline (synchronous) handler runs while the bus-wide lock is held: it
//!   blocks the publisher and all other bus operations until it returns, and
//!   it must not call back into the same bus (that deadlocks).
//! - A spawned (asynchronous) handler runs on its own task; when registered as
//!   transactional, `notify` is never called concurrently with itself for the
//!   same handler.
//! - The bus does not catch panics. An inline handler panic propagates to the
//!   publisher; a spawned handler panic terminates that delivery task only.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use notibus::{Notifiable, Payload};
//!
//! struct Mailer;
//!
//! #[async_trait]
//! impl Notifiable for Mailer {
//!     fn kind(&self) -> &str {
//!         "mailer"
//!     }
//!
//!     async fn notify(&self, topic: &str, payload: Payload) {
//!         if let Some(order_id) = payload.downcast_ref::<u64>() {
//!             println!("[{topic}] sending mail for order {order_id}");
//!         }
//!     }
//! }
//! ```

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

/// Opaque payload handed from `publish` to each subscriber.
///
/// Cheap to clone; one bus instance carries differently-typed payloads on
/// different topics. Receivers downcast to the type they expect:
///
/// ```rust
/// use notibus::Payload;
/// use std::sync::Arc;
///
/// let payload: Payload = Arc::new(42u32);
/// assert_eq!(payload.downcast_ref::<u32>(), Some(&42));
/// assert_eq!(payload.downcast_ref::<String>(), None);
/// ```
pub type Payload = Arc<dyn Any + Send + Sync>;

/// Subscriber capability: identity plus notification entry point.
///
/// ### Implementation requirements
/// - `kind()` must be stable for the lifetime of the subscription; it is the
///   key the bus uses for replacement and for `unsubscribe`.
/// - `notify` should handle its own errors; the bus has no retry or recovery
///   and does not inspect the outcome of a delivery.
/// - Inline subscribers must return promptly; they execute under the bus-wide
///   lock.
#[async_trait]
pub trait Notifiable: Send + Sync + 'static {
    /// Returns the stable identity string for this subscriber.
    ///
    /// Within one topic the bus keeps at most one handler per kind; a second
    /// subscription with the same kind replaces the first.
    fn kind(&self) -> &str;

    /// Delivers one published payload.
    ///
    /// Called with the exact `topic` and `payload` given to `publish`. For a
    /// transactional async registration, calls to the same handler never
    /// overlap in time; in every other mode overlap is permitted.
    async fn notify(&self, topic: &str, payload: Payload);
}
