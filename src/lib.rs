//! # notibus
//!
//! **Notibus** is an in-process publish/subscribe event bus for Rust.
//!
//! It maps named topics to subscriber callbacks and decouples event producers
//! from consumers inside one process - no network, no persistence. Subscribers
//! choose per registration how they are delivered to: inline with the
//! publisher, on their own spawned task, optionally serialized per handler,
//! and optionally one-shot.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
//!  │ publisher 1 │   │ publisher 2 │   │ subscribe / │
//!  │  publish()  │   │  publish()  │   │ unsubscribe │
//!  └──────┬──────┘   └──────┬──────┘   └──────┬──────┘
//!         ▼                 ▼                 ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  EventBus                                                 │
//! │  - HandlerTable (topic → kind → Handler), one bus lock    │
//! │  - PendingDeliveries (outstanding spawned work counter)   │
//! └──────┬─────────────────────┬─────────────────────┬────────┘
//!        │ inline              │ spawned             │ spawned, transactional
//!        ▼                     ▼                     ▼
//!  notify() under the    tokio::spawn(notify)  tokio::spawn(notify) with the
//!  bus lock (blocks      (concurrent, any      handler's own lock held: one
//!  the publisher)        interleaving)         delivery at a time per handler
//! ```
//!
//! ### Delivery modes
//! | Registration            | Scheduling | One-shot | Ordering per handler      |
//! |-------------------------|------------|----------|---------------------------|
//! | [`EventBus::subscribe`]            | inline     | no       | total (runs under bus lock) |
//! | [`EventBus::subscribe_async`]      | spawned    | no       | only if `transactional`   |
//! | [`EventBus::subscribe_once`]       | inline     | yes      | single delivery           |
//! | [`EventBus::subscribe_once_async`] | spawned    | yes      | single delivery           |
//!
//! No ordering is guaranteed across different handlers or different topics.
//!
//! ## Guarantees
//! - At most one handler per (topic, kind): re-subscribing under the same
//!   [`Notifiable::kind`] replaces the previous registration, new flags win.
//! - Publish snapshots the handler set up front; concurrent subscribe and
//!   unsubscribe calls never affect deliveries already in flight.
//! - A one-shot handler leaves the table atomically with being published to;
//!   a concurrent publish cannot redeliver to it.
//! - [`EventBus::wait_async`] completes once every spawned delivery that was
//!   outstanding when it was called has finished.
//! - The bus never catches panics and never retries; failure handling belongs
//!   to the subscriber's own `notify`.
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogNotifier`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use notibus::{EventBus, Notifiable, Payload};
//!
//! struct Printer;
//!
//! #[async_trait]
//! impl Notifiable for Printer {
//!     fn kind(&self) -> &str {
//!         "printer"
//!     }
//!
//!     async fn notify(&self, topic: &str, payload: Payload) {
//!         if let Some(n) = payload.downcast_ref::<u64>() {
//!             println!("[{topic}] got {n}");
//!         }
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let bus = EventBus::new();
//!     let printer = Arc::new(Printer);
//!
//!     bus.subscribe_async("orders", printer.clone(), false).await;
//!     bus.publish("orders", Arc::new(42u64)).await;
//!
//!     // drain spawned deliveries before shutting down
//!     bus.wait_async().await;
//!     bus.unsubscribe("orders", printer.as_ref()).await.unwrap();
//! }
//! ```

mod bus;
mod error;
mod subscribers;

// ---- Public re-exports ----

pub use bus::EventBus;
pub use error::BusError;
pub use subscribers::{Notifiable, Payload};

// Optional: expose a simple built-in logging subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogNotifier;
