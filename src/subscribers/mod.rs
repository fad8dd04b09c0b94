//! # Subscriber capability and built-in consumers.
//!
//! This module provides the [`Notifiable`] trait implemented by event
//! consumers, the opaque [`Payload`] they receive, and a built-in println
//! consumer for demos.
//!
//! ## Architecture
//! ```text
//! Delivery flow:
//!   publisher ── publish(topic, payload) ──► EventBus
//!                                               │ lookup handlers for topic
//!                      ┌────────────────────────┼─────────────────────────┐
//!                      ▼                        ▼                         ▼
//!              inline handler           spawned handler          spawned handler
//!           notify() under the       notify() on its own      (transactional: calls
//!             bus-wide lock             tokio task              serialized per handler)
//! ```
//!
//! ## Implementing a subscriber
//! ```rust
//! use async_trait::async_trait;
//! use notibus::{Notifiable, Payload};
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl Notifiable for Audit {
//!     fn kind(&self) -> &str { "audit" }
//!
//!     async fn notify(&self, topic: &str, payload: Payload) {
//!         if let Some(msg) = payload.downcast_ref::<&str>() {
//!             // append to the audit trail, etc.
//!             let _ = (topic, msg);
//!         }
//!     }
//! }
//! ```

#[cfg(feature = "logging")]
mod log;
mod notifiable;

#[cfg(feature = "logging")]
pub use log::LogNotifier;
pub use notifiable::{Notifiable, Payload};
