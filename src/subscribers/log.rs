//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogNotifier`] prints every delivery it receives to stdout in a
//! human-readable format. Primarily useful for development, debugging, and
//! examples; the bus itself never logs.
//!
//! ## Output format
//! ```text
//! [notify] kind=printer topic=orders payload=u64(42)
//! [notify] kind=printer topic=orders payload=<opaque>
//! ```

use async_trait::async_trait;

use super::{Notifiable, Payload};

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Registers under the given kind and
/// prints each delivery, rendering a few common payload types and falling back
/// to `<opaque>` for everything else.
///
/// Not intended for production use - implement a custom [`Notifiable`] for
/// structured logging or metrics collection.
pub struct LogNotifier {
    kind: String,
}

impl LogNotifier {
    /// Creates a logger that registers under `kind`.
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new("log")
    }
}

#[async_trait]
impl Notifiable for LogNotifier {
    fn kind(&self) -> &str {
        &self.kind
    }

    async fn notify(&self, topic: &str, payload: Payload) {
        let rendered = if let Some(v) = payload.downcast_ref::<&str>() {
            format!("str({v})")
        } else if let Some(v) = payload.downcast_ref::<String>() {
            format!("string({v})")
        } else if let Some(v) = payload.downcast_ref::<u64>() {
            format!("u64({v})")
        } else if let Some(v) = payload.downcast_ref::<i64>() {
            format!("i64({v})")
        } else {
            "<opaque>".to_string()
        };
        println!("[notify] kind={} topic={topic} payload={rendered}", self.kind);
    }
}
