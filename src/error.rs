//! Error types used by the bus.
//!
//! The bus exposes a single error condition: [`BusError::NotFound`], returned
//! by `unsubscribe` when no handler is registered for the given (topic, kind)
//! pair. Every other operation — the subscribe variants, `publish`,
//! `wait_async` — is total and cannot fail from the bus's own logic; any
//! failure during delivery originates inside a subscriber's `notify`
//! implementation and is that subscriber's responsibility.

use thiserror::Error;

/// # Errors produced by the event bus.
///
/// Non-fatal and reportable: callers may ignore or log a `NotFound` from
/// `unsubscribe` when idempotent removal is the intent.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BusError {
    /// No handler is registered under this topic for this subscriber kind.
    ///
    /// Raised when the topic has no entry at all, or when the topic exists but
    /// holds no handler for the given kind (including after a one-shot handler
    /// has already been consumed by a publish).
    #[error("no handler for topic {topic:?} with kind {kind:?}")]
    NotFound {
        /// The topic the caller tried to unsubscribe from.
        topic: String,
        /// The subscriber identity (`Notifiable::kind`) that was not found.
        kind: String,
    },
}

impl BusError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use notibus::BusError;
    ///
    /// let err = BusError::NotFound { topic: "t".into(), kind: "net".into() };
    /// assert_eq!(err.as_label(), "handler_not_found");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BusError::NotFound { .. } => "handler_not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_names_both_keys() {
        let err = BusError::NotFound {
            topic: "orders".into(),
            kind: "mailer".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("orders"), "missing topic in: {msg}");
        assert!(msg.contains("mailer"), "missing kind in: {msg}");
    }
}
