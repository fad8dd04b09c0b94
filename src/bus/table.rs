//! # Topic table: the live subscription registry.
//!
//! [`HandlerTable`] maps topic name → subscriber kind → [`Handler`]. Keys are
//! unique at both levels; inserting under an occupied (topic, kind) pair
//! replaces the previous handler and the new registration's flags win.
//!
//! The table itself is not synchronized - the bus wraps it in its single
//! exclusive lock, and every mutation and snapshot happens under that lock.
//!
//! ## Rules
//! - Insertion order is irrelevant; delivery order within a topic is
//!   unspecified.
//! - [`HandlerTable::snapshot`] is the publish read path: it captures the
//!   point-in-time handler set for a topic and removes one-shot entries from
//!   the live table in the same critical section, so no concurrent publish
//!   can capture a one-shot handler twice.
//! - Removing the last handler of a topic prunes the topic entry, so
//!   `NotFound` reporting does not distinguish "topic never existed" from
//!   "topic emptied out".

use std::collections::HashMap;
use std::sync::Arc;

use crate::bus::handler::Handler;
use crate::error::BusError;

/// Live registry of subscriptions, keyed topic → kind.
#[derive(Default)]
pub(crate) struct HandlerTable {
    topics: HashMap<String, HashMap<String, Arc<Handler>>>,
}

impl HandlerTable {
    /// Registers `handler` under `topic`, keyed by its receiver kind.
    ///
    /// Overwrites any existing handler for the same (topic, kind) pair.
    pub(crate) fn insert(&mut self, topic: &str, handler: Handler) {
        let kind = handler.kind().to_string();
        self.topics
            .entry(topic.to_string())
            .or_default()
            .insert(kind, Arc::new(handler));
    }

    /// Removes the handler keyed by (topic, kind).
    ///
    /// Returns [`BusError::NotFound`] when the topic has no entry or the topic
    /// holds no handler for `kind`.
    pub(crate) fn remove(&mut self, topic: &str, kind: &str) -> Result<(), BusError> {
        let not_found = || BusError::NotFound {
            topic: topic.to_string(),
            kind: kind.to_string(),
        };

        let handlers = self.topics.get_mut(topic).ok_or_else(not_found)?;
        handlers.remove(kind).ok_or_else(not_found)?;
        if handlers.is_empty() {
            self.topics.remove(topic);
        }
        Ok(())
    }

    /// Captures the point-in-time handler set for one publish.
    ///
    /// Returns `None` when the topic has no handlers (publish is then a
    /// no-op). One-shot handlers are dropped from the live table as they are
    /// captured: removal is tied to being published to, not to delivery
    /// outcome, and must happen before the publish loop can release the bus
    /// lock for a transactional hand-off.
    ///
    /// The returned records are shared (`Arc`), so later table mutations
    /// cannot affect the captured set, while the per-handler delivery lock
    /// stays the same one the live entry used.
    pub(crate) fn snapshot(&mut self, topic: &str) -> Option<Vec<Arc<Handler>>> {
        let handlers = self.topics.get_mut(topic)?;
        if handlers.is_empty() {
            return None;
        }

        let captured: Vec<Arc<Handler>> = handlers.values().cloned().collect();
        handlers.retain(|_, h| !h.once);
        if handlers.is_empty() {
            self.topics.remove(topic);
        }
        Some(captured)
    }

    /// Number of handlers currently registered under `topic`.
    #[allow(dead_code)]
    pub(crate) fn topic_len(&self, topic: &str) -> usize {
        self.topics.get(topic).map_or(0, HashMap::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::handler::DeliveryMode;
    use crate::subscribers::{Notifiable, Payload};
    use async_trait::async_trait;

    struct Probe(&'static str);

    #[async_trait]
    impl Notifiable for Probe {
        fn kind(&self) -> &str {
            self.0
        }
        async fn notify(&self, _topic: &str, _payload: Payload) {}
    }

    fn handler(kind: &'static str, once: bool) -> Handler {
        Handler::new(Arc::new(Probe(kind)), once, DeliveryMode::Inline)
    }

    #[test]
    fn test_duplicate_kind_replaces_previous() {
        let mut table = HandlerTable::default();
        table.insert("t", handler("net", false));
        table.insert("t", handler("net", true));

        assert_eq!(table.topic_len("t"), 1);
        let captured = table.snapshot("t").unwrap();
        assert_eq!(captured.len(), 1);
        assert!(captured[0].once, "second subscription's flags must win");
    }

    #[test]
    fn test_remove_unknown_topic_is_not_found() {
        let mut table = HandlerTable::default();
        let err = table.remove("nope", "net").unwrap_err();
        assert_eq!(err.as_label(), "handler_not_found");
    }

    #[test]
    fn test_remove_unknown_kind_is_not_found() {
        let mut table = HandlerTable::default();
        table.insert("t", handler("net", false));
        assert!(table.remove("t", "other").is_err());
        assert!(table.remove("t", "net").is_ok());
        // repeating the removal reports NotFound again
        assert!(table.remove("t", "net").is_err());
    }

    #[test]
    fn test_snapshot_reaps_once_handlers() {
        let mut table = HandlerTable::default();
        table.insert("t", handler("keep", false));
        table.insert("t", handler("drop", true));

        let captured = table.snapshot("t").unwrap();
        assert_eq!(captured.len(), 2, "first publish sees both");
        assert_eq!(table.topic_len("t"), 1, "once handler left the live table");

        let captured = table.snapshot("t").unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].kind(), "keep");
    }

    #[test]
    fn test_snapshot_empty_topic_is_none() {
        let mut table = HandlerTable::default();
        assert!(table.snapshot("t").is_none());

        // a fully reaped topic behaves like one that never existed
        table.insert("t", handler("drop", true));
        assert!(table.snapshot("t").is_some());
        assert!(table.snapshot("t").is_none());
        assert!(table.remove("t", "drop").is_err());
    }
}
