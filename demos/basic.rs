//! # Example: basic
//!
//! One topic, three subscribers, three delivery modes.
//!
//! Shows how to:
//! - Implement the [`Notifiable`] trait.
//! - Register inline, one-shot, and spawned subscribers on the same topic.
//! - Drain spawned deliveries with [`EventBus::wait_async`].
//!
//! ## Flow
//! ```text
//! publish("test", i)  (8 times, 1/s)
//!     ├─► Net        (inline)    every publish, before publish() returns
//!     ├─► OnceNet    (one-shot)  first publish only
//!     └─► AsyncNet   (spawned)   every publish, in the background
//!
//! wait_async()  ──► returns once the spawned deliveries are done
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic
//! ```

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use notibus::{EventBus, Notifiable, Payload};

/// Inline subscriber: runs with the publisher.
struct Net;

#[async_trait]
impl Notifiable for Net {
    fn kind(&self) -> &str {
        "net"
    }

    async fn notify(&self, topic: &str, payload: Payload) {
        let n = payload.downcast_ref::<u64>().copied().unwrap_or_default();
        println!("[inline]   topic={topic} payload={n}");
    }
}

/// One-shot subscriber: sees only the first publish.
struct OnceNet;

#[async_trait]
impl Notifiable for OnceNet {
    fn kind(&self) -> &str {
        "once-net"
    }

    async fn notify(&self, topic: &str, payload: Payload) {
        let n = payload.downcast_ref::<u64>().copied().unwrap_or_default();
        println!("[one-shot] topic={topic} payload={n}");
    }
}

/// Spawned subscriber: delivered on its own task.
struct AsyncNet;

#[async_trait]
impl Notifiable for AsyncNet {
    fn kind(&self) -> &str {
        "async-net"
    }

    async fn notify(&self, topic: &str, payload: Payload) {
        let n = payload.downcast_ref::<u64>().copied().unwrap_or_default();
        println!("[spawned]  topic={topic} payload={n}");
    }
}

#[tokio::main]
async fn main() {
    let bus = EventBus::new();

    bus.subscribe("test", Arc::new(Net)).await;
    bus.subscribe_once("test", Arc::new(OnceNet)).await;
    bus.subscribe_async("test", Arc::new(AsyncNet), false).await;

    for i in 0..8u64 {
        tokio::time::sleep(Duration::from_secs(1)).await;
        bus.publish("test", Arc::new(i)).await;
    }

    bus.wait_async().await;
}
