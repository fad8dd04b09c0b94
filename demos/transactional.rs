//! # Example: transactional
//!
//! Demonstrates per-handler serialization of spawned deliveries.
//!
//! Two spawned subscribers receive the same burst of publishes. The
//! transactional one processes them strictly one at a time, in publish order;
//! the plain one lets deliveries overlap and finish in any order.
//!
//! ## Flow
//! ```text
//! publish("jobs", 0..4)   (back to back, publisher never blocks on delivery)
//!     ├─► "serial"   (spawned, transactional)  0 ─► 1 ─► 2 ─► 3
//!     └─► "parallel" (spawned)                 0, 1, 2, 3 interleaved
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example transactional
//! ```

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use notibus::{EventBus, Notifiable, Payload};

/// Slow worker: sleeps inside notify so overlap (or its absence) is visible.
struct Worker {
    name: &'static str,
}

#[async_trait]
impl Notifiable for Worker {
    fn kind(&self) -> &str {
        self.name
    }

    async fn notify(&self, _topic: &str, payload: Payload) {
        let n = payload.downcast_ref::<u64>().copied().unwrap_or_default();
        println!("[{}] start job {n}", self.name);
        tokio::time::sleep(Duration::from_millis(200)).await;
        println!("[{}] done  job {n}", self.name);
    }
}

#[tokio::main]
async fn main() {
    let bus = EventBus::new();

    bus.subscribe_async("jobs", Arc::new(Worker { name: "serial" }), true)
        .await;
    bus.subscribe_async("jobs", Arc::new(Worker { name: "parallel" }), false)
        .await;

    for i in 0..4u64 {
        bus.publish("jobs", Arc::new(i)).await;
    }

    bus.wait_async().await;
}
