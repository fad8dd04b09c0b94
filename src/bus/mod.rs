//! Bus core: registry, dispatch, and async bookkeeping.
//!
//! The only public API from this module is [`EventBus`]. Internal modules:
//! - [`handler`]: one subscription record (receiver, flags, delivery lock);
//! - [`table`]: the live topic → kind → handler registry and its publish
//!   snapshot;
//! - [`pending`]: outstanding spawned-delivery count behind `wait_async`;
//! - [`core`]: the `EventBus` orchestrating table, lock, and dispatch.

mod core;
mod handler;
mod pending;
mod table;

pub use core::EventBus;
