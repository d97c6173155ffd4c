//! `backoffice-core` — the generic entity-store engine.
//!
//! One [`EntityStore`] instance per entity kind (inventory item, staff member,
//! task) forms the application's entire data layer. Stores are in-memory,
//! session-scoped, and notify subscribed consumers synchronously on every
//! mutation. This crate contains **no schema knowledge**; entity kinds are
//! declared in their own crates via [`EntitySchema`].

pub mod clock;
pub mod error;
pub mod id;
pub mod record;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{StoreError, StoreResult};
pub use id::RecordId;
pub use record::{EntitySchema, Record};
pub use store::{ChangeListener, EntityStore};
