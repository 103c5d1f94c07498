//! In-memory backend for the CampusSync store.
//!
//! Holds the session identity, the event collection and the registration
//! ledger behind one lock. Nothing is persisted; a restart reseeds.

mod store;

pub use store::MemoryStore;
