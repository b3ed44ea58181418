//! Snapshot persistence.

mod firestore;

pub use firestore::FirestoreStore;
