// Store module — in-memory registry partitioned by message status

pub mod registry;

pub use registry::{MessageStore, StoreStats, ID_PREFIX};
