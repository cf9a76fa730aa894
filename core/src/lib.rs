// ChatApp Core — Message Registry
//
// Accepts composed messages, gives each a sequential id and a content-derived
// fingerprint, files it as Sent, Stored (draft) or Disregarded, and answers
// the lookups the UI layer needs. Nothing here touches the network or disk.

pub mod identity;
pub mod message;
pub mod report;
pub mod store;

use thiserror::Error;

pub use identity::{SenderIdentity, SenderProfile};
pub use message::{Message, MessageStatus};
pub use store::{MessageStore, StoreStats};

// ============================================================================
// ERROR TYPES
// ============================================================================

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatAppError {
    /// A status label that is not one of Sent, Stored or Disregarded.
    #[error("Unrecognized status: {0}")]
    UnrecognizedStatus(String),
}
