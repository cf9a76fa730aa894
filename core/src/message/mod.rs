// Message module — the registry's record type and its fingerprint

pub mod fingerprint;
pub mod types;

pub use fingerprint::{derive_fingerprint, MAX_FINGERPRINT_DIGITS};
pub use types::{Message, MessageStatus, PREVIEW_LEN};
