// Message registry — the single owner of every filed message
//
// Messages live in three partitions, one per status. All state sits behind
// one lock so the sequence counter and partition membership change together.

use std::sync::OnceLock;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::message::{Message, MessageStatus};

/// Prefix of every message id
pub const ID_PREFIX: &str = "MSG";

/// Demo messages for a seeded store, filed in this order
const SAMPLE_MESSAGES: [(&str, MessageStatus, &str); 5] = [
    ("Did you get the cake?", MessageStatus::Sent, "+27834557896"),
    (
        "Where are you? You are late! I have asked you to be on time.",
        MessageStatus::Stored,
        "+27838884567",
    ),
    ("Yohoooo, I am at your gate.", MessageStatus::Disregarded, "+27834484567"),
    ("It is dinner time !", MessageStatus::Sent, "0838884567"),
    ("Ok, I am leaving without you.", MessageStatus::Stored, "+27838884567"),
];

static GLOBAL: OnceLock<MessageStore> = OnceLock::new();

/// Partition sizes at one instant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub total: usize,
    pub sent: usize,
    pub stored: usize,
    pub disregarded: usize,
    /// Sequence number the next add will use
    pub next_sequence: u64,
}

struct Partitions {
    sent: Vec<Message>,
    stored: Vec<Message>,
    disregarded: Vec<Message>,
    /// Only ever increases, deletions included
    next_sequence: u64,
}

impl Partitions {
    fn new() -> Self {
        Self {
            sent: Vec::new(),
            stored: Vec::new(),
            disregarded: Vec::new(),
            next_sequence: 1,
        }
    }

    fn partition(&self, status: MessageStatus) -> &Vec<Message> {
        match status {
            MessageStatus::Sent => &self.sent,
            MessageStatus::Stored => &self.stored,
            MessageStatus::Disregarded => &self.disregarded,
        }
    }

    fn partition_mut(&mut self, status: MessageStatus) -> &mut Vec<Message> {
        match status {
            MessageStatus::Sent => &mut self.sent,
            MessageStatus::Stored => &mut self.stored,
            MessageStatus::Disregarded => &mut self.disregarded,
        }
    }

    /// Sent, then Stored, then Disregarded, insertion order within each
    fn iter(&self) -> impl Iterator<Item = &Message> {
        self.sent
            .iter()
            .chain(self.stored.iter())
            .chain(self.disregarded.iter())
    }

    /// First message in traversal order matching `pred`
    fn locate(&self, pred: impl Fn(&Message) -> bool) -> Option<(MessageStatus, usize)> {
        MessageStatus::ALL.into_iter().find_map(|status| {
            self.partition(status)
                .iter()
                .position(&pred)
                .map(|index| (status, index))
        })
    }

    fn len(&self) -> usize {
        self.sent.len() + self.stored.len() + self.disregarded.len()
    }
}

/// Case-insensitive comparison without allocating
fn same_key(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// In-memory registry of messages partitioned by status.
///
/// Mutations (`add`, `take_by_key`, `clear`) hold the write lock for their
/// whole duration; queries hold the read lock and hand back owned copies, so
/// a returned list is a snapshot that later mutations do not touch.
pub struct MessageStore {
    inner: RwLock<Partitions>,
}

impl MessageStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Partitions::new()),
        }
    }

    /// Process-wide store, created on first access.
    ///
    /// Prefer an explicit `MessageStore::new()` handed to whoever needs it;
    /// this exists for callers that cannot thread a handle through.
    pub fn global() -> &'static MessageStore {
        GLOBAL.get_or_init(MessageStore::new)
    }

    /// Create a store pre-populated with the five sample messages
    /// (`MSG001`..`MSG005`: two Sent, two Stored, one Disregarded)
    pub fn with_sample_messages() -> Self {
        let store = Self::new();
        for (content, status, recipient) in SAMPLE_MESSAGES {
            store.add(content, status, recipient);
        }
        store
    }

    /// File a new message under `status` and return a copy of it.
    ///
    /// The id is allocated, the message built and the partition extended
    /// under a single write lock.
    pub fn add(
        &self,
        content: impl Into<String>,
        status: MessageStatus,
        recipient: impl Into<String>,
    ) -> Message {
        let mut inner = self.inner.write();

        let id = format!("{}{:03}", ID_PREFIX, inner.next_sequence);
        inner.next_sequence += 1;

        let message = Message::new(id, content, status, recipient);
        debug!(
            "Filed {} ({}) as {}",
            message.id(),
            message.fingerprint(),
            status
        );
        inner.partition_mut(status).push(message.clone());
        message
    }

    /// File a message whose status arrives as free text.
    ///
    /// Labels that do not parse are filed as Stored with a warning. The
    /// message is never dropped.
    pub fn add_labelled(
        &self,
        content: impl Into<String>,
        status_label: &str,
        recipient: impl Into<String>,
    ) -> Message {
        let status = match status_label.parse::<MessageStatus>() {
            Ok(status) => status,
            Err(e) => {
                warn!("{}; storing as draft", e);
                MessageStatus::Stored
            }
        };
        self.add(content, status, recipient)
    }

    /// Every message: Sent, then Stored, then Disregarded
    pub fn all(&self) -> Vec<Message> {
        self.inner.read().iter().cloned().collect()
    }

    pub fn by_status(&self, status: MessageStatus) -> Vec<Message> {
        self.inner.read().partition(status).clone()
    }

    pub fn sent(&self) -> Vec<Message> {
        self.by_status(MessageStatus::Sent)
    }

    pub fn stored(&self) -> Vec<Message> {
        self.by_status(MessageStatus::Stored)
    }

    pub fn disregarded(&self) -> Vec<Message> {
        self.by_status(MessageStatus::Disregarded)
    }

    /// Case-insensitive exact match on id
    pub fn find_by_id(&self, id: &str) -> Option<Message> {
        self.inner
            .read()
            .iter()
            .find(|m| same_key(m.id(), id))
            .cloned()
    }

    /// Case-insensitive exact match on recipient, in `all()` order
    pub fn search_by_recipient(&self, recipient: &str) -> Vec<Message> {
        self.inner
            .read()
            .iter()
            .filter(|m| same_key(m.recipient(), recipient))
            .cloned()
            .collect()
    }

    /// Sent message with the most characters; the earliest one wins a tie
    pub fn longest_sent(&self) -> Option<Message> {
        let inner = self.inner.read();
        inner
            .sent
            .iter()
            .fold(None, |longest: Option<&Message>, message| match longest {
                Some(current) if message.content_len() <= current.content_len() => Some(current),
                _ => Some(message),
            })
            .cloned()
    }

    /// Remove the message whose id or fingerprint matches `key` and return it.
    ///
    /// Ids are tried first across all partitions, then fingerprints. Within
    /// each pass the first hit in Sent, Stored, Disregarded order is the one
    /// removed; nothing else is touched.
    pub fn take_by_key(&self, key: &str) -> Option<Message> {
        let mut inner = self.inner.write();

        let hit = inner
            .locate(|m| same_key(m.id(), key))
            .or_else(|| inner.locate(|m| same_key(m.fingerprint(), key)));

        match hit {
            Some((status, index)) => {
                let removed = inner.partition_mut(status).remove(index);
                debug!("Deleted {} ({}) from {}", removed.id(), removed.fingerprint(), status);
                Some(removed)
            }
            None => {
                debug!("No message matches key {}", key);
                None
            }
        }
    }

    /// Delete by id or fingerprint. Returns false when nothing matched.
    pub fn delete_by_key(&self, key: &str) -> bool {
        self.take_by_key(key).is_some()
    }

    /// Drop every message. The sequence counter keeps counting.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.sent.clear();
        inner.stored.clear();
        inner.disregarded.clear();
    }

    pub fn count(&self, status: MessageStatus) -> usize {
        self.inner.read().partition(status).len()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> StoreStats {
        let inner = self.inner.read();
        StoreStats {
            total: inner.len(),
            sent: inner.sent.len(),
            stored: inner.stored.len(),
            disregarded: inner.disregarded.len(),
            next_sequence: inner.next_sequence,
        }
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}
