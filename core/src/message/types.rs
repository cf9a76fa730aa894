// Message types — one filed message and its lifecycle category

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::fingerprint::derive_fingerprint;
use crate::ChatAppError;

/// Characters of content shown in one-line list views
pub const PREVIEW_LEN: usize = 50;

/// Lifecycle category of a message.
///
/// Each variant names one store partition. Declaration order is the
/// partition traversal order used by every cross-partition query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageStatus {
    /// Marked as sent (intent only, nothing is delivered)
    Sent,
    /// Kept as a draft
    Stored,
    /// Thrown away but still on record
    Disregarded,
}

impl MessageStatus {
    /// All statuses in partition order
    pub const ALL: [MessageStatus; 3] = [
        MessageStatus::Sent,
        MessageStatus::Stored,
        MessageStatus::Disregarded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::Sent => "Sent",
            MessageStatus::Stored => "Stored",
            MessageStatus::Disregarded => "Disregarded",
        }
    }

    /// Map a one-letter action choice to a status.
    ///
    /// `S` sends, `T` stores ("sTore" as draft), `D` disregards. Only the
    /// first non-blank character matters and case is ignored, so `"send"`
    /// and `" s"` both mean Sent. Returns `None` for anything else.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim().chars().next()?.to_ascii_uppercase() {
            'S' => Some(MessageStatus::Sent),
            'T' => Some(MessageStatus::Stored),
            'D' => Some(MessageStatus::Disregarded),
            _ => None,
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageStatus {
    type Err = ChatAppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sent" => Ok(MessageStatus::Sent),
            "stored" | "draft" => Ok(MessageStatus::Stored),
            "disregarded" => Ok(MessageStatus::Disregarded),
            _ => Err(ChatAppError::UnrecognizedStatus(s.to_string())),
        }
    }
}

/// A filed message.
///
/// Everything except the status is fixed at construction, and the store
/// never changes the status either. Edits go through delete and re-add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Sequential id (`MSG001`, `MSG002`, ...)
    id: String,
    /// Derived from `id` and `content` once, at construction
    fingerprint: String,
    content: String,
    status: MessageStatus,
    /// Phone number or handle, never validated here
    recipient: String,
}

impl Message {
    /// Build a message and derive its fingerprint.
    ///
    /// Empty strings are accepted as zero-length data; input rules belong to
    /// the caller.
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        status: MessageStatus,
        recipient: impl Into<String>,
    ) -> Self {
        let id = id.into();
        let content = content.into();
        let fingerprint = derive_fingerprint(&id, &content);
        Self {
            id,
            fingerprint,
            content,
            status,
            recipient: recipient.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn status(&self) -> MessageStatus {
        self.status
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Content length in characters
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Trimmed content cut to at most `PREVIEW_LEN` characters
    pub fn preview(&self) -> &str {
        let trimmed = self.content.trim();
        match trimmed.char_indices().nth(PREVIEW_LEN) {
            Some((end, _)) => &trimmed[..end],
            None => trimmed,
        }
    }

    /// One-line summary for list displays
    pub fn short_view(&self) -> String {
        format!(
            "[ID: {}] [Hash: {}] [Status: {}] to {}: {}...",
            self.id,
            self.fingerprint,
            self.status,
            self.recipient,
            self.preview()
        )
    }

    /// Every attribute, one per line
    pub fn full_view(&self) -> String {
        format!(
            "Message Details:\n  ID:        {}\n  Hash:      {}\n  Status:    {}\n  Recipient: {}\n  Content:   {}\n",
            self.id, self.fingerprint, self.status, self.recipient, self.content
        )
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_message() {
        let msg = Message::new("MSG001", "This is content 123.", MessageStatus::Sent, "+27123456789");

        assert_eq!(msg.id(), "MSG001");
        assert_eq!(msg.fingerprint(), "HASH-001-123");
        assert_eq!(msg.content(), "This is content 123.");
        assert_eq!(msg.status(), MessageStatus::Sent);
        assert_eq!(msg.recipient(), "+27123456789");
        assert_eq!(msg.content_len(), 20);
    }

    #[test]
    fn test_empty_fields_are_valid() {
        let msg = Message::new("MSG007", "", MessageStatus::Stored, "");
        assert_eq!(msg.fingerprint(), "HASH-007-0");
        assert_eq!(msg.content_len(), 0);
        assert_eq!(msg.preview(), "");
    }

    #[test]
    fn test_short_view() {
        let msg = Message::new("MSG001", "  Did you get the cake?  ", MessageStatus::Sent, "+27834557896");
        assert_eq!(
            msg.short_view(),
            "[ID: MSG001] [Hash: HASH-001-25] [Status: Sent] to +27834557896: Did you get the cake?..."
        );
    }

    #[test]
    fn test_short_view_truncates_preview() {
        let content = "x".repeat(80);
        let msg = Message::new("MSG002", content, MessageStatus::Stored, "r");
        assert_eq!(msg.preview().chars().count(), PREVIEW_LEN);
        assert!(msg.short_view().ends_with(&format!("{}...", "x".repeat(PREVIEW_LEN))));
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let content = "ü".repeat(PREVIEW_LEN + 5);
        let msg = Message::new("MSG003", content, MessageStatus::Sent, "r");
        assert_eq!(msg.preview(), "ü".repeat(PREVIEW_LEN));
    }

    #[test]
    fn test_full_view_lists_every_field() {
        let msg = Message::new("MSG004", "It is dinner time !", MessageStatus::Sent, "0838884567");
        let view = msg.full_view();

        assert!(view.starts_with("Message Details:\n"));
        assert!(view.contains("ID:        MSG004"));
        assert!(view.contains("Hash:      HASH-004-19"));
        assert!(view.contains("Status:    Sent"));
        assert!(view.contains("Recipient: 0838884567"));
        assert!(view.contains("Content:   It is dinner time !"));
        assert_eq!(msg.to_string(), view);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("Sent".parse::<MessageStatus>(), Ok(MessageStatus::Sent));
        assert_eq!(" stored ".parse::<MessageStatus>(), Ok(MessageStatus::Stored));
        assert_eq!("DRAFT".parse::<MessageStatus>(), Ok(MessageStatus::Stored));
        assert_eq!("disregarded".parse::<MessageStatus>(), Ok(MessageStatus::Disregarded));
        assert_eq!(
            "Archived".parse::<MessageStatus>(),
            Err(ChatAppError::UnrecognizedStatus("Archived".to_string()))
        );
    }

    #[test]
    fn test_status_from_choice() {
        assert_eq!(MessageStatus::from_choice("s"), Some(MessageStatus::Sent));
        assert_eq!(MessageStatus::from_choice(" Send"), Some(MessageStatus::Sent));
        assert_eq!(MessageStatus::from_choice("t"), Some(MessageStatus::Stored));
        assert_eq!(MessageStatus::from_choice("D"), Some(MessageStatus::Disregarded));
        assert_eq!(MessageStatus::from_choice("x"), None);
        assert_eq!(MessageStatus::from_choice("   "), None);
    }

    #[test]
    fn test_status_display_round_trips() {
        for status in MessageStatus::ALL {
            assert_eq!(status.to_string().parse::<MessageStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new("MSG009", "hello 42", MessageStatus::Disregarded, "peer");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"fingerprint\":\"HASH-009-42\""));
        assert!(json.contains("\"status\":\"Disregarded\""));

        let restored: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, msg);
    }
}
