// Reports — plain-text renderings of store contents for the UI layer
//
// Every function reads one snapshot from the store and returns a String.
// Nothing here prints or prompts.

use crate::identity::SenderIdentity;
use crate::message::Message;
use crate::store::MessageStore;

const SEPARATOR: &str = "---------------------------------";

/// Id, fingerprint and recipient of each Sent message, under the sender label
pub fn sender_recipient_summary(store: &MessageStore, sender: &dyn SenderIdentity) -> String {
    let sent = store.sent();
    if sent.is_empty() {
        return "No sent messages found.".to_string();
    }

    let mut out = String::from("--- Sender and Recipient of All Sent Messages ---\n");
    out.push_str(&format!("Sender: {}\n\n", sender.display_label()));
    for m in &sent {
        out.push_str(&format!(
            "ID: {} | Hash: {} | Recipient: {}\n",
            m.id(),
            m.fingerprint(),
            m.recipient()
        ));
    }
    out
}

pub fn longest_sent_summary(store: &MessageStore) -> String {
    match store.longest_sent() {
        Some(m) => format!(
            "Longest Sent Message (Length: {})\n  ID: {}\n  Hash: {}\n  Recipient: {}\n  Message: {}\n",
            m.content_len(),
            m.id(),
            m.fingerprint(),
            m.recipient(),
            m.content()
        ),
        None => "No sent messages found.".to_string(),
    }
}

/// Full details of every Sent message
pub fn sent_report(store: &MessageStore, sender: &dyn SenderIdentity) -> String {
    let sent = store.sent();
    if sent.is_empty() {
        return "No sent messages found.".to_string();
    }

    let mut out = String::from("--- SENT MESSAGE REPORT ---\n");
    out.push_str(&format!("Sender: {}\n\n", sender.display_label()));
    push_detail_blocks(&mut out, &sent);
    out
}

/// Full details of every draft
pub fn stored_report(store: &MessageStore) -> String {
    let stored = store.stored();
    if stored.is_empty() {
        return "No stored messages (drafts) found.".to_string();
    }

    let mut out = String::from("--- STORED MESSAGE (DRAFT) REPORT ---\n");
    out.push_str(&format!("Total Drafts: {}\n\n", stored.len()));
    push_detail_blocks(&mut out, &stored);
    out
}

pub fn recipient_search_report(store: &MessageStore, recipient: &str) -> String {
    let found = store.search_by_recipient(recipient);
    if found.is_empty() {
        return format!("No messages found for recipient {}.", recipient);
    }

    let mut out = format!("--- Messages Found for Recipient: {} ---\n\n", recipient);
    for m in &found {
        out.push_str(&format!(
            "ID: {} | Hash: {} | Status: {} | Content: {}...\n",
            m.id(),
            m.fingerprint(),
            m.status(),
            m.preview()
        ));
    }
    out
}

/// Numbered short views, one per line
pub fn listing(messages: &[Message]) -> String {
    messages
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{}. {}\n", i + 1, m.short_view()))
        .collect()
}

fn push_detail_blocks(out: &mut String, messages: &[Message]) {
    for m in messages {
        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&format!("Message ID:   {}\n", m.id()));
        out.push_str(&format!("Message Hash: {}\n", m.fingerprint()));
        out.push_str(&format!("Recipient:    {}\n", m.recipient()));
        out.push_str(&format!("Message:      {}\n", m.content()));
    }
    out.push_str(SEPARATOR);
    out.push('\n');
}
