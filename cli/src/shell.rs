// Interactive shell — parses one line at a time and runs it against the store
//
// Parsing and execution are kept apart from terminal I/O so both can be
// exercised without a console. Colouring happens in main.

use anyhow::{bail, Context, Result};
use chatapp_core::{report, MessageStatus, MessageStore, SenderIdentity};

pub const HELP: &str = "\
Commands:
  send <s|t|d> <recipient> <message>   s = Sent, t = Stored (draft), d = Disregarded
  list [all|sent|stored|disregarded] [--json]
  show <id>
  recipient <recipient>
  longest
  delete <id-or-hash>
  senders
  report <sent|stored>
  stats
  help
  quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    All,
    Only(MessageStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Sent,
    Stored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Send {
        choice: String,
        recipient: String,
        content: String,
    },
    List {
        scope: ListScope,
        json: bool,
    },
    Show(String),
    Recipient(String),
    Longest,
    Delete(String),
    Senders,
    Report(ReportKind),
    Stats,
    Help,
    Quit,
}

/// What the shell should do with a command's result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Info(String),
    Warning(String),
    Failure(String),
    Quit,
}

/// Split off the first whitespace-delimited word
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (s, ""),
    }
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self> {
        let (verb, rest) = split_word(line);
        let rest = rest.trim();

        let command = match verb.to_ascii_lowercase().as_str() {
            "send" => {
                let (choice, rest) = split_word(rest);
                let (recipient, content) = split_word(rest);
                if recipient.is_empty() {
                    bail!("Recipient number cannot be empty. Usage: send <s|t|d> <recipient> <message>");
                }
                if content.trim().is_empty() {
                    bail!("Message content cannot be empty. Usage: send <s|t|d> <recipient> <message>");
                }
                ShellCommand::Send {
                    choice: choice.to_string(),
                    recipient: recipient.to_string(),
                    content: content.trim().to_string(),
                }
            }
            "list" => {
                let mut scope = ListScope::All;
                let mut json = false;
                for word in rest.split_whitespace() {
                    match word.to_ascii_lowercase().as_str() {
                        "--json" => json = true,
                        "all" => scope = ListScope::All,
                        "drafts" => scope = ListScope::Only(MessageStatus::Stored),
                        other => {
                            let status = other
                                .parse::<MessageStatus>()
                                .with_context(|| format!("Unknown list filter: {}", word))?;
                            scope = ListScope::Only(status);
                        }
                    }
                }
                ShellCommand::List { scope, json }
            }
            "show" => ShellCommand::Show(required(rest, "show <id>")?),
            "recipient" => ShellCommand::Recipient(required(rest, "recipient <recipient>")?),
            "longest" => ShellCommand::Longest,
            "delete" => ShellCommand::Delete(required(rest, "delete <id-or-hash>")?),
            "senders" => ShellCommand::Senders,
            "report" => match rest.to_ascii_lowercase().as_str() {
                "sent" => ShellCommand::Report(ReportKind::Sent),
                "stored" | "drafts" => ShellCommand::Report(ReportKind::Stored),
                _ => bail!("Usage: report <sent|stored>"),
            },
            "stats" => ShellCommand::Stats,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            _ => bail!("Unknown command: {}. Type 'help' for a list.", verb),
        };
        Ok(command)
    }
}

fn required(arg: &str, usage: &str) -> Result<String> {
    if arg.is_empty() {
        bail!("Usage: {}", usage);
    }
    Ok(arg.to_string())
}

/// The user-facing side of the registry
pub struct Shell<'a> {
    store: &'a MessageStore,
    sender: &'a dyn SenderIdentity,
}

impl<'a> Shell<'a> {
    pub fn new(store: &'a MessageStore, sender: &'a dyn SenderIdentity) -> Self {
        Self { store, sender }
    }

    /// Banner shown when the shell starts
    pub fn greeting(&self) -> String {
        format!("You are sending messages as: {}", self.sender.display_label())
    }

    pub fn execute(&self, command: ShellCommand) -> Result<Outcome> {
        let outcome = match command {
            ShellCommand::Send {
                choice,
                recipient,
                content,
            } => self.send(&choice, recipient, content),
            ShellCommand::List { scope, json } => {
                let messages = match scope {
                    ListScope::All => self.store.all(),
                    ListScope::Only(status) => self.store.by_status(status),
                };
                if json {
                    Outcome::Info(serde_json::to_string_pretty(&messages)?)
                } else if messages.is_empty() {
                    Outcome::Info("No messages or drafts found.".to_string())
                } else {
                    Outcome::Info(report::listing(&messages))
                }
            }
            ShellCommand::Show(id) => match self.store.find_by_id(&id) {
                Some(message) => Outcome::Info(message.full_view()),
                None => Outcome::Failure(format!("Message with ID {} not found.", id)),
            },
            ShellCommand::Recipient(recipient) => {
                Outcome::Info(report::recipient_search_report(self.store, &recipient))
            }
            ShellCommand::Longest => Outcome::Info(report::longest_sent_summary(self.store)),
            ShellCommand::Delete(key) => match self.store.take_by_key(&key) {
                Some(message) => Outcome::Success(format!(
                    "Message \"{}\" successfully deleted.",
                    message.content()
                )),
                None => Outcome::Failure(format!("Error: Message with Hash/ID {} not found.", key)),
            },
            ShellCommand::Senders => {
                Outcome::Info(report::sender_recipient_summary(self.store, self.sender))
            }
            ShellCommand::Report(ReportKind::Sent) => {
                Outcome::Info(report::sent_report(self.store, self.sender))
            }
            ShellCommand::Report(ReportKind::Stored) => {
                Outcome::Info(report::stored_report(self.store))
            }
            ShellCommand::Stats => {
                let stats = self.store.stats();
                Outcome::Info(format!(
                    "Messages:    {}\n  Sent:        {}\n  Stored:      {}\n  Disregarded: {}\nNext ID:     MSG{:03}",
                    stats.total, stats.sent, stats.stored, stats.disregarded, stats.next_sequence
                ))
            }
            ShellCommand::Help => Outcome::Info(HELP.to_string()),
            ShellCommand::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }

    fn send(&self, choice: &str, recipient: String, content: String) -> Outcome {
        let (status, fell_back) = match MessageStatus::from_choice(choice) {
            Some(status) => (status, false),
            None => {
                tracing::warn!("Unknown action choice {:?}; saving as draft", choice);
                (MessageStatus::Stored, true)
            }
        };

        let message = self.store.add(content, status, recipient);
        let confirmation = format!(
            "Message processed!\nAction: {}\nRecipient: {}\nMessage ID (Sequential): {}\nHash ID (Unique): {}",
            status,
            message.recipient(),
            message.id(),
            message.fingerprint()
        );

        if fell_back {
            Outcome::Warning(format!(
                "Invalid choice. Saving as Draft (Stored status).\n{}",
                confirmation
            ))
        } else {
            Outcome::Success(confirmation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatapp_core::SenderProfile;

    fn sender() -> SenderProfile {
        SenderProfile::new("Test", "User", "+27123456789")
    }

    fn text(outcome: Outcome) -> String {
        match outcome {
            Outcome::Success(s) | Outcome::Info(s) | Outcome::Warning(s) | Outcome::Failure(s) => s,
            Outcome::Quit => String::new(),
        }
    }

    #[test]
    fn test_parse_send_keeps_inner_spacing() {
        let cmd = ShellCommand::parse("send s +27834557896   Did you  get the cake? ").unwrap();
        assert_eq!(
            cmd,
            ShellCommand::Send {
                choice: "s".to_string(),
                recipient: "+27834557896".to_string(),
                content: "Did you  get the cake?".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_send_requires_content() {
        assert!(ShellCommand::parse("send s +27834557896").is_err());
        assert!(ShellCommand::parse("send s").is_err());
    }

    #[test]
    fn test_parse_list_filters() {
        assert_eq!(
            ShellCommand::parse("list").unwrap(),
            ShellCommand::List { scope: ListScope::All, json: false }
        );
        assert_eq!(
            ShellCommand::parse("list drafts --json").unwrap(),
            ShellCommand::List { scope: ListScope::Only(MessageStatus::Stored), json: true }
        );
        assert!(ShellCommand::parse("list archived").is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(ShellCommand::parse("QUIT").unwrap(), ShellCommand::Quit);
        assert_eq!(ShellCommand::parse("exit").unwrap(), ShellCommand::Quit);
        assert_eq!(ShellCommand::parse("report stored").unwrap(), ShellCommand::Report(ReportKind::Stored));
        assert_eq!(ShellCommand::parse("delete HASH-001-21").unwrap(), ShellCommand::Delete("HASH-001-21".into()));
        assert!(ShellCommand::parse("show").is_err());
        assert!(ShellCommand::parse("report").is_err());
        assert!(ShellCommand::parse("frobnicate").is_err());
    }

    #[test]
    fn test_send_files_message() {
        let store = MessageStore::new();
        let sender = sender();
        let shell = Shell::new(&store, &sender);

        let outcome = shell
            .execute(ShellCommand::parse("send d +27834484567 Yohoooo, I am at your gate.").unwrap())
            .unwrap();

        assert!(matches!(outcome, Outcome::Success(_)));
        let out = text(outcome);
        assert!(out.contains("Action: Disregarded"));
        assert!(out.contains("Message ID (Sequential): MSG001"));
        assert!(out.contains("Hash ID (Unique): HASH-001-27"));
        assert_eq!(store.disregarded().len(), 1);
    }

    #[test]
    fn test_send_unknown_choice_saves_draft() {
        let store = MessageStore::new();
        let sender = sender();
        let shell = Shell::new(&store, &sender);

        let outcome = shell.execute(ShellCommand::parse("send x 0838884567 hello").unwrap()).unwrap();

        assert!(matches!(outcome, Outcome::Warning(_)));
        assert!(text(outcome).starts_with("Invalid choice. Saving as Draft"));
        assert_eq!(store.stored().len(), 1);
    }

    #[test]
    fn test_delete_reports_content() {
        let store = MessageStore::with_sample_messages();
        let sender = sender();
        let shell = Shell::new(&store, &sender);

        let outcome = shell.execute(ShellCommand::Delete("msg004".into())).unwrap();
        assert_eq!(
            outcome,
            Outcome::Success("Message \"It is dinner time !\" successfully deleted.".into())
        );

        let outcome = shell.execute(ShellCommand::Delete("MSG004".into())).unwrap();
        assert_eq!(
            outcome,
            Outcome::Failure("Error: Message with Hash/ID MSG004 not found.".into())
        );
    }

    #[test]
    fn test_show_and_list() {
        let store = MessageStore::with_sample_messages();
        let sender = sender();
        let shell = Shell::new(&store, &sender);

        let shown = text(shell.execute(ShellCommand::Show("MSG003".into())).unwrap());
        assert!(shown.contains("Status:    Disregarded"));

        let missing = shell.execute(ShellCommand::Show("MSG999".into())).unwrap();
        assert_eq!(missing, Outcome::Failure("Message with ID MSG999 not found.".into()));

        let listed = text(
            shell
                .execute(ShellCommand::List { scope: ListScope::Only(MessageStatus::Sent), json: false })
                .unwrap(),
        );
        assert_eq!(listed.lines().count(), 2);
    }

    #[test]
    fn test_list_json() {
        let store = MessageStore::with_sample_messages();
        let sender = sender();
        let shell = Shell::new(&store, &sender);

        let json = text(shell.execute(ShellCommand::List { scope: ListScope::All, json: true }).unwrap());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 5);
        assert_eq!(parsed[0]["id"], "MSG001");
    }

    #[test]
    fn test_empty_list() {
        let store = MessageStore::new();
        let sender = sender();
        let shell = Shell::new(&store, &sender);

        let outcome = shell.execute(ShellCommand::List { scope: ListScope::All, json: false }).unwrap();
        assert_eq!(outcome, Outcome::Info("No messages or drafts found.".into()));
    }

    #[test]
    fn test_reports_use_sender_label() {
        let store = MessageStore::with_sample_messages();
        let sender = sender();
        let shell = Shell::new(&store, &sender);

        assert!(shell.greeting().ends_with("Test User (+27123456789)"));
        let out = text(shell.execute(ShellCommand::Report(ReportKind::Sent)).unwrap());
        assert!(out.contains("Sender: Test User (+27123456789)"));
    }

    #[test]
    fn test_stats() {
        let store = MessageStore::with_sample_messages();
        let sender = sender();
        let shell = Shell::new(&store, &sender);

        let out = text(shell.execute(ShellCommand::Stats).unwrap());
        assert!(out.starts_with("Messages:    5"));
        assert!(out.ends_with("Next ID:     MSG006"));
    }
}
