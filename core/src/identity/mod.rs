// Identity — who is sending, as far as the registry cares
//
// Registration and login live elsewhere. The registry only ever needs a
// display label for the sender when rendering reports.

use serde::{Deserialize, Serialize};

/// Source of the sender's display label
pub trait SenderIdentity: Send + Sync {
    /// Human-readable label, e.g. `Test User (+27123456789)`
    fn display_label(&self) -> String;
}

/// An already-authenticated sender's details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderProfile {
    pub name: String,
    pub surname: String,
    pub phone: String,
}

impl SenderProfile {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            phone: phone.into(),
        }
    }
}

impl SenderIdentity for SenderProfile {
    fn display_label(&self) -> String {
        format!("{} {} ({})", self.name, self.surname, self.phone)
    }
}
