//! Pending input text, with a two-phase paste.
//!
//! Pasting is split in two: [`InputField::begin_paste`] hands out a
//! [`PasteTicket`] before the clipboard is read, and
//! [`InputField::complete_paste`] applies the result afterwards. The result only
//! lands if the read succeeded and nobody edited the field in between; an edit
//! made while the read was in flight wins over the stale clipboard text.

use tracing::debug;

/// Proof that a paste was requested at a given edit revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a paste ticket does nothing until passed to complete_paste"]
pub struct PasteTicket {
    revision: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    text: String,
    revision: u64,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text, as a user edit.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.revision += 1;
    }

    /// Hands back the current text and empties the field.
    pub fn take(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.revision += 1;
        text
    }

    pub fn begin_paste(&self) -> PasteTicket {
        PasteTicket {
            revision: self.revision,
        }
    }

    /// Applies a finished clipboard read. Returns whether the field changed.
    pub fn complete_paste(&mut self, ticket: PasteTicket, pasted: Option<String>) -> bool {
        let Some(text) = pasted else {
            return false;
        };
        if ticket.revision != self.revision {
            debug!("input edited while paste was pending, dropping paste");
            return false;
        }
        self.set_text(text);
        true
    }
}
