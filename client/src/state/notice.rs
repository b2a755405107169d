//! Transient toast notices raised by wishlist actions.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::state::wishlist::Outcome;

/// How long a notice stays visible before auto-dismissal.
pub const NOTICE_TTL_MS: u32 = 3_000;

/// Visual tone of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "notice--success",
            Self::Error => "notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Queue of visible notices, newest last.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Enqueue a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind, message: message.into() });
        id
    }

    /// Enqueue the notice for a wishlist outcome.
    pub fn push_outcome(&mut self, outcome: Outcome) -> u64 {
        let kind = if outcome.is_change() { NoticeKind::Success } else { NoticeKind::Error };
        self.push(kind, outcome.message())
    }

    /// Generic failure notice for storage errors.
    pub fn push_failure(&mut self) -> u64 {
        self.push(NoticeKind::Error, "Something went wrong!")
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notice| notice.id != id);
    }
}
