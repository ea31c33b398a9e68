//! Client-held snapshot of the list plus transient UI state.

use crate::types::{Draft, Item, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Status,
    Error,
}

/// A message banner. `generation` ties the banner to the timer that will
/// expire it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub generation: u64,
}

/// Per-row edit state. At most one row is `Editing` at a time because
/// [`ViewState::editing`] is a single optional id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Viewing,
    Editing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// In the order returned by the last list, plus local appends.
    pub items: Vec<Item>,
    pub editing: Option<ItemId>,
    pub status: Option<Notice>,
    pub error: Option<Notice>,
    pub compose: Draft,
    pub edit: Draft,
}

impl ViewState {
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id.as_ref() == Some(id))
    }

    pub fn row_state(&self, item: &Item) -> RowState {
        match (&self.editing, &item.id) {
            (Some(editing), Some(id)) if editing == id => RowState::Editing,
            _ => RowState::Viewing,
        }
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|n| n.text.as_str())
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|n| n.text.as_str())
    }

    pub(crate) fn notice_mut(&mut self, kind: NoticeKind) -> &mut Option<Notice> {
        match kind {
            NoticeKind::Status => &mut self.status,
            NoticeKind::Error => &mut self.error,
        }
    }
}
