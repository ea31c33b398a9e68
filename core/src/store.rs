//! The view state store.
//!
//! # Design
//! Every change to [`ViewState`] goes through [`Store::reduce`]: user
//! interactions, network outcomes and notice expiry are all [`Action`]s.
//! The reducer never performs I/O itself. Work that has to happen outside
//! the store comes back as [`Effect`]s for the dispatcher to run.

use std::time::Duration;

use tracing::debug;

use crate::state::{Notice, NoticeKind, ViewState};
use crate::types::{Draft, Item, ItemId};

pub const ITEM_ADDED: &str = "Item added successfully";
pub const ITEM_UPDATED: &str = "Item Updated successfully";
pub const LIST_FAILED: &str = "Unable to fetch Todo items";
pub const CREATE_FAILED: &str = "Unable to create Todo item";
pub const UPDATE_FAILED: &str = "Unable to update Todo item";
pub const DELETE_FAILED: &str = "Unable to delete Todo item";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete?";

/// A network request the sync layer knows how to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Create(Draft),
    Update(ItemId, Draft),
    Delete(ItemId),
}

impl Command {
    /// The outcome reported when this command produced no response at all.
    pub fn failure(&self) -> Action {
        match self {
            Command::List => Action::ListFailed,
            Command::Create(_) => Action::CreateFailed,
            Command::Update(..) => Action::UpdateFailed,
            Command::Delete(_) => Action::DeleteFailed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // user interactions
    Mounted,
    Refresh,
    SetComposeTitle(String),
    SetComposeDescription(String),
    Submit,
    BeginEdit(ItemId),
    SetEditTitle(String),
    SetEditDescription(String),
    SaveEdit,
    CancelEdit,
    Delete(ItemId),

    // network outcomes
    Listed(Vec<Item>),
    ListFailed,
    Created { draft: Draft, id: Option<ItemId> },
    CreateFailed,
    Updated { id: ItemId, draft: Draft },
    UpdateFailed,
    Deleted(ItemId),
    DeleteFailed,

    ExpireNotice { kind: NoticeKind, generation: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Request(Command),
    /// Ask the user before issuing `command`; drop it on "no".
    Confirm {
        prompt: &'static str,
        command: Command,
    },
    ExpireNotice {
        kind: NoticeKind,
        generation: u64,
        after: Duration,
    },
}

#[derive(Debug)]
pub struct Store {
    state: ViewState,
    notice_ttl: Duration,
    next_generation: u64,
}

impl Store {
    pub fn new(notice_ttl: Duration) -> Self {
        Self {
            state: ViewState::default(),
            notice_ttl,
            next_generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        debug!(?action, "reduce");
        let state = &mut self.state;
        match action {
            Action::Mounted | Action::Refresh => vec![Effect::Request(Command::List)],

            Action::SetComposeTitle(title) => {
                state.compose.title = title;
                Vec::new()
            }
            Action::SetComposeDescription(description) => {
                state.compose.description = description;
                Vec::new()
            }
            Action::Submit => {
                state.error = None;
                if !state.compose.is_complete() {
                    debug!("submit skipped: compose buffer incomplete");
                    return Vec::new();
                }
                vec![Effect::Request(Command::Create(state.compose.clone()))]
            }

            Action::BeginEdit(id) => {
                let Some(item) = state.item(&id) else {
                    debug!(%id, "edit requested for unknown item");
                    return Vec::new();
                };
                let buffer = Draft::new(item.title.clone(), item.description.clone());
                state.edit = buffer;
                state.editing = Some(id);
                Vec::new()
            }
            Action::SetEditTitle(title) => {
                state.edit.title = title;
                Vec::new()
            }
            Action::SetEditDescription(description) => {
                state.edit.description = description;
                Vec::new()
            }
            Action::SaveEdit => {
                state.error = None;
                let Some(id) = state.editing.clone() else {
                    return Vec::new();
                };
                if !state.edit.is_complete() {
                    debug!(%id, "save skipped: edit buffer incomplete");
                    return Vec::new();
                }
                vec![Effect::Request(Command::Update(id, state.edit.clone()))]
            }
            Action::CancelEdit => {
                state.editing = None;
                state.edit = Draft::default();
                Vec::new()
            }

            Action::Delete(id) => vec![Effect::Confirm {
                prompt: DELETE_PROMPT,
                command: Command::Delete(id),
            }],

            Action::Listed(items) => {
                state.items = items;
                if let Some(id) = state.editing.clone() {
                    if state.item(&id).is_none() {
                        debug!(%id, "edited item gone after refresh");
                        state.editing = None;
                        state.edit = Draft::default();
                    }
                }
                Vec::new()
            }
            Action::ListFailed => vec![self.notify(NoticeKind::Error, LIST_FAILED)],

            Action::Created { draft, id } => {
                let reconcile = id.is_none();
                state.items.push(Item {
                    id,
                    title: draft.title,
                    description: draft.description,
                });
                state.compose = Draft::default();
                let mut effects = vec![self.notify(NoticeKind::Status, ITEM_ADDED)];
                if reconcile {
                    effects.push(Effect::Request(Command::List));
                }
                effects
            }
            Action::CreateFailed => vec![self.notify(NoticeKind::Error, CREATE_FAILED)],

            Action::Updated { id, draft } => {
                if let Some(item) = state
                    .items
                    .iter_mut()
                    .find(|item| item.id.as_ref() == Some(&id))
                {
                    item.title = draft.title;
                    item.description = draft.description;
                }
                state.editing = None;
                state.edit = Draft::default();
                vec![self.notify(NoticeKind::Status, ITEM_UPDATED)]
            }
            Action::UpdateFailed => vec![self.notify(NoticeKind::Error, UPDATE_FAILED)],

            Action::Deleted(id) => {
                state.items.retain(|item| item.id.as_ref() != Some(&id));
                if state.editing.as_ref() == Some(&id) {
                    state.editing = None;
                    state.edit = Draft::default();
                }
                Vec::new()
            }
            Action::DeleteFailed => vec![self.notify(NoticeKind::Error, DELETE_FAILED)],

            Action::ExpireNotice { kind, generation } => {
                let slot = state.notice_mut(kind);
                if slot.as_ref().is_some_and(|n| n.generation == generation) {
                    *slot = None;
                }
                Vec::new()
            }
        }
    }

    fn notify(&mut self, kind: NoticeKind, text: &str) -> Effect {
        self.next_generation += 1;
        let generation = self.next_generation;
        *self.state.notice_mut(kind) = Some(Notice {
            text: text.to_string(),
            generation,
        });
        Effect::ExpireNotice {
            kind,
            generation,
            after: self.notice_ttl,
        }
    }
}
