//! Pure mapping from [`ViewState`] to what the user sees.

use crate::state::{RowState, ViewState};
use crate::types::{Draft, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Edit,
    Delete,
    Update,
    Cancel,
}

impl Control {
    pub fn label(&self) -> &'static str {
        match self {
            Control::Edit => "Edit",
            Control::Delete => "Delete",
            Control::Update => "Update",
            Control::Cancel => "Cancel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowMode {
    /// Static text from the item.
    Display { title: String, description: String },
    /// Input fields bound to the edit buffer.
    Edit { title: String, description: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based position in the list.
    pub position: usize,
    pub id: Option<ItemId>,
    pub mode: RowMode,
}

impl Row {
    pub fn controls(&self) -> &'static [Control] {
        match (&self.mode, &self.id) {
            (RowMode::Edit { .. }, _) => &[Control::Update, Control::Cancel],
            (RowMode::Display { .. }, Some(_)) => &[Control::Edit, Control::Delete],
            // not addressable until a refresh brings in the server id
            (RowMode::Display { .. }, None) => &[],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub status: Option<String>,
    pub error: Option<String>,
    pub compose: Draft,
    pub rows: Vec<Row>,
}

impl View {
    pub fn row(&self, position: usize) -> Option<&Row> {
        position.checked_sub(1).and_then(|i| self.rows.get(i))
    }
}

pub fn render(state: &ViewState) -> View {
    let rows = state
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mode = match state.row_state(item) {
                RowState::Viewing => RowMode::Display {
                    title: item.title.clone(),
                    description: item.description.clone(),
                },
                RowState::Editing => RowMode::Edit {
                    title: state.edit.title.clone(),
                    description: state.edit.description.clone(),
                },
            };
            Row {
                position: i + 1,
                id: item.id.clone(),
                mode,
            }
        })
        .collect();

    View {
        status: state
            .status_message()
            .filter(|m| !m.is_empty())
            .map(str::to_string),
        error: state
            .error_message()
            .filter(|m| !m.is_empty())
            .map(str::to_string),
        compose: state.compose.clone(),
        rows,
    }
}
