//! Parsing of terminal commands into store actions.

use thiserror::Error;
use todo_core::{Action, Draft, View};

pub const HELP: &str = "\
commands:
  refresh                       reload the list from the server
  title <text>                  set the new item's title
  desc <text>                   set the new item's description
  add [<title> | <description>] submit the new item
  edit <n>                      edit row n
  etitle <text>                 set the edited title
  edesc <text>                  set the edited description
  save                          send the edit
  cancel                        leave edit mode
  delete <n>                    delete row n (asks first)
  help                          show this text
  quit                          exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Empty,
    Refresh,
    Title(String),
    Description(String),
    Add(Option<Draft>),
    Edit(usize),
    EditTitle(String),
    EditDescription(String),
    Save,
    Cancel,
    Delete(usize),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("no row {0}")]
    NoSuchRow(usize),

    #[error("row {0} is not saved yet, refresh first")]
    NotAddressable(usize),
}

impl Input {
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let input = match command.to_ascii_lowercase().as_str() {
            "" => Input::Empty,
            "refresh" | "list" => Input::Refresh,
            "title" => Input::Title(rest.to_string()),
            "desc" | "description" => Input::Description(rest.to_string()),
            "add" | "submit" if rest.is_empty() => Input::Add(None),
            "add" | "submit" => {
                let (title, description) = rest
                    .split_once('|')
                    .ok_or(InputError::Usage("add <title> | <description>"))?;
                Input::Add(Some(Draft::new(title.trim(), description.trim())))
            }
            "edit" => Input::Edit(position(rest, "edit <n>")?),
            "etitle" => Input::EditTitle(rest.to_string()),
            "edesc" => Input::EditDescription(rest.to_string()),
            "save" | "update" => Input::Save,
            "cancel" => Input::Cancel,
            "delete" | "rm" => Input::Delete(position(rest, "delete <n>")?),
            "help" | "?" => Input::Help,
            "quit" | "exit" | "q" => Input::Quit,
            other => return Err(InputError::Unknown(other.to_string())),
        };
        Ok(input)
    }

    /// Translate into store actions. Rows are resolved against the view the
    /// user is looking at.
    pub fn into_actions(self, view: &View) -> Result<Vec<Action>, InputError> {
        let actions = match self {
            Input::Empty | Input::Help | Input::Quit => Vec::new(),
            Input::Refresh => vec![Action::Refresh],
            Input::Title(title) => vec![Action::SetComposeTitle(title)],
            Input::Description(description) => vec![Action::SetComposeDescription(description)],
            Input::Add(None) => vec![Action::Submit],
            Input::Add(Some(draft)) => vec![
                Action::SetComposeTitle(draft.title),
                Action::SetComposeDescription(draft.description),
                Action::Submit,
            ],
            Input::Edit(n) => vec![Action::BeginEdit(row_id(view, n)?)],
            Input::EditTitle(title) => vec![Action::SetEditTitle(title)],
            Input::EditDescription(description) => vec![Action::SetEditDescription(description)],
            Input::Save => vec![Action::SaveEdit],
            Input::Cancel => vec![Action::CancelEdit],
            Input::Delete(n) => vec![Action::Delete(row_id(view, n)?)],
        };
        Ok(actions)
    }
}

/// Answer to a yes/no prompt. Anything but an explicit yes is a no,
/// including a closed stdin.
pub fn accepts(answer: Option<&str>) -> bool {
    answer
        .map(str::trim)
        .is_some_and(|a| a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes"))
}

fn position(arg: &str, usage: &'static str) -> Result<usize, InputError> {
    arg.parse().map_err(|_| InputError::Usage(usage))
}

fn row_id(view: &View, n: usize) -> Result<todo_core::ItemId, InputError> {
    let row = view.row(n).ok_or(InputError::NoSuchRow(n))?;
    row.id.clone().ok_or(InputError::NotAddressable(n))
}
