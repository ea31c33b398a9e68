//! Plain-text rendering of a [`View`].

use std::fmt::Write;

use todo_core::{Control, RowMode, View};

pub fn to_text(view: &View) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== ToDo List ==");
    if let Some(status) = &view.status {
        let _ = writeln!(out, "[ok] {status}");
    }
    if let Some(error) = &view.error {
        let _ = writeln!(out, "[error] {error}");
    }
    let _ = writeln!(
        out,
        "Add item: title=\"{}\" description=\"{}\"",
        view.compose.title, view.compose.description
    );
    let _ = writeln!(out, "Tasks:");
    if view.rows.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for row in &view.rows {
        let body = match &row.mode {
            RowMode::Display { title, description } => format!("{title} - {description}"),
            RowMode::Edit { title, description } => {
                format!("> title=\"{title}\" description=\"{description}\"")
            }
        };
        let _ = writeln!(out, "  {}. {body}{}", row.position, controls(row.controls()));
    }
    out
}

fn controls(controls: &[Control]) -> String {
    controls
        .iter()
        .map(|c| format!("  [{}]", c.label()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::{render, Draft, Item, ItemId, Notice, ViewState};

    #[test]
    fn renders_banners_rows_and_controls() {
        let state = ViewState {
            items: vec![
                Item {
                    id: Some(ItemId::new("a")),
                    title: "Walk dog".to_string(),
                    description: "Park".to_string(),
                },
                Item {
                    id: Some(ItemId::new("b")),
                    title: "Feed cat".to_string(),
                    description: "Tuna".to_string(),
                },
            ],
            editing: Some(ItemId::new("b")),
            edit: Draft::new("Feed cats", "Tuna"),
            error: Some(Notice {
                text: "Unable to update Todo item".to_string(),
                generation: 4,
            }),
            ..Default::default()
        };

        let text = to_text(&render(&state));
        let expected = "\
== ToDo List ==
[error] Unable to update Todo item
Add item: title=\"\" description=\"\"
Tasks:
  1. Walk dog - Park  [Edit]  [Delete]
  2. > title=\"Feed cats\" description=\"Tuna\"  [Update]  [Cancel]
";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_list_says_so() {
        let text = to_text(&render(&ViewState::default()));
        assert!(text.contains("Tasks:\n  (none)\n"));
        assert!(!text.contains("[ok]"));
    }
}
