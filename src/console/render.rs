use super::state::{ConsoleState, LoadPhase};

pub const EMPTY_MESSAGE: &str = "No items found. Create one to get started!";
const SKELETON_ROWS: usize = 3;
const SKELETON_ROW: &str = "  [....]  ..........................";

/// Render the item list view as plain text.
#[must_use]
pub fn render_items(state: &ConsoleState) -> String {
    let mut out = String::from("Items\n");
    if state.phase() == LoadPhase::Loading {
        for _ in 0..SKELETON_ROWS {
            out.push_str(SKELETON_ROW);
            out.push('\n');
        }
        return out;
    }
    if state.items().is_empty() {
        out.push_str("  ");
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
        return out;
    }
    for item in state.items() {
        out.push_str("  [");
        out.push_str(&item.id);
        out.push_str("] ");
        out.push_str(&item.name);
        out.push_str(" - ");
        out.push_str(&item.description);
        out.push('\n');
    }
    out
}

/// Render the edit view, if one is open.
#[must_use]
pub fn render_edit(state: &ConsoleState) -> Option<String> {
    state.editing().map(|item| {
        format!(
            "Edit Item {}\n  name: {}\n  description: {}\n  (save | cancel)\n",
            item.id, item.name, item.description
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_renders_skeleton_rows() {
        let state = ConsoleState::new();
        let out = render_items(&state);
        assert_eq!(out.matches(SKELETON_ROW).count(), SKELETON_ROWS);
    }

    #[test]
    fn test_render_edit_closed() {
        let state = ConsoleState::new();
        assert!(render_edit(&state).is_none());
    }
}
