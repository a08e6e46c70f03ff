//! Read-only derivation of what the shell should display.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::selection::OrderedSelection;
use crate::tool::Tool;

/// A selection entry with its position-dependent move affordances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedEntry {
    pub tool: Tool,
    pub can_move_up: bool,
    pub can_move_down: bool,
}

/// A catalog entry with its add-affordance state.
///
/// Already-selected tools stay visible; the shell disables their add
/// affordance instead of hiding them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailableEntry {
    pub tool: Tool,
    pub already_selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewModel {
    pub selected: Vec<SelectedEntry>,
    pub available: Vec<AvailableEntry>,
}

/// Project engine state into the two display sequences.
///
/// Pure and cheap enough to recompute synchronously on every change.
/// Selection entries absent from the catalog are projected as-is.
pub fn project(selection: &OrderedSelection, catalog: &Catalog, filter: &str) -> ViewModel {
    let len = selection.len();
    let selected = selection
        .tools()
        .iter()
        .enumerate()
        .map(|(index, tool)| SelectedEntry {
            tool: tool.clone(),
            can_move_up: index > 0,
            can_move_down: index + 1 < len,
        })
        .collect();

    let needle = filter.to_lowercase();
    let available = catalog
        .tools()
        .iter()
        .filter(|tool| title_matches(&tool.title, &needle))
        .map(|tool| AvailableEntry {
            tool: tool.clone(),
            already_selected: selection.contains(&tool.id),
        })
        .collect();

    ViewModel {
        selected,
        available,
    }
}

/// Case-insensitive substring match; an empty filter matches everything.
/// `needle_lower` must already be lowercased.
pub(crate) fn title_matches(title: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || title.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(id: &str, title: &str) -> Tool {
        Tool::new(id.to_string(), title.to_string())
    }

    #[test]
    fn move_affordances_depend_on_position() {
        let selection =
            OrderedSelection::from_persisted(vec![tool("a", "A"), tool("b", "B"), tool("c", "C")]);
        let view = project(&selection, &Catalog::default(), "");

        assert!(!view.selected[0].can_move_up);
        assert!(view.selected[0].can_move_down);
        assert!(view.selected[1].can_move_up);
        assert!(view.selected[1].can_move_down);
        assert!(view.selected[2].can_move_up);
        assert!(!view.selected[2].can_move_down);
    }

    #[test]
    fn single_entry_can_move_nowhere() {
        let selection = OrderedSelection::from_persisted(vec![tool("a", "A")]);
        let view = project(&selection, &Catalog::default(), "");
        assert!(!view.selected[0].can_move_up);
        assert!(!view.selected[0].can_move_down);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let catalog = Catalog::new(vec![tool("wd", "Workday"), tool("tm", "Time Mgr")]);
        let selection = OrderedSelection::new();

        let view = project(&selection, &catalog, "wor");
        assert_eq!(view.available.len(), 1);
        assert_eq!(view.available[0].tool.title, "Workday");

        let view = project(&selection, &catalog, "WOR");
        assert_eq!(view.available.len(), 1);
    }

    #[test]
    fn selected_tools_stay_visible_in_available() {
        let catalog = Catalog::new(vec![tool("wd", "Workday"), tool("tm", "Time Mgr")]);
        let selection = OrderedSelection::from_persisted(vec![tool("wd", "Workday")]);

        let view = project(&selection, &catalog, "");
        assert_eq!(view.available.len(), 2);
        assert!(view.available[0].already_selected);
        assert!(!view.available[1].already_selected);
    }

    #[test]
    fn stale_selection_entries_project_unchanged() {
        let catalog = Catalog::new(vec![tool("wd", "Workday")]);
        let selection = OrderedSelection::from_persisted(vec![tool("gone", "Retired Tool")]);

        let view = project(&selection, &catalog, "");
        assert_eq!(view.selected.len(), 1);
        assert_eq!(view.selected[0].tool.id, "gone");
        assert_eq!(view.selected[0].tool.title, "Retired Tool");
    }
}
