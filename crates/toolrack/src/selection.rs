//! The user's ordered shortlist and its list operations.

use std::collections::HashSet;

use crate::tool::Tool;

/// Ordered sequence of tools; every id appears at most once.
///
/// Order is semantically meaningful. Each mutating operation returns whether
/// the list actually changed, so callers can decide whether anything needs
/// to be re-rendered or persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedSelection {
    tools: Vec<Tool>,
}

impl OrderedSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a selection from persisted data, dropping duplicate ids.
    /// The first occurrence of an id wins.
    pub fn from_persisted(tools: Vec<Tool>) -> Self {
        let mut seen = HashSet::new();
        let tools = tools
            .into_iter()
            .filter(|tool| seen.insert(tool.id.clone()))
            .collect();
        Self { tools }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.tools.iter().position(|tool| tool.id == id)
    }

    /// Append a tool unless its id is already present.
    pub fn add(&mut self, tool: Tool) -> bool {
        if self.contains(&tool.id) {
            return false;
        }
        self.tools.push(tool);
        true
    }

    /// Remove the entry with the given id, if present.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.tools.remove(index);
                true
            }
            None => false,
        }
    }

    /// Move the element at `from` to `to`, shifting intervening elements.
    ///
    /// Splice semantics, not a swap. Out-of-bounds indices and `from == to`
    /// leave the list unchanged.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tools.len() || to >= self.tools.len() || from == to {
            return false;
        }
        let tool = self.tools.remove(from);
        self.tools.insert(to, tool);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(id: &str) -> Tool {
        Tool::new(id.to_string(), id.to_uppercase())
    }

    fn ids(selection: &OrderedSelection) -> Vec<&str> {
        selection.tools().iter().map(|t| t.id.as_str()).collect()
    }

    fn abcd() -> OrderedSelection {
        OrderedSelection::from_persisted(vec![tool("a"), tool("b"), tool("c"), tool("d")])
    }

    #[test]
    fn move_uses_splice_semantics() {
        let mut selection = abcd();
        assert!(selection.move_item(0, 2));
        assert_eq!(ids(&selection), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn move_rejects_invalid_indices() {
        let mut selection = abcd();
        assert!(!selection.move_item(0, 4));
        assert!(!selection.move_item(9, 1));
        assert!(!selection.move_item(2, 2));
        assert_eq!(ids(&selection), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn add_is_idempotent_per_id() {
        let mut selection = OrderedSelection::new();
        assert!(selection.add(tool("a")));
        assert!(!selection.add(tool("a")));
        assert_eq!(ids(&selection), vec!["a"]);
    }

    #[test]
    fn remove_absent_is_a_noop() {
        let mut selection = abcd();
        assert!(!selection.remove("zzz"));
        assert_eq!(selection.len(), 4);
        assert!(selection.remove("b"));
        assert_eq!(ids(&selection), vec!["a", "c", "d"]);
    }

    #[test]
    fn ids_stay_unique_under_mixed_operations() {
        let mut selection = OrderedSelection::new();
        selection.add(tool("a"));
        selection.add(tool("b"));
        selection.add(tool("a"));
        selection.move_item(0, 1);
        selection.add(tool("c"));
        selection.remove("b");
        selection.add(tool("b"));

        let mut seen = std::collections::HashSet::new();
        assert!(selection.tools().iter().all(|t| seen.insert(&t.id)));
    }

    #[test]
    fn from_persisted_drops_duplicate_ids() {
        let selection = OrderedSelection::from_persisted(vec![
            tool("a"),
            tool("b"),
            Tool::new("a".to_string(), "Shadow".to_string()),
        ]);
        assert_eq!(ids(&selection), vec!["a", "b"]);
        assert_eq!(selection.tools()[0].title, "A");
    }
}
