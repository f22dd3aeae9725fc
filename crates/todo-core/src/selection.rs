//! Bulk Selection
//!
//! Ids ticked for bulk delete, in the order they were picked.

use crate::domain::Todo;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|s| s == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_string());
        }
    }

    /// True when every visible todo is ticked; false for an empty view
    pub fn all_selected(&self, visible: &[&Todo]) -> bool {
        !visible.is_empty() && visible.iter().all(|t| self.is_selected(&t.id))
    }

    /// Select-all checkbox: ticks every visible todo, or clears when all were ticked.
    pub fn toggle_all(&mut self, visible: &[&Todo]) {
        if self.all_selected(visible) {
            self.clear();
        } else {
            self.ids = visible.iter().map(|t| t.id.clone()).collect();
        }
    }

    /// Drops ids that are no longer in the list
    pub fn retain_present(&mut self, todos: &[Todo]) {
        self.ids.retain(|id| todos.iter().any(|t| t.id == *id));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::todo;
    use crate::domain::{Category, TodoStatus};

    #[test]
    fn test_toggle_keeps_pick_order() {
        let mut selection = Selection::default();
        selection.toggle("b");
        selection.toggle("a");
        selection.toggle("c");
        selection.toggle("a");
        assert_eq!(selection.ids(), ["b".to_string(), "c".to_string()]);
        assert!(!selection.is_selected("a"));
    }

    #[test]
    fn test_toggle_all() {
        let todos = vec![
            todo("1", Category::Work, TodoStatus::Pending),
            todo("2", Category::Work, TodoStatus::Pending),
        ];
        let visible: Vec<&Todo> = todos.iter().collect();
        let mut selection = Selection::default();

        selection.toggle("1");
        assert!(!selection.all_selected(&visible));

        selection.toggle_all(&visible);
        assert!(selection.all_selected(&visible));
        assert_eq!(selection.len(), 2);

        selection.toggle_all(&visible);
        assert!(selection.is_empty());
        assert!(!selection.all_selected(&[]));
    }

    #[test]
    fn test_retain_present() {
        let todos = vec![todo("1", Category::Work, TodoStatus::Pending)];
        let mut selection = Selection::default();
        selection.toggle("1");
        selection.toggle("gone");
        selection.retain_present(&todos);
        assert_eq!(selection.ids(), ["1".to_string()]);
    }
}
