//! Aggregate Statistics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Category, Priority};

/// Counts derived from a todo collection; never persisted on its own
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub in_process: usize,
    pub overdue: usize,
    #[serde(default)]
    pub categories: BTreeMap<Category, usize>,
    #[serde(default)]
    pub priorities: BTreeMap<Priority, usize>,
}

impl TodoStats {
    pub fn category_count(&self, category: Category) -> usize {
        self.categories.get(&category).copied().unwrap_or(0)
    }

    pub fn priority_count(&self, priority: Priority) -> usize {
        self.priorities.get(&priority).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_server_stats() {
        let stats: TodoStats = serde_json::from_str(
            r#"{"total":3,"completed":1,"pending":1,"inProcess":1,"overdue":0,
                "categories":{"Work":2,"Health":1},"priorities":{"high":3}}"#,
        )
        .unwrap();
        assert_eq!(stats.in_process, 1);
        assert_eq!(stats.category_count(Category::Work), 2);
        assert_eq!(stats.category_count(Category::Shopping), 0);
        assert_eq!(stats.priority_count(Priority::High), 3);
    }
}
