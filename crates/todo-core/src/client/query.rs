//! Request Paths and Query Strings

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::domain::{Category, Priority, TodoStatus};

/// Everything but RFC 3986 unreserved characters
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Server-side list filters; absent keys are omitted from the query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoFilters {
    pub status: Option<TodoStatus>,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub overdue: Option<bool>,
}

impl TodoFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// `status=..&category=..&priority=..&overdue=..`, without a leading `?`
    pub fn to_query(&self) -> String {
        let overdue = self.overdue.map(|o| if o { "true" } else { "false" });
        [
            ("status", self.status.map(|s| s.as_str())),
            ("category", self.category.map(|c| c.as_str())),
            ("priority", self.priority.map(|p| p.as_str())),
            ("overdue", overdue),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, utf8_percent_encode(v, COMPONENT))))
        .collect::<Vec<_>>()
        .join("&")
    }
}

pub(crate) fn todos_path(filters: &TodoFilters) -> String {
    let query = filters.to_query();
    if query.is_empty() {
        "/api/todos".to_string()
    } else {
        format!("/api/todos?{}", query)
    }
}

pub(crate) fn todo_path(id: &str) -> String {
    format!("/api/todos/{}", utf8_percent_encode(id, COMPONENT))
}

pub(crate) fn complete_path(id: &str) -> String {
    format!("{}/complete", todo_path(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_have_no_query() {
        assert_eq!(todos_path(&TodoFilters::default()), "/api/todos");
    }

    #[test]
    fn test_only_present_keys_sent() {
        let filters = TodoFilters {
            status: Some(TodoStatus::InProcess),
            overdue: Some(true),
            ..Default::default()
        };
        assert_eq!(filters.to_query(), "status=in-process&overdue=true");
    }

    #[test]
    fn test_key_order_is_fixed() {
        let filters = TodoFilters {
            status: Some(TodoStatus::Pending),
            category: Some(Category::Work),
            priority: Some(Priority::High),
            overdue: Some(false),
        };
        assert_eq!(
            todos_path(&filters),
            "/api/todos?status=pending&category=Work&priority=high&overdue=false"
        );
    }

    #[test]
    fn test_ids_are_escaped() {
        assert_eq!(todo_path("abc-123"), "/api/todos/abc-123");
        assert_eq!(todo_path("a/b c"), "/api/todos/a%2Fb%20c");
        assert_eq!(complete_path("42"), "/api/todos/42/complete");
    }
}
