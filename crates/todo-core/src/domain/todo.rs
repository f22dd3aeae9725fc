//! Todo Entity
//!
//! A single task record with status/category/priority/assignment metadata.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::wire::{record_id, RecordRef};
use crate::error::{ClientError, ClientResult};

/// Fixed set of todo categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Personal,
    Work,
    Shopping,
    Health,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Personal,
        Category::Work,
        Category::Shopping,
        Category::Health,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

/// Lifecycle status of a todo
///
/// Allowed moves: pending -> in-process, in-process -> pending (pause),
/// in-process -> completed. Completed is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum TodoStatus {
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in-process")]
    InProcess,
    #[serde(rename = "completed")]
    Completed,
}

impl TodoStatus {
    pub const ALL: [TodoStatus; 3] = [TodoStatus::Pending, TodoStatus::InProcess, TodoStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Pending => "pending",
            TodoStatus::InProcess => "in-process",
            TodoStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }

    pub fn can_transition_to(self, next: TodoStatus) -> bool {
        use TodoStatus::*;
        matches!(
            (self, next),
            (Pending, Pending)
                | (InProcess, InProcess)
                | (Completed, Completed)
                | (Pending, InProcess)
                | (InProcess, Pending)
                | (InProcess, Completed)
        )
    }

    /// Start/Pause target. Completed stays completed.
    pub fn toggled(self) -> TodoStatus {
        match self {
            TodoStatus::Pending => TodoStatus::InProcess,
            TodoStatus::InProcess => TodoStatus::Pending,
            TodoStatus::Completed => TodoStatus::Completed,
        }
    }
}

/// A todo as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WireTodo")]
pub struct Todo {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: Category,
    pub priority: Priority,
    pub status: TodoStatus,
    #[serde(serialize_with = "due_date::serialize", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Assignee email; `None` means a personal todo owned by its creator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_note: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Incoming shape of a todo before ids are settled
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireTodo {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "_id", default)]
    mongo_id: Option<String>,
    title: String,
    #[serde(default)]
    description: Option<String>,
    category: Category,
    priority: Priority,
    status: TodoStatus,
    #[serde(default, deserialize_with = "due_date::deserialize")]
    due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_as_none")]
    assigned_to: Option<String>,
    #[serde(default)]
    created_by: Option<RecordRef>,
    #[serde(default)]
    completion_note: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
}

impl TryFrom<WireTodo> for Todo {
    type Error = String;

    fn try_from(wire: WireTodo) -> Result<Self, Self::Error> {
        Ok(Todo {
            id: record_id(wire.id, wire.mongo_id)?,
            title: wire.title,
            description: wire.description,
            category: wire.category,
            priority: wire.priority,
            status: wire.status,
            due_date: wire.due_date,
            assigned_to: wire.assigned_to,
            created_by: wire.created_by.and_then(RecordRef::into_id),
            completion_note: wire.completion_note,
            created_at: wire.created_at,
            completed_at: wire.completed_at,
        })
    }
}

impl Todo {
    pub fn is_personal(&self) -> bool {
        self.assigned_to.is_none()
    }

    pub fn is_assigned_to(&self, email: &str) -> bool {
        self.assigned_to.as_deref() == Some(email)
    }

    pub fn is_completed(&self) -> bool {
        self.status == TodoStatus::Completed
    }
}

/// Payload for creating a todo
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: Category,
    pub priority: Priority,
    #[serde(serialize_with = "due_date::serialize", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Trims the title and rejects an empty one. Blank optional text becomes `None`.
    pub fn validate(mut self) -> ClientResult<Self> {
        self.title = self.title.trim().to_string();
        if self.title.is_empty() {
            return Err(ClientError::Validation("title is required".into()));
        }
        self.description = self.description.filter(|d| !d.trim().is_empty());
        self.assigned_to = self.assigned_to.filter(|a| !a.trim().is_empty());
        Ok(self)
    }
}

/// Partial update; `None` fields are left untouched on the server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,
    #[serde(serialize_with = "due_date::serialize", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl TodoPatch {
    pub fn status(status: TodoStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn text(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// List response of `GET /api/todos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoPage {
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteResult {
    pub deleted_count: usize,
    #[serde(default)]
    pub message: String,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Due dates travel as `YYYY-MM-DD`; some servers echo a full timestamp.
mod due_date {
    use super::*;

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, FORMAT) {
            return Ok(Some(date));
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| Some(dt.with_timezone(&Utc).date_naive()))
            .map_err(|_| serde::de::Error::custom(format!("invalid due date: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "_id": "t1",
            "title": "Write report",
            "category": "Work",
            "priority": "high",
            "status": "in-process",
            "dueDate": "2024-05-01T00:00:00.000Z",
            "assignedTo": "",
            "createdAt": "2024-04-01T10:00:00Z"
        })
    }

    #[test]
    fn test_decode_server_todo() {
        let todo: Todo = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(todo.id, "t1");
        assert_eq!(todo.status, TodoStatus::InProcess);
        assert_eq!(todo.due_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert!(todo.is_personal());
        assert!(todo.completed_at.is_none());
    }

    #[test]
    fn test_decode_prefers_id_when_both_ids_present() {
        let mut value = sample_json();
        value["id"] = json!("virtual-1");
        let todo: Todo = serde_json::from_value(value).unwrap();
        assert_eq!(todo.id, "virtual-1");
    }

    #[test]
    fn test_decode_requires_some_id() {
        let mut value = sample_json();
        value.as_object_mut().unwrap().remove("_id");
        assert!(serde_json::from_value::<Todo>(value).is_err());
    }

    #[test]
    fn test_decode_created_by_shapes() {
        let created_by = |raw: serde_json::Value| {
            let mut value = sample_json();
            value["createdBy"] = raw;
            serde_json::from_value::<Todo>(value).unwrap().created_by
        };

        assert_eq!(created_by(json!("u1")), Some("u1".to_string()));
        assert_eq!(created_by(json!({"_id": "u1", "name": "Ann"})), Some("u1".to_string()));
        assert_eq!(created_by(json!({"id": "u2", "_id": "u1"})), Some("u2".to_string()));
        assert_eq!(created_by(json!({"name": "Ann"})), None);
        assert_eq!(created_by(json!(42)), None);
        assert_eq!(created_by(json!(null)), None);
    }

    #[test]
    fn test_encoded_todo_decodes_back() {
        let todo: Todo = serde_json::from_value(sample_json()).unwrap();
        let again: Todo = serde_json::from_value(serde_json::to_value(&todo).unwrap()).unwrap();
        assert_eq!(again, todo);
    }

    #[test]
    fn test_reject_unknown_category() {
        let mut value = sample_json();
        value["category"] = json!("Errands");
        assert!(serde_json::from_value::<Todo>(value).is_err());
    }

    #[test]
    fn test_reject_unknown_status() {
        let mut value = sample_json();
        value["status"] = json!("done");
        assert!(serde_json::from_value::<Todo>(value).is_err());
    }

    #[test]
    fn test_status_lifecycle() {
        use TodoStatus::*;
        assert!(Pending.can_transition_to(InProcess));
        assert!(InProcess.can_transition_to(Pending));
        assert!(InProcess.can_transition_to(Completed));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(InProcess));
        assert_eq!(Pending.toggled(), InProcess);
        assert_eq!(InProcess.toggled(), Pending);
    }

    #[test]
    fn test_new_todo_validation() {
        assert!(NewTodo::new("   ").validate().is_err());

        let todo = NewTodo {
            title: "  Buy milk ".into(),
            description: Some(" ".into()),
            assigned_to: Some(String::new()),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description, None);
        assert_eq!(todo.assigned_to, None);
    }

    #[test]
    fn test_new_todo_payload_omits_absent_fields() {
        let todo = NewTodo {
            title: "Gym".into(),
            category: Category::Health,
            priority: Priority::Low,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 2),
            ..Default::default()
        };
        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            value,
            json!({"title": "Gym", "category": "Health", "priority": "low", "dueDate": "2024-06-02"})
        );
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let value = serde_json::to_value(TodoPatch::status(TodoStatus::InProcess)).unwrap();
        assert_eq!(value, json!({"status": "in-process"}));
        assert!(TodoPatch::default().is_empty());
    }
}
