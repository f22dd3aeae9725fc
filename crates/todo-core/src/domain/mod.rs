//! Domain Layer
//!
//! Todo, user and statistics records exchanged with the API.
//! This layer has NO dependencies beyond serde and chrono.

mod stats;
mod todo;
mod user;
mod wire;

pub use stats::TodoStats;
pub use todo::{BulkDeleteResult, Category, NewTodo, Priority, Todo, TodoPage, TodoPatch, TodoStatus};
pub use user::{AuthResponse, Role, User};

/// Whether `user` may delete `todo`.
///
/// Admins may delete anything. Others may only delete personal todos
/// they created; a todo assigned to them belongs to whoever assigned it.
pub fn can_delete(user: &User, todo: &Todo) -> bool {
    if user.is_admin() {
        return true;
    }
    todo.is_personal() && todo.created_by.as_ref().map_or(true, |creator| *creator == user.id)
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_admin_can_delete_anything() {
        let admin = user("root@x.com", Role::Admin);
        let todo = assigned(todo("1", Category::Work, TodoStatus::Pending), "bob@x.com");
        assert!(can_delete(&admin, &todo));
    }

    #[test]
    fn test_user_deletes_only_own_personal_todos() {
        let bob = user("bob@x.com", Role::User);
        let mut own = todo("1", Category::Work, TodoStatus::Pending);
        assert!(can_delete(&bob, &own));

        own.created_by = Some(bob.id.clone());
        assert!(can_delete(&bob, &own));

        let mut foreign = todo("2", Category::Work, TodoStatus::Pending);
        foreign.created_by = Some("someone-else".into());
        assert!(!can_delete(&bob, &foreign));

        let handed_down = assigned(todo("3", Category::Work, TodoStatus::Pending), "bob@x.com");
        assert!(!can_delete(&bob, &handed_down));
    }
}
