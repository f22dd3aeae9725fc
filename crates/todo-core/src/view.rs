//! Dashboard View Derivation
//!
//! Pure functions behind the dashboard: which tabs a role sees, which
//! todos each tab shows, remaining days to a due date, and the stats
//! shown on the analytics cards.

use chrono::{DateTime, NaiveDate, Utc};

use crate::client::TodoFilters;
use crate::domain::{Category, Priority, Role, Todo, TodoStats, TodoStatus, User};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Create,
    List,
    InProgress,
    Completed,
    Assignments,
    Analytics,
}

impl Tab {
    pub fn for_role(role: Role) -> &'static [Tab] {
        match role {
            Role::Admin => &[Tab::Create, Tab::List, Tab::Assignments, Tab::Analytics],
            Role::User => &[Tab::List, Tab::InProgress, Tab::Completed, Tab::Analytics],
        }
    }

    pub fn default_for(role: Role) -> Tab {
        match role {
            Role::Admin => Tab::Create,
            Role::User => Tab::List,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Create => "Create",
            Tab::List => "List",
            Tab::InProgress => "In Progress",
            Tab::Completed => "Completed",
            Tab::Assignments => "Assigned Tasks",
            Tab::Analytics => "Analytics",
        }
    }

    pub fn is_available_to(&self, role: Role) -> bool {
        Self::for_role(role).contains(self)
    }
}

/// Whether `todo` belongs to `user`'s own view: personal or assigned to them
pub fn is_visible_to(user: &User, todo: &Todo) -> bool {
    todo.is_personal() || todo.is_assigned_to(&user.email)
}

/// Role-aware predicate selecting the todos a tab shows.
///
/// Users only ever see their own todos, split by status across the
/// list/in-progress/completed tabs. Admins see their own todos on the
/// create/list tabs and todos handed to others on the assignments tab.
pub fn tab_predicate<'a>(user: &'a User, tab: Tab) -> impl Fn(&Todo) -> bool + 'a {
    move |todo: &Todo| match (user.role, tab) {
        (Role::User, Tab::List) => todo.status == TodoStatus::Pending && is_visible_to(user, todo),
        (Role::User, Tab::InProgress) => todo.status == TodoStatus::InProcess && is_visible_to(user, todo),
        (Role::User, Tab::Completed) => todo.status == TodoStatus::Completed && is_visible_to(user, todo),
        (Role::User, _) => is_visible_to(user, todo),
        (Role::Admin, Tab::Create | Tab::List) => is_visible_to(user, todo),
        (Role::Admin, Tab::Assignments) => !is_visible_to(user, todo),
        (Role::Admin, _) => true,
    }
}

/// Filters applied on top of the tab predicate.
///
/// Mirrors the server-side filters so todos added or changed after a
/// filtered fetch still obey them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub status: Option<TodoStatus>,
    pub category: Option<Category>,
    pub overdue: bool,
}

impl ListFilter {
    pub fn matches(&self, todo: &Todo, now: DateTime<Utc>) -> bool {
        self.status.map_or(true, |s| todo.status == s)
            && self.category.map_or(true, |c| todo.category == c)
            && (!self.overdue || is_overdue(todo, now))
    }
}

impl From<&TodoFilters> for ListFilter {
    fn from(filters: &TodoFilters) -> Self {
        Self {
            status: filters.status,
            category: filters.category,
            overdue: filters.overdue == Some(true),
        }
    }
}

pub fn filter_todos<'a>(
    todos: &'a [Todo],
    user: &User,
    tab: Tab,
    filter: &ListFilter,
    now: DateTime<Utc>,
) -> Vec<&'a Todo> {
    let visible = tab_predicate(user, tab);
    todos.iter().filter(|t| filter.matches(t, now) && visible(*t)).collect()
}

fn due_instant(due: NaiveDate) -> DateTime<Utc> {
    due.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Whole days until `due` (taken as midnight UTC), rounded up.
///
/// Negative means overdue, zero means due today.
pub fn remaining_days(due: NaiveDate, now: DateTime<Utc>) -> i64 {
    let ms = (due_instant(due) - now).num_milliseconds();
    let days = ms.div_euclid(DAY_MS);
    if ms.rem_euclid(DAY_MS) == 0 {
        days
    } else {
        days + 1
    }
}

/// Badge text for a `remaining_days` result
pub fn due_label(days: i64) -> String {
    match days {
        0 => "Due today".to_string(),
        1 => "1 day left".to_string(),
        d if d > 1 => format!("{} days left", d),
        -1 => "1 day overdue".to_string(),
        d => format!("{} days overdue", -d),
    }
}

/// Due strictly before `now` and not completed
pub fn is_overdue(todo: &Todo, now: DateTime<Utc>) -> bool {
    !todo.is_completed() && todo.due_date.is_some_and(|due| due_instant(due) < now)
}

/// Stats over the loaded list: everything for admins, only the user's own todos otherwise.
pub fn derive_stats(todos: &[Todo], user: &User, now: DateTime<Utc>) -> TodoStats {
    let mine: Vec<&Todo> = todos
        .iter()
        .filter(|t| user.is_admin() || is_visible_to(user, t))
        .collect();
    let with_status = |status: TodoStatus| mine.iter().filter(|t| t.status == status).count();

    TodoStats {
        total: mine.len(),
        completed: with_status(TodoStatus::Completed),
        pending: with_status(TodoStatus::Pending),
        in_process: with_status(TodoStatus::InProcess),
        overdue: mine.iter().filter(|t| is_overdue(t, now)).count(),
        categories: Category::ALL
            .iter()
            .map(|c| (*c, mine.iter().filter(|t| t.category == *c).count()))
            .collect(),
        priorities: Priority::ALL
            .iter()
            .map(|p| (*p, mine.iter().filter(|t| t.priority == *p).count()))
            .collect(),
    }
}

/// Share of `count` in the total, as a percentage for progress bars
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domain::fixtures::{assigned, todo, user};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn now() -> DateTime<Utc> {
        at(2024, 5, 10, 10)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn mixed() -> Vec<Todo> {
        vec![
            todo("mine-pending", Category::Work, TodoStatus::Pending),
            todo("mine-active", Category::Health, TodoStatus::InProcess),
            assigned(todo("to-bob", Category::Work, TodoStatus::Pending), "bob@x.com"),
            assigned(todo("to-carol", Category::Shopping, TodoStatus::Completed), "carol@x.com"),
            assigned(todo("to-admin", Category::Other, TodoStatus::Pending), "root@x.com"),
        ]
    }

    fn ids(todos: Vec<&Todo>) -> Vec<&str> {
        todos.into_iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_tabs_by_role() {
        assert_eq!(Tab::default_for(Role::Admin), Tab::Create);
        assert_eq!(Tab::default_for(Role::User), Tab::List);
        assert!(Tab::Assignments.is_available_to(Role::Admin));
        assert!(!Tab::Assignments.is_available_to(Role::User));
        assert!(!Tab::Create.is_available_to(Role::User));
        assert!(Tab::InProgress.is_available_to(Role::User));
    }

    #[test]
    fn test_admin_assignment_lands_in_assignments_not_list() {
        let admin = user("root@x.com", Role::Admin);
        let todos = mixed();
        let none = ListFilter::default();

        let list = ids(filter_todos(&todos, &admin, Tab::List, &none, now()));
        assert_eq!(list, vec!["mine-pending", "mine-active", "to-admin"]);

        let assignments = ids(filter_todos(&todos, &admin, Tab::Assignments, &none, now()));
        assert_eq!(assignments, vec!["to-bob", "to-carol"]);

        assert_eq!(filter_todos(&todos, &admin, Tab::Analytics, &none, now()).len(), 5);
    }

    #[test]
    fn test_user_never_sees_other_users_todos() {
        let bob = user("bob@x.com", Role::User);
        let todos = mixed();
        for tab in [Tab::Create, Tab::List, Tab::InProgress, Tab::Completed, Tab::Assignments, Tab::Analytics] {
            for t in filter_todos(&todos, &bob, tab, &ListFilter::default(), now()) {
                assert!(t.assigned_to.is_none() || t.is_assigned_to("bob@x.com"), "{tab:?} leaked {}", t.id);
            }
        }
    }

    #[test]
    fn test_user_tabs_split_by_status() {
        let bob = user("bob@x.com", Role::User);
        let todos = mixed();
        let none = ListFilter::default();

        assert_eq!(ids(filter_todos(&todos, &bob, Tab::List, &none, now())), vec!["mine-pending", "to-bob"]);
        assert_eq!(ids(filter_todos(&todos, &bob, Tab::InProgress, &none, now())), vec!["mine-active"]);
        assert!(filter_todos(&todos, &bob, Tab::Completed, &none, now()).is_empty());
    }

    #[test]
    fn test_category_and_status_filter() {
        let admin = user("root@x.com", Role::Admin);
        let todos = vec![
            todo("w1", Category::Work, TodoStatus::Pending),
            todo("w2", Category::Work, TodoStatus::Pending),
            todo("w3", Category::Work, TodoStatus::Completed),
            todo("p1", Category::Personal, TodoStatus::Pending),
        ];
        let filter = ListFilter {
            status: Some(TodoStatus::Pending),
            category: Some(Category::Work),
            ..Default::default()
        };

        assert_eq!(ids(filter_todos(&todos, &admin, Tab::List, &filter, now())), vec!["w1", "w2"]);
    }

    #[test]
    fn test_overdue_filter_applies_locally() {
        let admin = user("root@x.com", Role::Admin);
        let mut late = todo("late", Category::Work, TodoStatus::Pending);
        late.due_date = Some(date(2024, 5, 1));
        let mut finished = todo("finished", Category::Work, TodoStatus::Completed);
        finished.due_date = Some(date(2024, 5, 1));
        // Added after an overdue-only fetch
        let fresh = todo("fresh", Category::Work, TodoStatus::Pending);
        let todos = vec![fresh, late, finished];

        let filter = ListFilter::from(&TodoFilters {
            overdue: Some(true),
            ..Default::default()
        });
        assert!(filter.overdue);
        assert_eq!(ids(filter_todos(&todos, &admin, Tab::List, &filter, now())), vec!["late"]);

        let all = ListFilter::from(&TodoFilters::default());
        assert_eq!(filter_todos(&todos, &admin, Tab::List, &all, now()).len(), 3);
    }

    #[test]
    fn test_remaining_days() {
        let now = at(2024, 5, 10, 10);
        assert_eq!(remaining_days(date(2024, 5, 10), now), 0);
        assert_eq!(remaining_days(date(2024, 5, 11), now), 1);
        assert_eq!(remaining_days(date(2024, 5, 15), now), 5);
        assert_eq!(remaining_days(date(2024, 5, 9), now), -1);
        assert_eq!(remaining_days(date(2024, 5, 1), now), -9);
        assert_eq!(remaining_days(date(2024, 5, 11), at(2024, 5, 10, 0)), 1);
    }

    #[test]
    fn test_due_label() {
        assert_eq!(due_label(0), "Due today");
        assert_eq!(due_label(1), "1 day left");
        assert_eq!(due_label(4), "4 days left");
        assert_eq!(due_label(-1), "1 day overdue");
        assert_eq!(due_label(-3), "3 days overdue");
    }

    #[test]
    fn test_remaining_days_is_stable_for_same_instant() {
        let now = at(2024, 5, 10, 23);
        let due = date(2024, 6, 1);
        assert_eq!(remaining_days(due, now), remaining_days(due, now));
    }

    #[test]
    fn test_overdue_ignores_completed() {
        let now = at(2024, 5, 10, 10);
        let mut late = todo("late", Category::Work, TodoStatus::Pending);
        late.due_date = Some(date(2024, 5, 1));
        assert!(is_overdue(&late, now));

        late.status = TodoStatus::Completed;
        assert!(!is_overdue(&late, now));

        let undated = todo("undated", Category::Work, TodoStatus::Pending);
        assert!(!is_overdue(&undated, now));
    }

    #[test]
    fn test_stats_for_user_cover_only_own_todos() {
        let bob = user("bob@x.com", Role::User);
        let mut todos = mixed();
        todos[0].due_date = Some(date(2024, 1, 1));

        let stats = derive_stats(&todos, &bob, at(2024, 5, 10, 10));

        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.in_process, 1);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.category_count(Category::Work), 2);
        assert_eq!(stats.category_count(Category::Shopping), 0);
        assert_eq!(stats.categories.len(), Category::ALL.len());
        assert_eq!(stats.priority_count(Priority::Medium), 3);
        assert_eq!(stats.priorities.len(), Priority::ALL.len());
    }

    #[test]
    fn test_stats_for_admin_cover_everything() {
        let admin = user("root@x.com", Role::Admin);
        let stats = derive_stats(&mixed(), &admin, at(2024, 5, 10, 10));
        assert_eq!(stats.total, 5);
        assert_eq!(stats.completed, 1);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(3, 0), 0.0);
    }
}
