//! UI Components
//!
//! Reusable Leptos components.

mod analytics;
mod complete_modal;
mod delete_confirm_button;
mod error_banner;
mod filter_bar;
mod header_bar;
mod login_form;
mod option_selector;
mod tab_bar;
mod todo_form;
mod todo_list;
mod todo_row;

pub use analytics::Analytics;
pub use complete_modal::CompleteModal;
pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use filter_bar::FilterBar;
pub use header_bar::HeaderBar;
pub use login_form::LoginForm;
pub use option_selector::OptionSelector;
pub use tab_bar::TabBar;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
