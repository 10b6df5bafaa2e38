//! UI Components

mod filter_tabs;
mod header;
mod home;
mod login_form;
mod register_form;
mod todo_form;
mod todo_item;
mod todos_page;

pub use filter_tabs::FilterTabs;
pub use header::Header;
pub use home::Home;
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
pub use todos_page::TodosPage;
