//! UI Components
//!
//! Reusable Leptos components.

mod color_picker;
mod delete_confirm;
mod dialog_shell;
mod navbar;
mod password_field;
mod sidebar;
mod task_card;
mod toast_host;
mod workspace_card;

pub use color_picker::{ColorPicker, WORKSPACE_COLORS};
pub use delete_confirm::DeleteConfirm;
pub use dialog_shell::DialogShell;
pub use navbar::Navbar;
pub use password_field::PasswordField;
pub use sidebar::Sidebar;
pub use task_card::TaskCardView;
pub use toast_host::ToastHost;
pub use workspace_card::WorkspaceCardView;
