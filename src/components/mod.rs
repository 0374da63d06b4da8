//! UI Components
//!
//! Leptos components for the page shell and each page body.

mod dropdown;
mod layout;
mod member_modal;
mod message_panel;
mod modal;
mod notification_bell;
mod profile_menu;
mod project_detail;
mod project_form;
mod project_grid;
mod task_board;
mod task_context_menu;
mod task_list;
mod task_modal;
mod theme_toggle;

pub use dropdown::MenuFamily;
pub use layout::{Layout, NavItem};
pub use member_modal::AddMemberModal;
pub use message_panel::MessagePanel;
pub use modal::Modal;
pub use notification_bell::NotificationBell;
pub use profile_menu::ProfileMenu;
pub use project_detail::ProjectDetail;
pub use project_form::CreateProjectModal;
pub use project_grid::ProjectGrid;
pub use task_board::TaskBoard;
pub use task_context_menu::TaskContextMenu;
pub use task_list::MyTasks;
pub use task_modal::TaskModal;
pub use theme_toggle::ThemeToggle;
