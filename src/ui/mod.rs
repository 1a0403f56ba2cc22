pub mod chat_view;
pub mod dashboard;
pub mod header;
pub mod main_window;
pub mod sidebar;
pub mod style;
