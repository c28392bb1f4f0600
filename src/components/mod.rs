//! UI Components
//!
//! The three panels and the tab bar.

mod admin_panel;
mod confirm_panel;
mod order_panel;
mod tab_bar;

pub use admin_panel::AdminPanel;
pub use confirm_panel::ConfirmPanel;
pub use order_panel::OrderPanel;
pub use tab_bar::TabBar;
