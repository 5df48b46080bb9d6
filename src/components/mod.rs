//! UI Components
//!
//! Leptos components for the page shell and the board.

mod board_view;
mod command_palette;
mod live_region;
mod sidebar;
mod top_bar;

pub use board_view::BoardView;
pub use command_palette::CommandPalette;
pub use live_region::LiveRegion;
pub use sidebar::Sidebar;
pub use top_bar::TopBar;
