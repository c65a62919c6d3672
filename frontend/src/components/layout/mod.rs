pub mod header;
pub mod notifications_popover;
pub mod sidebar;

pub use header::Header;
pub use sidebar::Sidebar;
