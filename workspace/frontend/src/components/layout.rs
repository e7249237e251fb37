mod layout;
mod navbar;
mod sidebar;

pub use layout::Layout;
