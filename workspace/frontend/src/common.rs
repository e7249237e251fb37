pub mod notify;
pub mod toast;
