pub mod features;
pub mod layout;
pub mod service_icon;
pub mod toaster;
