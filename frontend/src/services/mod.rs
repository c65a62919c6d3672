pub mod clipboard;
pub mod icons;
pub mod logging;
