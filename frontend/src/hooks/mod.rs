pub mod use_count_up;

pub use use_count_up::{use_count_up, use_count_up_default};
