//! Shared utilities

pub mod browser;
pub mod date;
#[cfg_attr(not(test), allow(dead_code))]
pub mod debounce;

pub use date::{long_date, short_date};
pub use debounce::{DebounceOptions, Debouncer};
