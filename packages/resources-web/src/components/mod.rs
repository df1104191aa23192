//! Reusable UI components

// Reusable widget with no page mounting it yet
#[cfg_attr(not(test), allow(dead_code))]
mod infinite_scroll;
mod loading;
mod newsletter;
mod resource_card;

#[allow(unused_imports)]
pub use infinite_scroll::*;
pub use loading::*;
pub use newsletter::*;
pub use resource_card::*;
