//! Page components

mod not_found;
mod resource_detail;
mod resources;

pub use not_found::*;
pub use resource_detail::*;
pub use resources::*;
