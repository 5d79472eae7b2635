//! HTTP request handlers organized by resource.

pub mod post_handler;
pub mod user_handler;

pub use post_handler::*;
pub use user_handler::*;
