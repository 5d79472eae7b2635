//! Request models for API endpoints.

pub mod post;
pub mod user;

pub use post::*;
pub use user::*;
