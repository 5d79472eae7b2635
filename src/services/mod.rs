//! Services organized by resource.
//!
//! Both resources share one generic CRUD service; the aliases below are the
//! two instantiations the handlers work against.

pub mod crud_service;

pub use crud_service::CrudService;

use crate::models::{Post, User};

pub type PostService = CrudService<Post>;
pub type UserService = CrudService<User>;
