//! Shared view components.

pub mod footer;
pub mod host_nav;
pub mod navbar;
pub mod text_field;
