//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`tenant`, `auth`, `host`) so pages can depend
//! on small focused models. Each is provided once by the app root as an
//! `RwSignal` context; `tenant` is additionally exposed as a plain immutable
//! value, since branding never changes within a page load.

pub mod auth;
pub mod host;
pub mod tenant;
