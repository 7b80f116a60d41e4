//! Networking: wire types, the HTTP client wrapper, and endpoint functions.
//!
//! DESIGN
//! ======
//! `client` owns the cross-cutting request/response policy (tenant header,
//! bearer token selection, auth-failure classification); `api` is one thin
//! function per backend endpoint; `types` mirrors the backend DTOs.

pub mod api;
pub mod client;
pub mod types;
