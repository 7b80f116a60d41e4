//! Utility modules: configuration, subdomain extraction, persisted storage.

pub mod config;
pub mod storage;
pub mod subdomain;
