//! Infrastructure layer - Store connections, cache manager and logging

pub mod cache;
pub mod logging;
