//! In-memory task list HTTP service.

pub mod server;
