//! CLI command implementations.

pub mod authorize;
pub mod check;
pub mod init;
pub mod render;
pub mod show;
