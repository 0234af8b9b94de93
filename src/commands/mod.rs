//! CLI commands for ritual

pub mod dispatch;
pub mod example;
pub mod route;
