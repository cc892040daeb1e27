//! Schema module - project configuration and persistence aggregate.

mod config;
mod project;

pub use config::*;
pub use project::*;
