//! CLI command implementations

pub mod relay;
pub mod render;
pub mod send;
