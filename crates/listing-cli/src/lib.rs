//! CLI library components for the listings cleaning step.

pub mod config;
pub mod logging;
pub mod pipeline;
