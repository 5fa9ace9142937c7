//! Library components for the market-analysis upload CLI.

pub mod config;
pub mod logging;
pub mod pipeline;
