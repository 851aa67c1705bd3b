//! Utility modules for the staging tool.

pub mod exec;
