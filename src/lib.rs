//! oap-setup CLI library — exposes modules for integration testing.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod cli;
pub mod commands;
pub mod manifest;
pub mod output;
pub mod provision;
