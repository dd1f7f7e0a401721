//! Command implementations

pub mod provision;
pub mod setup;
pub mod verify;
pub mod version;
