//! The session bridge and its supporting state types.

pub mod bridge;
pub mod contract;
pub mod session;
