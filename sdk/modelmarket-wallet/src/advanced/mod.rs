//! Lower-level operations for callers that outgrow the basic bridge API.

pub mod signing;
