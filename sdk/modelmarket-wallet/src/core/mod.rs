//! Transport contract and network constants.

pub mod constants;
pub mod transport;
