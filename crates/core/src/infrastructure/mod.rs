//! Infrastructure: ports and their adapters.

pub mod memory;
pub mod ports;
