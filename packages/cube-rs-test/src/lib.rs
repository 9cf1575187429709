pub mod fixtures;
pub mod handle;
pub mod harness;
pub mod network;
pub mod receipt;
