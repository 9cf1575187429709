pub mod core;
pub mod events;
pub mod selector;
pub mod token;
