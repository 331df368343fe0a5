//! Modal overlays drawn on top of the allocators table.

pub mod disclosure;
pub mod help;
pub mod message;
