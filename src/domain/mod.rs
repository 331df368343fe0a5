//! Domain types for the lazycap allocator explorer.
//!
//! - [`allocator`] - Allocator records and dataset loading
//! - [`chain`] - Network and height-to-date constants
//! - [`error`] - Domain error type

pub mod allocator;
pub mod chain;
pub mod error;

pub use allocator::{AllocatorRecord, AllowanceEvent, load_allocators, parse_allocators};
pub use chain::{ChainParams, Network};
pub use error::DomainError;
