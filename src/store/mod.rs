//! Data source layer (in-memory, fixture-seeded).

pub mod memory;
pub mod seed;

pub use memory::MemoryStore;
