//! 内存存储

pub mod memory_store;

pub use memory_store::MemoryStore;
