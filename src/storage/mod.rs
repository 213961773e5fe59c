//! Storage implementations for the query layer

pub mod in_memory;

pub use in_memory::InMemoryMemberDao;
