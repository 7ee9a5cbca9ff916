//! Local stand-ins for the backend API

pub mod in_memory;

pub use in_memory::InMemoryService;
