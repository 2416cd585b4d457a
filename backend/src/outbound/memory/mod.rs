//! Process-memory adapters.
//!
//! State held here lives exactly as long as the process; nothing is written
//! to disk.

mod in_memory_user_repository;

pub use in_memory_user_repository::InMemoryUserRepository;
