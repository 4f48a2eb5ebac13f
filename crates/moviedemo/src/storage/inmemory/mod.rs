//! In-memory storage backend.

mod gateway;

pub use gateway::{InMemoryGateway, DEFAULT_PAGE_SIZE};
