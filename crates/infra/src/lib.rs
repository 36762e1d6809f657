//! Infrastructure adapters: storage implementations and event plumbing.

pub mod dispatcher;
pub mod memory;

pub use dispatcher::dispatch_events;
pub use memory::InMemoryClientRepository;
