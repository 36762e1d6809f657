//! Application layer: command and query handlers over the client domain.
//!
//! Handlers are plain structs holding an `Arc<dyn ClientRepository>`; wiring
//! happens in [`module::ClientModule`]. Each handler performs one use case,
//! translating between transport-shaped inputs, domain calls, and DTOs.

pub mod commands;
pub mod dto;
pub mod error;
pub mod input;
pub mod mapper;
pub mod module;
pub mod queries;

pub use commands::create_client::{CreateClientCommand, CreateClientHandler};
pub use commands::delete_client::{DeleteClientCommand, DeleteClientHandler};
pub use commands::update_client::{UpdateClientCommand, UpdateClientHandler};
pub use dto::{ClientDto, InstagramDto, PhoneDto};
pub use error::AppError;
pub use mapper::ClientMapper;
pub use module::ClientModule;
pub use queries::get_client::{GetClientHandler, GetClientQuery};
pub use queries::list_clients::{ListClientsHandler, ListClientsQuery};

#[cfg(test)]
pub(crate) mod test_support;
