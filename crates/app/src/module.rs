use std::sync::Arc;

use glowdesk_clients::ClientRepository;

use crate::commands::create_client::CreateClientHandler;
use crate::commands::delete_client::DeleteClientHandler;
use crate::commands::update_client::UpdateClientHandler;
use crate::queries::get_client::GetClientHandler;
use crate::queries::list_clients::ListClientsHandler;

/// Composition root for the client use cases: one repository, five
/// handlers, wired once at startup.
pub struct ClientModule {
    pub create_client: CreateClientHandler,
    pub update_client: UpdateClientHandler,
    pub delete_client: DeleteClientHandler,
    pub get_client: GetClientHandler,
    pub list_clients: ListClientsHandler,
}

impl ClientModule {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self {
            create_client: CreateClientHandler::new(repository.clone()),
            update_client: UpdateClientHandler::new(repository.clone()),
            delete_client: DeleteClientHandler::new(repository.clone()),
            get_client: GetClientHandler::new(repository.clone()),
            list_clients: ListClientsHandler::new(repository),
        }
    }
}
