use std::sync::Arc;

use glowdesk_clients::ClientRepository;
use glowdesk_core::ClientId;

use crate::dto::ClientDto;
use crate::error::AppError;
use crate::mapper::ClientMapper;

/// Fetch a single client by id.
#[derive(Debug, Clone)]
pub struct GetClientQuery {
    pub entity_id: String,
    pub client_id: String,
}

pub struct GetClientHandler {
    repository: Arc<dyn ClientRepository>,
}

impl GetClientHandler {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    /// A missing or soft-deleted client yields `Ok(None)`; absence is not
    /// an error at the query layer.
    pub async fn execute(&self, query: GetClientQuery) -> Result<Option<ClientDto>, AppError> {
        let id: ClientId = query.client_id.parse()?;

        let client = self.repository.find_by_id(&query.entity_id, id).await?;

        Ok(client.as_ref().map(ClientMapper::to_dto))
    }
}
