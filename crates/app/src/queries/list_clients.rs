use std::sync::Arc;

use glowdesk_clients::{ClientRepository, ClientSearchFilters, LeadSource};

use crate::dto::ClientDto;
use crate::error::AppError;
use crate::input::{parse_optional_instagram, parse_optional_phone};
use crate::mapper::ClientMapper;

/// List an entity's clients, optionally filtered.
#[derive(Debug, Clone, Default)]
pub struct ListClientsQuery {
    pub entity_id: String,
    /// Case-insensitive substring match on the name.
    pub search: Option<String>,
    pub lead_sources: Vec<String>,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub struct ListClientsHandler {
    repository: Arc<dyn ClientRepository>,
}

impl ListClientsHandler {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    /// Filter values are validated fail-fast before storage is queried; a
    /// malformed phone filter is an error, not an empty result.
    pub async fn execute(&self, query: ListClientsQuery) -> Result<Vec<ClientDto>, AppError> {
        let filters = ClientSearchFilters {
            query: query
                .search
                .filter(|q| !q.trim().is_empty())
                .map(|q| q.trim().to_string()),
            lead_sources: query
                .lead_sources
                .iter()
                .map(|s| LeadSource::new(s))
                .collect(),
            phone: parse_optional_phone(query.phone.as_deref())?,
            instagram: parse_optional_instagram(query.instagram.as_deref())?,
            limit: query.limit,
            offset: query.offset,
        };

        let clients = self.repository.search(&query.entity_id, &filters).await?;

        tracing::debug!(
            entity_id = query.entity_id,
            count = clients.len(),
            "clients listed"
        );

        Ok(clients.iter().map(ClientMapper::to_dto).collect())
    }
}
