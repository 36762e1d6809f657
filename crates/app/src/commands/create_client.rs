use std::sync::Arc;

use glowdesk_clients::{Client, ClientRepository, CreateClientProps, LeadSource};
use glowdesk_core::Entity;

use crate::dto::ClientDto;
use crate::error::AppError;
use crate::input::{parse_optional_instagram, parse_optional_phone};
use crate::mapper::ClientMapper;

/// Register a new client for an entity.
#[derive(Debug, Clone)]
pub struct CreateClientCommand {
    pub entity_id: String,
    pub name: String,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub lead_source: Option<String>,
}

pub struct CreateClientHandler {
    repository: Arc<dyn ClientRepository>,
}

impl CreateClientHandler {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    /// Validates contact fields, allocates the entity's next display
    /// number, builds the aggregate, and persists it.
    pub async fn execute(&self, command: CreateClientCommand) -> Result<ClientDto, AppError> {
        let phone = parse_optional_phone(command.phone.as_deref())?;
        let instagram = parse_optional_instagram(command.instagram.as_deref())?;
        let lead_source = command
            .lead_source
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(LeadSource::new);

        let display_number = self
            .repository
            .next_display_number(&command.entity_id)
            .await?;

        let client = Client::create(CreateClientProps {
            entity_id: command.entity_id,
            name: command.name,
            display_number,
            lead_source,
            phone,
            instagram,
            id: None,
            created_at: None,
            updated_at: None,
        })?;

        self.repository.save(&client).await?;

        tracing::info!(
            client_id = %client.id(),
            entity_id = client.entity_id(),
            display_number,
            "client created"
        );

        Ok(ClientMapper::to_dto(&client))
    }
}
