use std::sync::Arc;

use glowdesk_clients::{ClientRepository, ClientUpdate, LeadSource};
use glowdesk_core::{ClientId, DomainError, Entity};

use crate::dto::ClientDto;
use crate::error::AppError;
use crate::input::{parse_optional_instagram, parse_optional_phone};
use crate::mapper::ClientMapper;

/// Partial update of an existing client.
///
/// Outer `None` on phone/instagram means "leave unchanged"; `Some(None)`
/// (a present-but-blank field at the transport edge) clears the value.
#[derive(Debug, Clone, Default)]
pub struct UpdateClientCommand {
    pub entity_id: String,
    pub client_id: String,
    pub name: Option<String>,
    pub phone: Option<Option<String>>,
    pub instagram: Option<Option<String>>,
    pub lead_source: Option<String>,
}

pub struct UpdateClientHandler {
    repository: Arc<dyn ClientRepository>,
}

impl UpdateClientHandler {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, command: UpdateClientCommand) -> Result<ClientDto, AppError> {
        let id: ClientId = command.client_id.parse().map_err(AppError::Domain)?;

        let mut client = self
            .repository
            .find_by_id(&command.entity_id, id)
            .await?
            .ok_or_else(|| DomainError::not_found("Client"))?;

        let phone = match command.phone {
            Some(raw) => Some(parse_optional_phone(raw.as_deref())?),
            None => None,
        };
        let instagram = match command.instagram {
            Some(raw) => Some(parse_optional_instagram(raw.as_deref())?),
            None => None,
        };
        // A present-but-blank lead source is not "absent": it normalizes
        // to "other" and is applied as a change.
        let lead_source = command.lead_source.as_deref().map(LeadSource::new);

        client.update_details(ClientUpdate {
            name: command.name,
            phone,
            instagram,
            lead_source,
        })?;

        self.repository.save(&client).await?;

        tracing::info!(
            client_id = %client.id(),
            entity_id = client.entity_id(),
            "client updated"
        );

        Ok(ClientMapper::to_dto(&client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seeded_repository, RecordingRepository};

    fn command(client_id: &str) -> UpdateClientCommand {
        UpdateClientCommand {
            entity_id: "e1".to_string(),
            client_id: client_id.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn updates_name_and_persists() {
        let (repo, id) = seeded_repository().await;
        let handler = UpdateClientHandler::new(repo.clone());

        let dto = handler
            .execute(UpdateClientCommand {
                name: Some("Renamed Client".to_string()),
                ..command(&id.to_string())
            })
            .await
            .unwrap();

        assert_eq!(dto.name, "Renamed Client");
        assert_eq!(repo.save_calls(), 2); // seed + update
    }

    #[tokio::test]
    async fn clears_phone_with_explicit_null() {
        let (repo, id) = seeded_repository().await;
        let handler = UpdateClientHandler::new(repo.clone());

        let dto = handler
            .execute(UpdateClientCommand {
                phone: Some(None),
                ..command(&id.to_string())
            })
            .await
            .unwrap();

        assert!(dto.phone.is_none());
    }

    #[tokio::test]
    async fn absent_fields_are_untouched() {
        let (repo, id) = seeded_repository().await;
        let handler = UpdateClientHandler::new(repo.clone());

        let dto = handler
            .execute(UpdateClientCommand {
                instagram: Some(Some("new.handle".to_string())),
                ..command(&id.to_string())
            })
            .await
            .unwrap();

        // Phone came from the seed and was not in the command.
        assert!(dto.phone.is_some());
        assert_eq!(dto.instagram.unwrap().handle, "new.handle");
    }

    #[tokio::test]
    async fn blank_lead_source_resets_to_other() {
        let (repo, id) = seeded_repository().await;
        let handler = UpdateClientHandler::new(repo.clone());

        handler
            .execute(UpdateClientCommand {
                lead_source: Some("referral".to_string()),
                ..command(&id.to_string())
            })
            .await
            .unwrap();

        let dto = handler
            .execute(UpdateClientCommand {
                lead_source: Some("   ".to_string()),
                ..command(&id.to_string())
            })
            .await
            .unwrap();

        assert_eq!(dto.lead_source, "other");
    }

    #[tokio::test]
    async fn missing_client_is_not_found() {
        let repo = Arc::new(RecordingRepository::default());
        let handler = UpdateClientHandler::new(repo.clone());

        let err = handler
            .execute(UpdateClientCommand {
                name: Some("Whoever".to_string()),
                ..command(&ClientId::new().to_string())
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Client not found");
        assert_eq!(repo.save_calls(), 0);
    }

    #[tokio::test]
    async fn invalid_name_is_rejected_before_save() {
        let (repo, id) = seeded_repository().await;
        let handler = UpdateClientHandler::new(repo.clone());

        let err = handler
            .execute(UpdateClientCommand {
                name: Some("x".to_string()),
                ..command(&id.to_string())
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Client name must be at least 2 characters");
        assert_eq!(repo.save_calls(), 1); // seed only
    }
}
