use std::sync::Arc;

use glowdesk_clients::ClientRepository;
use glowdesk_core::{ClientId, DomainError};

use crate::error::AppError;

/// Soft-delete a client.
#[derive(Debug, Clone)]
pub struct DeleteClientCommand {
    pub entity_id: String,
    pub client_id: String,
}

pub struct DeleteClientHandler {
    repository: Arc<dyn ClientRepository>,
}

impl DeleteClientHandler {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, command: DeleteClientCommand) -> Result<(), AppError> {
        let id: ClientId = command.client_id.parse().map_err(AppError::Domain)?;

        let mut client = self
            .repository
            .find_by_id(&command.entity_id, id)
            .await?
            .ok_or_else(|| DomainError::not_found("Client"))?;

        client.mark_deleted();
        self.repository.delete(&command.entity_id, id).await?;

        tracing::info!(
            client_id = %command.client_id,
            entity_id = command.entity_id,
            display_number = client.display_number(),
            "client deleted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seeded_repository, RecordingRepository};

    #[tokio::test]
    async fn deletes_an_existing_client() {
        let (repo, id) = seeded_repository().await;
        let handler = DeleteClientHandler::new(repo.clone());

        handler
            .execute(DeleteClientCommand {
                entity_id: "e1".to_string(),
                client_id: id.to_string(),
            })
            .await
            .unwrap();

        assert_eq!(repo.delete_calls(), 1);
        assert!(repo.find_by_id("e1", id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleting_a_missing_client_is_not_found() {
        let repo = Arc::new(RecordingRepository::default());
        let handler = DeleteClientHandler::new(repo.clone());

        let err = handler
            .execute(DeleteClientCommand {
                entity_id: "e1".to_string(),
                client_id: ClientId::new().to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Client not found");
        assert_eq!(repo.delete_calls(), 0);
    }

    #[tokio::test]
    async fn deleting_twice_reports_not_found_the_second_time() {
        let (repo, id) = seeded_repository().await;
        let handler = DeleteClientHandler::new(repo.clone());
        let command = DeleteClientCommand {
            entity_id: "e1".to_string(),
            client_id: id.to_string(),
        };

        handler.execute(command.clone()).await.unwrap();
        let err = handler.execute(command).await.unwrap_err();

        assert_eq!(err.to_string(), "Client not found");
    }
}
