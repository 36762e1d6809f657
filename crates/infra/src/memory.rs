//! In-memory [`ClientRepository`] backed by a `RwLock`ed map of rows.
//!
//! Suitable for tests and single-process deployments. Rows are stored as
//! [`ClientRecord`]s per entity; aggregates are rebuilt through the factory
//! on every read, so a corrupt row fails loudly instead of leaking an
//! invalid aggregate.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::anyhow;
use async_trait::async_trait;

use glowdesk_clients::{
    Client, ClientFactory, ClientRecord, ClientRepository, ClientSearchFilters, RepositoryError,
};
use glowdesk_core::ClientId;

#[derive(Default)]
pub struct InMemoryClientRepository {
    rows: RwLock<HashMap<String, Vec<ClientRecord>>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, Vec<ClientRecord>>>, RepositoryError>
    {
        self.rows
            .read()
            .map_err(|_| RepositoryError(anyhow!("repository lock poisoned")))
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, Vec<ClientRecord>>>, RepositoryError>
    {
        self.rows
            .write()
            .map_err(|_| RepositoryError(anyhow!("repository lock poisoned")))
    }
}

fn rebuild(record: &ClientRecord) -> Result<Client, RepositoryError> {
    ClientFactory::from_record(record.clone())
        .map_err(|e| RepositoryError(anyhow!("corrupt client row {}: {e}", record.id)))
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn find_by_id(
        &self,
        entity_id: &str,
        id: ClientId,
    ) -> Result<Option<Client>, RepositoryError> {
        let rows = self.read()?;
        let wanted = id.to_string();
        rows.get(entity_id)
            .and_then(|records| {
                records
                    .iter()
                    .find(|r| r.id == wanted && !r.is_deleted)
                    .map(rebuild)
            })
            .transpose()
    }

    async fn find_by_display_number(
        &self,
        entity_id: &str,
        display_number: i64,
    ) -> Result<Option<Client>, RepositoryError> {
        let rows = self.read()?;
        rows.get(entity_id)
            .and_then(|records| {
                records
                    .iter()
                    .find(|r| r.display_number == display_number && !r.is_deleted)
                    .map(rebuild)
            })
            .transpose()
    }

    async fn search(
        &self,
        entity_id: &str,
        filters: &ClientSearchFilters,
    ) -> Result<Vec<Client>, RepositoryError> {
        let rows = self.read()?;
        let Some(records) = rows.get(entity_id) else {
            return Ok(Vec::new());
        };

        let query = filters.query.as_ref().map(|q| q.to_lowercase());
        let sources: Vec<&str> = filters.lead_sources.iter().map(|s| s.value()).collect();
        let phone = filters.phone.as_ref().map(|p| p.value());
        let instagram = filters.instagram.as_ref().map(|i| i.handle());

        let mut matched: Vec<&ClientRecord> = records
            .iter()
            .filter(|r| !r.is_deleted)
            .filter(|r| match &query {
                Some(q) => r.name.to_lowercase().contains(q),
                None => true,
            })
            .filter(|r| {
                sources.is_empty()
                    || r.lead_source
                        .as_deref()
                        .is_some_and(|s| sources.contains(&s))
            })
            .filter(|r| match phone {
                Some(p) => r.phone.as_deref() == Some(p),
                None => true,
            })
            .filter(|r| match instagram {
                Some(i) => r.instagram.as_deref() == Some(i),
                None => true,
            })
            .collect();

        matched.sort_by_key(|r| r.display_number);

        let offset = filters.offset.unwrap_or(0);
        let limit = filters.limit.unwrap_or(usize::MAX);

        matched
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(rebuild)
            .collect()
    }

    async fn save(&self, client: &Client) -> Result<(), RepositoryError> {
        let record = ClientFactory::to_record(client);
        let mut rows = self.write()?;
        let records = rows.entry(record.entity_id.clone()).or_default();

        // Uniqueness is enforced here, not in the aggregate: two writers can
        // both have been handed the same next_display_number.
        let clash = records
            .iter()
            .any(|r| r.id != record.id && r.display_number == record.display_number);
        if clash {
            return Err(RepositoryError(anyhow!(
                "display number {} already taken for entity {}",
                record.display_number,
                record.entity_id
            )));
        }

        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        Ok(())
    }

    async fn delete(&self, entity_id: &str, id: ClientId) -> Result<(), RepositoryError> {
        let mut rows = self.write()?;
        let wanted = id.to_string();
        if let Some(records) = rows.get_mut(entity_id) {
            records.retain(|r| r.id != wanted);
        }
        Ok(())
    }

    async fn next_display_number(&self, entity_id: &str) -> Result<i64, RepositoryError> {
        let rows = self.read()?;
        let max = rows
            .get(entity_id)
            .map(|records| records.iter().map(|r| r.display_number).max().unwrap_or(0))
            .unwrap_or(0);
        Ok(max + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glowdesk_clients::{CreateClientProps, PhoneNumber};
    use glowdesk_core::Entity;

    fn client(entity_id: &str, name: &str, display_number: i64) -> Client {
        Client::create(CreateClientProps {
            entity_id: entity_id.to_string(),
            name: name.to_string(),
            display_number,
            lead_source: None,
            phone: Some(PhoneNumber::new("+33612345678").unwrap()),
            instagram: None,
            id: None,
            created_at: None,
            updated_at: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn save_and_find_round_trip() {
        let repo = InMemoryClientRepository::new();
        let c = client("e1", "Amira Benali", 1);
        repo.save(&c).await.unwrap();

        let found = repo.find_by_id("e1", *c.id()).await.unwrap().unwrap();
        assert_eq!(found.name(), "Amira Benali");
        assert_eq!(found.phone().unwrap().value(), "+33612345678");
    }

    #[tokio::test]
    async fn duplicate_display_number_is_rejected() {
        let repo = InMemoryClientRepository::new();
        repo.save(&client("e1", "Amira Benali", 1)).await.unwrap();

        let err = repo
            .save(&client("e1", "Lena Park", 1))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("display number 1 already taken"));

        // The same number is free in another entity.
        repo.save(&client("e2", "Lena Park", 1)).await.unwrap();
    }

    #[tokio::test]
    async fn resaving_the_same_client_is_an_update() {
        let repo = InMemoryClientRepository::new();
        let mut c = client("e1", "Amira Benali", 1);
        repo.save(&c).await.unwrap();

        c.update_details(glowdesk_clients::ClientUpdate {
            name: Some("Renamed".to_string()),
            ..Default::default()
        })
        .unwrap();
        repo.save(&c).await.unwrap();

        let found = repo.find_by_id("e1", *c.id()).await.unwrap().unwrap();
        assert_eq!(found.name(), "Renamed");
    }

    #[tokio::test]
    async fn delete_removes_the_row_and_frees_its_number() {
        let repo = InMemoryClientRepository::new();
        let c = client("e1", "Amira Benali", 1);
        repo.save(&c).await.unwrap();
        repo.delete("e1", *c.id()).await.unwrap();

        assert!(repo.find_by_id("e1", *c.id()).await.unwrap().is_none());
        assert!(repo.find_by_display_number("e1", 1).await.unwrap().is_none());
        assert_eq!(repo.next_display_number("e1").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn reads_skip_rows_flagged_as_deleted() {
        let repo = InMemoryClientRepository::new();
        let mut c = client("e1", "Amira Benali", 1);
        repo.save(&c).await.unwrap();

        c.mark_deleted();
        repo.save(&c).await.unwrap();

        assert!(repo.find_by_id("e1", *c.id()).await.unwrap().is_none());
        assert!(repo.find_by_display_number("e1", 1).await.unwrap().is_none());
        assert!(repo.search("e1", &ClientSearchFilters::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn numbering_starts_at_one_per_entity() {
        let repo = InMemoryClientRepository::new();
        assert_eq!(repo.next_display_number("fresh").await.unwrap(), 1);
    }
}
