//! In-memory repository double with call counters, for handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use glowdesk_clients::{
    Client, ClientRepository, ClientSearchFilters, CreateClientProps, PhoneNumber,
    RepositoryError,
};
use glowdesk_core::{ClientId, Entity};

#[derive(Default)]
pub(crate) struct RecordingRepository {
    clients: Mutex<Vec<Client>>,
    saves: AtomicUsize,
    deletes: AtomicUsize,
    next_numbers: AtomicUsize,
}

impl RecordingRepository {
    pub(crate) fn save_calls(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub(crate) fn delete_calls(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub(crate) fn next_number_calls(&self) -> usize {
        self.next_numbers.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Client>> {
        self.clients.lock().unwrap()
    }
}

#[async_trait]
impl ClientRepository for RecordingRepository {
    async fn find_by_id(
        &self,
        entity_id: &str,
        id: ClientId,
    ) -> Result<Option<Client>, RepositoryError> {
        Ok(self
            .lock()
            .iter()
            .find(|c| c.entity_id() == entity_id && *c.id() == id && !c.is_deleted())
            .cloned())
    }

    async fn find_by_display_number(
        &self,
        entity_id: &str,
        display_number: i64,
    ) -> Result<Option<Client>, RepositoryError> {
        Ok(self
            .lock()
            .iter()
            .find(|c| {
                c.entity_id() == entity_id
                    && c.display_number() == display_number
                    && !c.is_deleted()
            })
            .cloned())
    }

    async fn search(
        &self,
        entity_id: &str,
        filters: &ClientSearchFilters,
    ) -> Result<Vec<Client>, RepositoryError> {
        let mut matches: Vec<Client> = self
            .lock()
            .iter()
            .filter(|c| c.entity_id() == entity_id && !c.is_deleted())
            .filter(|c| match &filters.query {
                Some(q) => c.name().to_lowercase().contains(&q.to_lowercase()),
                None => true,
            })
            .filter(|c| {
                filters.lead_sources.is_empty()
                    || filters.lead_sources.contains(c.lead_source())
            })
            .filter(|c| match &filters.phone {
                Some(p) => c.phone().map(PhoneNumber::value) == Some(p.value()),
                None => true,
            })
            .filter(|c| match &filters.instagram {
                Some(i) => c.instagram().map(|ig| ig.handle()) == Some(i.handle()),
                None => true,
            })
            .cloned()
            .collect();

        matches.sort_by_key(Client::display_number);

        let offset = filters.offset.unwrap_or(0);
        let mut page: Vec<Client> = matches.into_iter().skip(offset).collect();
        if let Some(limit) = filters.limit {
            page.truncate(limit);
        }
        Ok(page)
    }

    async fn save(&self, client: &Client) -> Result<(), RepositoryError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let mut clients = self.lock();
        match clients.iter_mut().find(|c| c.id() == client.id()) {
            Some(existing) => *existing = client.clone(),
            None => clients.push(client.clone()),
        }
        Ok(())
    }

    async fn delete(&self, entity_id: &str, id: ClientId) -> Result<(), RepositoryError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.lock()
            .retain(|c| !(c.entity_id() == entity_id && *c.id() == id));
        Ok(())
    }

    async fn next_display_number(&self, entity_id: &str) -> Result<i64, RepositoryError> {
        self.next_numbers.fetch_add(1, Ordering::SeqCst);
        let max = self
            .lock()
            .iter()
            .filter(|c| c.entity_id() == entity_id)
            .map(Client::display_number)
            .max()
            .unwrap_or(0);
        Ok(max + 1)
    }
}

/// Repository pre-loaded with one client for entity `e1`: display number 1,
/// a French phone number, no instagram.
pub(crate) async fn seeded_repository() -> (Arc<RecordingRepository>, ClientId) {
    let repo = Arc::new(RecordingRepository::default());
    let client = Client::create(CreateClientProps {
        entity_id: "e1".to_string(),
        name: "Amira Benali".to_string(),
        display_number: 1,
        lead_source: None,
        phone: Some(PhoneNumber::new("+33612345678").unwrap()),
        instagram: None,
        id: None,
        created_at: None,
        updated_at: None,
    })
    .unwrap();
    let id = *client.id();
    repo.save(&client).await.unwrap();
    (repo, id)
}
