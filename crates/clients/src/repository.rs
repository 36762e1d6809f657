//! Persistence contract for the [`Client`] aggregate.

use async_trait::async_trait;

use glowdesk_core::ClientId;

use crate::client::Client;
use crate::instagram::Instagram;
use crate::lead_source::LeadSource;
use crate::phone::PhoneNumber;

/// Storage-layer failure. Domain validation never surfaces here; this is
/// for infrastructure faults (connection loss, constraint violations,
/// corrupt rows).
#[derive(Debug, thiserror::Error)]
#[error("storage failure: {0}")]
pub struct RepositoryError(#[from] pub anyhow::Error);

/// Search criteria for [`ClientRepository::search`]. All fields optional;
/// an empty filter matches every non-deleted client of the entity.
#[derive(Debug, Clone, Default)]
pub struct ClientSearchFilters {
    /// Case-insensitive substring match on the client name.
    pub query: Option<String>,
    /// Match clients whose lead source is any of these.
    pub lead_sources: Vec<LeadSource>,
    /// Exact match on the stored phone value.
    pub phone: Option<PhoneNumber>,
    /// Exact match on the instagram handle.
    pub instagram: Option<Instagram>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Repository abstraction over client storage.
///
/// Every operation is scoped to an entity: a client is only visible through
/// its owning entity's id. Implementations must enforce display-number
/// uniqueness per entity at save time, since concurrent creators can both
/// observe the same `next_display_number`.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Look up a client by id within an entity. Soft-deleted clients are
    /// not returned.
    async fn find_by_id(
        &self,
        entity_id: &str,
        id: ClientId,
    ) -> Result<Option<Client>, RepositoryError>;

    /// Look up a client by its per-entity display number.
    async fn find_by_display_number(
        &self,
        entity_id: &str,
        display_number: i64,
    ) -> Result<Option<Client>, RepositoryError>;

    /// List non-deleted clients of an entity matching the filters, ordered
    /// by display number.
    async fn search(
        &self,
        entity_id: &str,
        filters: &ClientSearchFilters,
    ) -> Result<Vec<Client>, RepositoryError>;

    /// Insert or update the aggregate's current state.
    async fn save(&self, client: &Client) -> Result<(), RepositoryError>;

    /// Physically remove a client's row. The domain-level soft delete
    /// ([`Client::mark_deleted`]) happens before this call; the two are
    /// sequenced by the delete handler. Missing ids are not an error.
    async fn delete(&self, entity_id: &str, id: ClientId) -> Result<(), RepositoryError>;

    /// Next free display number for an entity: one past the current
    /// maximum, starting at 1.
    async fn next_display_number(&self, entity_id: &str) -> Result<i64, RepositoryError>;
}
