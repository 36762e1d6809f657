//! Reconstruction of [`Client`] aggregates from raw storage rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use glowdesk_core::{ClientId, DomainResult};

use crate::client::{Client, PersistedClientProps};
use crate::instagram::Instagram;
use crate::lead_source::LeadSource;
use crate::phone::PhoneNumber;

/// Raw client row as stored. Plain strings, no value objects; the factory
/// turns this back into a validated aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: String,
    pub entity_id: String,
    pub name: String,
    pub display_number: i64,
    pub lead_source: Option<String>,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

/// Maps between storage rows and the aggregate.
pub struct ClientFactory;

impl ClientFactory {
    /// Rebuild an aggregate from a stored row. Value objects are
    /// re-validated, so a corrupt row surfaces as a domain error instead
    /// of an invalid aggregate.
    pub fn from_record(record: ClientRecord) -> DomainResult<Client> {
        let id: ClientId = record.id.parse()?;

        let phone = record
            .phone
            .as_deref()
            .map(PhoneNumber::new)
            .transpose()?;
        let instagram = record
            .instagram
            .as_deref()
            .map(Instagram::new)
            .transpose()?;
        let lead_source = record
            .lead_source
            .as_deref()
            .map(LeadSource::new)
            .unwrap_or_else(LeadSource::other);

        Ok(Client::restore(PersistedClientProps {
            id,
            entity_id: record.entity_id,
            name: record.name,
            display_number: record.display_number,
            lead_source,
            phone,
            instagram,
            created_at: record.created_at,
            updated_at: record.updated_at,
            is_deleted: record.is_deleted,
        }))
    }

    /// Flatten an aggregate to its storage row.
    pub fn to_record(client: &Client) -> ClientRecord {
        let snapshot = client.to_snapshot();
        ClientRecord {
            id: snapshot.id.to_string(),
            entity_id: snapshot.entity_id,
            name: snapshot.name,
            display_number: snapshot.display_number,
            lead_source: Some(snapshot.lead_source),
            phone: snapshot.phone,
            instagram: snapshot.instagram,
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
            is_deleted: snapshot.is_deleted,
        }
    }
}
