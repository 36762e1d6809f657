//! Domain events emitted by the [`Client`](crate::Client) aggregate.
//!
//! Events are immutable facts. Each payload carries a generated event id,
//! the occurrence time, the aggregate id, and the owning entity id for
//! tenant scoping.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use glowdesk_core::ClientId;
use glowdesk_events::{DomainEvent, EntityScoped};

use crate::client::ClientSnapshot;

/// Full snapshot carried by `client.created`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub client_id: ClientId,
    pub entity_id: String,
    pub name: String,
    pub display_number: i64,
    pub lead_source: String,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Changed-field subset carried by `client.updated`.
///
/// Outer `None` means the field did not change. For phone/instagram the
/// inner `Option` distinguishes "set to a new value" from "cleared".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_source: Option<String>,
}

impl ClientChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.instagram.is_none()
            && self.lead_source.is_none()
    }
}

/// Diff payload carried by `client.updated`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub client_id: ClientId,
    pub entity_id: String,
    pub changes: ClientChanges,
}

/// Deletion summary carried by `client.deleted`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub client_id: ClientId,
    pub entity_id: String,
    pub display_number: i64,
}

/// All client events.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ClientEvent {
    Created(ClientCreated),
    Updated(ClientUpdated),
    Deleted(ClientDeleted),
}

impl ClientEvent {
    pub(crate) fn created(snapshot: &ClientSnapshot) -> Self {
        Self::Created(ClientCreated {
            event_id: Uuid::now_v7(),
            occurred_at: Utc::now(),
            client_id: snapshot.id,
            entity_id: snapshot.entity_id.clone(),
            name: snapshot.name.clone(),
            display_number: snapshot.display_number,
            lead_source: snapshot.lead_source.clone(),
            phone: snapshot.phone.clone(),
            instagram: snapshot.instagram.clone(),
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
        })
    }

    pub(crate) fn updated(client_id: ClientId, entity_id: String, changes: ClientChanges) -> Self {
        Self::Updated(ClientUpdated {
            event_id: Uuid::now_v7(),
            occurred_at: Utc::now(),
            client_id,
            entity_id,
            changes,
        })
    }

    pub(crate) fn deleted(client_id: ClientId, entity_id: String, display_number: i64) -> Self {
        Self::Deleted(ClientDeleted {
            event_id: Uuid::now_v7(),
            occurred_at: Utc::now(),
            client_id,
            entity_id,
            display_number,
        })
    }

    /// The client this event pertains to.
    pub fn client_id(&self) -> ClientId {
        match self {
            ClientEvent::Created(e) => e.client_id,
            ClientEvent::Updated(e) => e.client_id,
            ClientEvent::Deleted(e) => e.client_id,
        }
    }
}

impl DomainEvent for ClientEvent {
    fn event_id(&self) -> Uuid {
        match self {
            ClientEvent::Created(e) => e.event_id,
            ClientEvent::Updated(e) => e.event_id,
            ClientEvent::Deleted(e) => e.event_id,
        }
    }

    fn event_type(&self) -> &'static str {
        match self {
            ClientEvent::Created(_) => "client.created",
            ClientEvent::Updated(_) => "client.updated",
            ClientEvent::Deleted(_) => "client.deleted",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ClientEvent::Created(e) => e.occurred_at,
            ClientEvent::Updated(e) => e.occurred_at,
            ClientEvent::Deleted(e) => e.occurred_at,
        }
    }
}

impl EntityScoped for ClientEvent {
    fn entity_id(&self) -> &str {
        match self {
            ClientEvent::Created(e) => &e.entity_id,
            ClientEvent::Updated(e) => &e.entity_id,
            ClientEvent::Deleted(e) => &e.entity_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_types_are_stable() {
        let created = ClientEvent::created(&ClientSnapshot {
            id: ClientId::new(),
            entity_id: "e1".to_string(),
            name: "Amira".to_string(),
            display_number: 1,
            lead_source: "other".to_string(),
            phone: None,
            instagram: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            is_deleted: false,
        });
        let updated = ClientEvent::updated(ClientId::new(), "e1".to_string(), ClientChanges::default());
        let deleted = ClientEvent::deleted(ClientId::new(), "e1".to_string(), 1);

        assert_eq!(created.event_type(), "client.created");
        assert_eq!(updated.event_type(), "client.updated");
        assert_eq!(deleted.event_type(), "client.deleted");
    }

    #[test]
    fn changes_serialize_only_touched_fields() {
        let changes = ClientChanges {
            name: Some("New Name".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&changes).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["name"]);
    }

    #[test]
    fn cleared_field_serializes_as_null() {
        let changes = ClientChanges {
            phone: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_value(&changes).unwrap();
        assert!(json.get("phone").unwrap().is_null());
        assert!(json.get("name").is_none());
    }

    #[test]
    fn events_carry_entity_scope() {
        let event = ClientEvent::deleted(ClientId::new(), "salon-7".to_string(), 12);
        assert_eq!(event.entity_id(), "salon-7");
    }
}
