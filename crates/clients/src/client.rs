//! Client aggregate root: a CRM contact belonging to an entity/tenant.
//!
//! The aggregate owns its invariants (non-empty entity, name length,
//! positive display number) and buffers domain events describing every
//! state transition. Display-number uniqueness within an entity is the
//! repository's concern, not the aggregate's.

use chrono::{DateTime, Utc};
use serde::Serialize;

use glowdesk_core::{AggregateRoot, ClientId, DomainError, DomainResult, Entity};

use crate::events::{ClientChanges, ClientEvent};
use crate::instagram::Instagram;
use crate::lead_source::LeadSource;
use crate::phone::PhoneNumber;

/// Inputs for [`Client::create`].
///
/// `id` and the timestamps default when absent (generated id, now).
#[derive(Debug, Clone)]
pub struct CreateClientProps {
    pub entity_id: String,
    pub name: String,
    pub display_number: i64,
    pub lead_source: Option<LeadSource>,
    pub phone: Option<PhoneNumber>,
    pub instagram: Option<Instagram>,
    pub id: Option<ClientId>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Inputs for [`Client::restore`]: a trusted row read back from storage.
#[derive(Debug, Clone)]
pub struct PersistedClientProps {
    pub id: ClientId,
    pub entity_id: String,
    pub name: String,
    pub display_number: i64,
    pub lead_source: LeadSource,
    pub phone: Option<PhoneNumber>,
    pub instagram: Option<Instagram>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

/// Partial update for [`Client::update_details`].
///
/// Outer `None` means "leave the field alone". For phone/instagram the
/// inner `None` means "explicitly clear" — presence and nullness are
/// distinct, so a caller can remove a phone without touching instagram.
#[derive(Debug, Clone, Default)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub phone: Option<Option<PhoneNumber>>,
    pub instagram: Option<Option<Instagram>>,
    pub lead_source: Option<LeadSource>,
}

/// Flattened aggregate state for persistence and event payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientSnapshot {
    pub id: ClientId,
    pub entity_id: String,
    pub name: String,
    pub display_number: i64,
    pub lead_source: String,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

/// Client aggregate root.
#[derive(Debug, Clone)]
pub struct Client {
    id: ClientId,
    entity_id: String,
    name: String,
    display_number: i64,
    lead_source: LeadSource,
    phone: Option<PhoneNumber>,
    instagram: Option<Instagram>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    is_deleted: bool,
    domain_events: Vec<ClientEvent>,
}

// Identity semantics: two clients are the same client iff their ids match.
impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Client {}

impl Client {
    /// Create a new client and record a `client.created` event.
    ///
    /// Validation order: entity, then name, then display number; the first
    /// failure is returned and no aggregate is produced.
    pub fn create(props: CreateClientProps) -> DomainResult<Client> {
        Self::validate(&props)?;

        let now = Utc::now();
        let mut client = Client {
            id: props.id.unwrap_or_default(),
            entity_id: props.entity_id,
            name: props.name.trim().to_string(),
            display_number: props.display_number,
            lead_source: props.lead_source.unwrap_or_else(LeadSource::other),
            phone: props.phone,
            instagram: props.instagram,
            created_at: props.created_at.unwrap_or(now),
            updated_at: props.updated_at.unwrap_or(now),
            is_deleted: false,
            domain_events: Vec::new(),
        };

        let snapshot = client.to_snapshot();
        client.record(ClientEvent::created(&snapshot));

        Ok(client)
    }

    /// Restore an existing client from persistence without emitting events.
    pub fn restore(props: PersistedClientProps) -> Client {
        Client {
            id: props.id,
            entity_id: props.entity_id,
            name: props.name.trim().to_string(),
            display_number: props.display_number,
            lead_source: props.lead_source,
            phone: props.phone,
            instagram: props.instagram,
            created_at: props.created_at,
            updated_at: props.updated_at,
            is_deleted: props.is_deleted,
            domain_events: Vec::new(),
        }
    }

    fn validate(props: &CreateClientProps) -> DomainResult<()> {
        if props.entity_id.trim().is_empty() {
            return Err(DomainError::validation("Client must belong to an entity"));
        }

        Self::validate_name(&props.name)?;

        if props.display_number <= 0 {
            return Err(DomainError::validation(
                "Display number must be a positive integer",
            ));
        }

        Ok(())
    }

    fn validate_name(name: &str) -> DomainResult<()> {
        if name.trim().chars().count() < 2 {
            return Err(DomainError::validation(
                "Client name must be at least 2 characters",
            ));
        }

        Ok(())
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_number(&self) -> i64 {
        self.display_number
    }

    pub fn lead_source(&self) -> &LeadSource {
        &self.lead_source
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    pub fn instagram(&self) -> Option<&Instagram> {
        self.instagram.as_ref()
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Update mutable attributes, recording a single `client.updated` event
    /// whose payload contains only the fields that actually changed.
    ///
    /// A call where nothing truly changes succeeds without recording an
    /// event (and therefore without touching `updated_at`).
    pub fn update_details(&mut self, updates: ClientUpdate) -> DomainResult<()> {
        let mut changes = ClientChanges::default();

        if let Some(name) = updates.name {
            let trimmed = name.trim().to_string();
            Self::validate_name(&trimmed)?;

            if trimmed != self.name {
                self.name = trimmed.clone();
                changes.name = Some(trimmed);
            }
        }

        if let Some(new_phone) = updates.phone {
            if new_phone != self.phone {
                changes.phone = Some(new_phone.as_ref().map(|p| p.value().to_string()));
                self.phone = new_phone;
            }
        }

        if let Some(new_instagram) = updates.instagram {
            if new_instagram != self.instagram {
                changes.instagram = Some(new_instagram.as_ref().map(|i| i.handle().to_string()));
                self.instagram = new_instagram;
            }
        }

        if let Some(new_source) = updates.lead_source {
            if new_source != self.lead_source {
                changes.lead_source = Some(new_source.value().to_string());
                self.lead_source = new_source;
            }
        }

        if changes.is_empty() {
            return Ok(());
        }

        self.record(ClientEvent::updated(
            self.id,
            self.entity_id.clone(),
            changes,
        ));

        Ok(())
    }

    /// Soft delete: flags the aggregate and records `client.deleted`.
    /// Idempotent — a second call changes nothing and records nothing.
    pub fn mark_deleted(&mut self) {
        if self.is_deleted {
            return;
        }

        self.is_deleted = true;
        self.record(ClientEvent::deleted(
            self.id,
            self.entity_id.clone(),
            self.display_number,
        ));
    }

    /// Flatten to plain data (phone/instagram reduced to raw strings).
    pub fn to_snapshot(&self) -> ClientSnapshot {
        ClientSnapshot {
            id: self.id,
            entity_id: self.entity_id.clone(),
            name: self.name.clone(),
            display_number: self.display_number,
            lead_source: self.lead_source.value().to_string(),
            phone: self.phone.as_ref().map(|p| p.value().to_string()),
            instagram: self.instagram.as_ref().map(|i| i.handle().to_string()),
            created_at: self.created_at,
            updated_at: self.updated_at,
            is_deleted: self.is_deleted,
        }
    }

    /// Recording an event is the only path that advances `updated_at`.
    fn record(&mut self, event: ClientEvent) {
        self.domain_events.push(event);
        self.updated_at = Utc::now();
    }
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl AggregateRoot for Client {
    type Event = ClientEvent;

    fn domain_events(&self) -> &[Self::Event] {
        &self.domain_events
    }

    fn take_domain_events(&mut self) -> Vec<Self::Event> {
        std::mem::take(&mut self.domain_events)
    }
}
