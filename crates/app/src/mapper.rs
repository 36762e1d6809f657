use chrono::SecondsFormat;

use glowdesk_clients::Client;
use glowdesk_core::Entity;

use crate::dto::{ClientDto, InstagramDto, PhoneDto};

/// Maps domain aggregates to transport DTOs.
pub struct ClientMapper;

impl ClientMapper {
    pub fn to_dto(client: &Client) -> ClientDto {
        ClientDto {
            id: client.id().to_string(),
            entity_id: client.entity_id().to_string(),
            name: client.name().to_string(),
            display_number: client.display_number(),
            lead_source: client.lead_source().value().to_string(),
            phone: client.phone().map(|p| PhoneDto {
                value: p.value().to_string(),
                formatted: p.formatted().to_string(),
                country_code: p.country_code().map(str::to_string),
            }),
            instagram: client.instagram().map(|i| InstagramDto {
                handle: i.handle().to_string(),
                url: i.url(),
            }),
            created_at: client
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            updated_at: client
                .updated_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            is_deleted: client.is_deleted(),
        }
    }
}
