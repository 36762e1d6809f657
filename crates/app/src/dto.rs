//! Transport-facing representations of clients.

use serde::Serialize;

/// Phone number as exposed to clients of the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneDto {
    pub value: String,
    pub formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// Instagram handle plus its profile URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramDto {
    pub handle: String,
    pub url: String,
}

/// Read model for a client. Timestamps are RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub id: String,
    pub entity_id: String,
    pub name: String,
    pub display_number: i64,
    pub lead_source: String,
    pub phone: Option<PhoneDto>,
    pub instagram: Option<InstagramDto>,
    pub created_at: String,
    pub updated_at: String,
    pub is_deleted: bool,
}
