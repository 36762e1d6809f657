/// Helper trait for tenant-scoped messages.
///
/// Every domain event in a multi-tenant system carries the owning entity
/// (tenant/business) id so downstream consumers can filter, route, and
/// validate without deserializing the payload.
pub trait EntityScoped {
    /// Owning entity (tenant) identifier.
    fn entity_id(&self) -> &str;
}
