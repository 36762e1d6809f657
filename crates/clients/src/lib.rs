//! Clients domain module (tenant-scoped CRM contacts).
//!
//! This crate contains the business rules for clients of a beauty business:
//! self-validating value objects, the `Client` aggregate root with buffered
//! domain events, the persistence contract, and the record factory.
//! No IO, no HTTP, no storage engine lives here.

pub mod client;
pub mod events;
pub mod factory;
pub mod instagram;
pub mod lead_source;
pub mod phone;
pub mod repository;

pub use client::{Client, ClientSnapshot, ClientUpdate, CreateClientProps, PersistedClientProps};
pub use events::{ClientChanges, ClientCreated, ClientDeleted, ClientEvent, ClientUpdated};
pub use factory::{ClientFactory, ClientRecord};
pub use instagram::Instagram;
pub use lead_source::LeadSource;
pub use phone::PhoneNumber;
pub use repository::{ClientRepository, ClientSearchFilters, RepositoryError};
