//! `glowdesk-auth` — pure authentication/authorization value objects.
//!
//! This crate is intentionally decoupled from HTTP and storage. Session
//! resolution and tenant membership live in the (out-of-scope) transport;
//! what belongs to the domain is the shape of an email address and the role
//! hierarchy.

pub mod email;
pub mod role;

pub use email::Email;
pub use role::{Role, UserRole};
