use glowdesk_clients::RepositoryError;
use glowdesk_core::DomainError;

/// Application-level failure: either the domain rejected the request or
/// storage failed. Transports match on the variant to pick a status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_message() {
        let err = AppError::from(DomainError::validation("Client must belong to an entity"));
        assert_eq!(err.to_string(), "Client must belong to an entity");
    }

    #[test]
    fn not_found_renders_subject() {
        let err = AppError::from(DomainError::not_found("Client"));
        assert_eq!(err.to_string(), "Client not found");
    }
}
