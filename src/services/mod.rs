use thiserror::Error;

pub mod orders;
pub mod storefront;

/// Errors returned by the service layer.
///
/// Collaborator failures are translated into one of these categories at
/// the point they occur; routes map them onto HTTP statuses.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Form(String),
    #[error("{0}")]
    TypeConstraint(String),
    #[error("internal error")]
    Internal,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
