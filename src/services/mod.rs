//! Orchestration services bound to UI events at the boundary layer.

use thiserror::Error;

use crate::client::errors::ApiError;

pub mod deals;
pub mod filters;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Formulaire invalide: {0}")]
    Form(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
