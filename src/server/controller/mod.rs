//! HTTP request handlers.
//!
//! Controllers extract path, query, and body data, convert DTOs to service parameters,
//! call the service layer, and turn absent results into `AppError::NotFound`. Domain
//! models are converted back to DTOs before serialization.

pub mod event;
pub mod order;
pub mod product;
pub mod project;
pub mod root;
pub mod user;

#[cfg(test)]
mod test;

use serde::Deserialize;
use utoipa::IntoParams;

/// Window parameters accepted by every list endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Number of records to skip.
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of records to return.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    100
}
