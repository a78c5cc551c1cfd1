pub mod http;
pub mod memory;

use crate::model::Student;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of a create/update request; the backend assigns and returns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentPayload {
    pub name: String,
    pub age: i64,
    pub grade: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid base url: {0}")]
    BadBaseUrl(String),
    #[error("backend returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Transport seam between the orchestration layer and the student backend.
/// One blocking call per operation; the caller serializes them.
pub trait Backend {
    fn list(&self) -> Result<Vec<Student>, ApiError>;
    fn get(&self, id: i64) -> Result<Student, ApiError>;
    fn create(&self, payload: &StudentPayload) -> Result<Student, ApiError>;
    fn update(&self, id: i64, payload: &StudentPayload) -> Result<Student, ApiError>;
    fn delete(&self, id: i64) -> Result<(), ApiError>;

    /// Human-readable endpoint description for health reporting.
    fn describe(&self) -> String;
}
