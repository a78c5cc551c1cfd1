use crate::api::Backend;
use crate::model::{Student, ViewParams};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Everything the orchestration layer owns. The student collection is a
/// mirror of the backend: replaced wholesale after each successful mutation,
/// never patched in place.
pub struct AppState {
    pub backend: Option<Box<dyn Backend>>,
    pub students: Vec<Student>,
    pub view: ViewParams,
    pub operation_in_progress: bool,
    pub pending_delete: Option<Student>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            backend: None,
            students: Vec::new(),
            view: ViewParams::default(),
            operation_in_progress: false,
            pending_delete: None,
        }
    }

    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self {
            backend: Some(backend),
            ..Self::new()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
