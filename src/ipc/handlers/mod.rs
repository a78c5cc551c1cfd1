pub mod core;
pub mod delete;
pub mod form;
pub mod students;
pub mod view;

use crate::api::ApiError;
use crate::ipc::types::AppState;
use crate::view as pipeline;
use serde_json::json;

/// Re-fetch the full collection and replace the mirror. On failure the
/// mirror is left exactly as it was.
pub(crate) fn reload(state: &mut AppState) -> Result<(), ApiError> {
    let Some(backend) = state.backend.as_ref() else {
        return Err(ApiError::Transport("no backend connected".to_string()));
    };
    let students = backend.list()?;
    state.students = students;
    Ok(())
}

/// The standard list payload: projection under the current view params plus
/// the grade options derived from the full collection.
pub(crate) fn list_result(state: &AppState) -> serde_json::Value {
    let visible = pipeline::project(&state.students, &state.view);
    json!({
        "students": visible,
        "grades": pipeline::grade_options(&state.students),
        "total": state.students.len(),
        "view": state.view,
    })
}
