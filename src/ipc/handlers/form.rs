use crate::api::StudentPayload;
use crate::ipc::error::{err, ok};
use crate::ipc::handlers::{list_result, reload};
use crate::ipc::types::{AppState, Request};
use crate::model::StudentDraft;
use crate::validate::validate_draft;
use serde_json::json;

/// Create or update depending on whether `id` is present. Validation
/// failures come back as an ok envelope carrying the per-field errors: the
/// form stays open and renders them all, so they are data, not protocol
/// errors. Backend failures leave the mirror untouched.
fn handle_form_submit(state: &mut AppState, req: &Request) -> serde_json::Value {
    if state.backend.is_none() {
        return err(&req.id, "no_backend", "connect a backend first", None);
    }

    let name = match req.params.get("name").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing name", None),
    };
    let grade = match req.params.get("grade").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing grade", None),
    };
    let age = req.params.get("age").and_then(|v| v.as_i64());
    let id = req.params.get("id").and_then(|v| v.as_i64());

    let draft = StudentDraft {
        id,
        name,
        age,
        grade,
    };

    let validation = validate_draft(&draft, &state.students);
    if !validation.is_valid {
        return ok(
            &req.id,
            json!({
                "isValid": false,
                "errors": validation.errors,
            }),
        );
    }
    // Validation guarantees age is present past this point.
    let Some(age) = draft.age else {
        return err(&req.id, "bad_params", "missing age", None);
    };

    if state.operation_in_progress {
        return err(
            &req.id,
            "operation_in_progress",
            "another operation is still running",
            None,
        );
    }
    state.operation_in_progress = true;

    let payload = StudentPayload {
        name: draft.name.trim().to_string(),
        age,
        grade: draft.grade.trim().to_string(),
    };

    let Some(backend) = state.backend.as_ref() else {
        state.operation_in_progress = false;
        return err(&req.id, "no_backend", "connect a backend first", None);
    };
    let (saved, fail_code) = match draft.id {
        Some(id) => (backend.update(id, &payload), "update_failed"),
        None => (backend.create(&payload), "create_failed"),
    };

    let saved = match saved {
        Ok(s) => s,
        Err(e) => {
            state.operation_in_progress = false;
            return err(&req.id, fail_code, e.to_string(), None);
        }
    };

    // Full reload after a successful mutation; a failed reload does not undo
    // the save, it just leaves a stale mirror the UI can refresh.
    let reload_err = reload(state).err();
    state.operation_in_progress = false;
    if let Some(e) = &reload_err {
        tracing::warn!(error = %e, "reload after save failed");
    }

    let mut result = list_result(state);
    result["isValid"] = json!(true);
    result["student"] = json!(saved);
    if let Some(e) = reload_err {
        result["loadError"] = json!(e.to_string());
    }
    ok(&req.id, result)
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "form.submit" => Some(handle_form_submit(state, req)),
        _ => None,
    }
}
