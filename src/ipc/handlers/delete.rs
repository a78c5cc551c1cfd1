use crate::ipc::error::{err, ok};
use crate::ipc::handlers::{list_result, reload};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

/// Stage a delete target for the confirm dialog. Nothing is mutated until
/// delete.confirm arrives.
fn handle_delete_request(state: &mut AppState, req: &Request) -> serde_json::Value {
    let student_id = match req.params.get("studentId").and_then(|v| v.as_i64()) {
        Some(v) => v,
        None => return err(&req.id, "bad_params", "missing studentId", None),
    };

    let Some(student) = state.students.iter().find(|s| s.id == student_id).cloned() else {
        return err(&req.id, "not_found", "student not found", None);
    };

    state.pending_delete = Some(student.clone());
    ok(&req.id, json!({ "student": student }))
}

fn handle_delete_confirm(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(target) = state.pending_delete.clone() else {
        return err(
            &req.id,
            "no_pending_delete",
            "no delete awaiting confirmation",
            None,
        );
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

    let Some(backend) = state.backend.as_ref() else {
        state.operation_in_progress = false;
        return err(&req.id, "no_backend", "connect a backend first", None);
    };

    if let Err(e) = backend.delete(target.id) {
        // Pending target is kept so the user can retry the confirmation.
        state.operation_in_progress = false;
        return err(&req.id, "delete_failed", e.to_string(), None);
    }

    state.pending_delete = None;
    let reload_err = reload(state).err();
    state.operation_in_progress = false;
    if let Some(e) = &reload_err {
        tracing::warn!(error = %e, "reload after delete failed");
    }

    let mut result = list_result(state);
    result["deletedId"] = json!(target.id);
    if let Some(e) = reload_err {
        result["loadError"] = json!(e.to_string());
    }
    ok(&req.id, result)
}

/// Cancellation discards the staged target and performs no mutation.
fn handle_delete_cancel(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.pending_delete = None;
    ok(&req.id, json!({ "ok": true }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "delete.request" => Some(handle_delete_request(state, req)),
        "delete.confirm" => Some(handle_delete_confirm(state, req)),
        "delete.cancel" => Some(handle_delete_cancel(state, req)),
        _ => None,
    }
}
