use crate::ipc::error::{err, ok};
use crate::ipc::handlers::{list_result, reload};
use crate::ipc::types::{AppState, Request};

fn handle_students_load(state: &mut AppState, req: &Request) -> serde_json::Value {
    if state.backend.is_none() {
        return err(&req.id, "no_backend", "connect a backend first", None);
    }

    match reload(state) {
        Ok(()) => ok(&req.id, list_result(state)),
        Err(e) => err(&req.id, "load_failed", e.to_string(), None),
    }
}

/// Projection of the cached mirror; no backend round trip.
fn handle_students_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, list_result(state))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.load" => Some(handle_students_load(state, req)),
        "students.list" => Some(handle_students_list(state, req)),
        _ => None,
    }
}
