use crate::api::http::HttpBackend;
use crate::ipc::error::{err, ok};
use crate::ipc::handlers::{list_result, reload};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "backend": state.backend.as_ref().map(|b| b.describe()),
            "operationInProgress": state.operation_in_progress,
        }),
    )
}

fn handle_backend_connect(state: &mut AppState, req: &Request) -> serde_json::Value {
    let base_url = match req.params.get("baseUrl").and_then(|v| v.as_str()) {
        Some(v) => v.trim().to_string(),
        None => return err(&req.id, "bad_params", "missing params.baseUrl", None),
    };

    let backend = match HttpBackend::new(&base_url) {
        Ok(b) => b,
        Err(e) => return err(&req.id, "bad_params", e.to_string(), None),
    };
    tracing::info!(base_url = %backend.base_url(), "backend connected");
    state.backend = Some(Box::new(backend));
    state.pending_delete = None;

    // Best-effort initial load. A dead backend should not reject the
    // connection; the UI retries with students.load.
    match reload(state) {
        Ok(()) => {
            let mut result = list_result(state);
            result["loaded"] = json!(true);
            ok(&req.id, result)
        }
        Err(e) => {
            tracing::warn!(error = %e, "initial load failed");
            ok(
                &req.id,
                json!({
                    "loaded": false,
                    "loadError": e.to_string(),
                }),
            )
        }
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "backend.connect" => Some(handle_backend_connect(state, req)),
        _ => None,
    }
}
