use crate::ipc::error::{err, ok};
use crate::ipc::handlers::list_result;
use crate::ipc::types::{AppState, Request};
use crate::model::{GradeFilter, SortDirection, SortKey, ViewParams};

/// Partial update: only the params present in the request change. Returns
/// the recomputed projection so the UI repaints from one response.
fn handle_view_set(state: &mut AppState, req: &Request) -> serde_json::Value {
    let mut next = state.view.clone();

    if let Some(v) = req.params.get("searchText") {
        let Some(s) = v.as_str() else {
            return err(&req.id, "bad_params", "searchText must be a string", None);
        };
        next.search_text = s.to_string();
    }
    if let Some(v) = req.params.get("gradeFilter") {
        let Some(s) = v.as_str() else {
            return err(&req.id, "bad_params", "gradeFilter must be a string", None);
        };
        next.grade_filter = GradeFilter::from(s.to_string());
    }
    if let Some(v) = req.params.get("sortKey") {
        match serde_json::from_value::<SortKey>(v.clone()) {
            Ok(key) => next.sort_key = key,
            Err(_) => {
                return err(&req.id, "bad_params", "sortKey must be name or age", None);
            }
        }
    }
    if let Some(v) = req.params.get("sortDirection") {
        match serde_json::from_value::<SortDirection>(v.clone()) {
            Ok(dir) => next.sort_direction = dir,
            Err(_) => {
                return err(
                    &req.id,
                    "bad_params",
                    "sortDirection must be ascending or descending",
                    None,
                );
            }
        }
    }

    state.view = next;
    ok(&req.id, list_result(state))
}

fn handle_view_clear(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.view = ViewParams::default();
    ok(&req.id, list_result(state))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "view.set" => Some(handle_view_set(state, req)),
        "view.clear" => Some(handle_view_clear(state, req)),
        _ => None,
    }
}
