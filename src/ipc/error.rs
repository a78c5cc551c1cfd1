use serde_json::json;

/// Id-less notice for input that never became a request (unparseable JSON
/// on the stdio channel). Every normal envelope echoes the request id; this
/// is the one that cannot.
pub fn notice(code: &str, message: impl Into<String>) -> serde_json::Value {
    json!({
        "ok": false,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "ok": true,
        "result": result
    })
}

pub fn err(
    id: &str,
    code: &str,
    message: impl Into<String>,
    details: Option<serde_json::Value>,
) -> serde_json::Value {
    let mut error = json!({
        "code": code,
        "message": message.into(),
    });
    if let Some(d) = details {
        error["details"] = d;
    }
    json!({
        "id": id,
        "ok": false,
        "error": error,
    })
}
