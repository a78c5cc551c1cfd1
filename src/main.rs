use std::io::{self, BufRead, Write};

use studentd::api::http::HttpBackend;
use studentd::ipc;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries the protocol; diagnostics go to stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    init_tracing();

    let mut state = ipc::AppState::new();

    // Convenience for launchers that know the backend up front; the renderer
    // can still (re)connect via backend.connect.
    if let Ok(base_url) = std::env::var("STUDENTD_BASE_URL") {
        match HttpBackend::new(&base_url) {
            Ok(backend) => {
                tracing::info!(base_url = %backend.base_url(), "backend set from environment");
                state.backend = Some(Box::new(backend));
            }
            Err(e) => tracing::warn!(error = %e, "ignoring STUDENTD_BASE_URL"),
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: ipc::Request = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                // Can't reply with the request id; emit an id-less notice.
                // Serialized, not formatted: the error message may quote the
                // offending token.
                let _ = writeln!(stdout, "{}", ipc::notice("bad_json", e.to_string()));
                let _ = stdout.flush();
                continue;
            }
        };

        let resp = ipc::handle_request(&mut state, req);
        let _ = writeln!(
            stdout,
            "{}",
            serde_json::to_string(&resp).unwrap_or_else(|_| "{\"ok\":false}".to_string())
        );
        let _ = stdout.flush();
    }
}
