mod error;
mod handlers;
mod router;
mod types;

pub use error::notice;
pub use router::handle_request;
pub use types::{AppState, Request};
