pub mod api;
pub mod ipc;
pub mod model;
pub mod validate;
pub mod view;
