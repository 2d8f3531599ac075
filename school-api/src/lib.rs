pub mod adapters;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod factory;
pub mod router;
pub(crate) mod routes;

pub use app_state::AppState;
