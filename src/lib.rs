pub mod app;
pub mod config;
pub mod errors;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::ServerConfig;
pub use state::AppState;
