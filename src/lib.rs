pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use models::ApplicationState;
pub use state::AppState;
pub use storage::{load_state, resolve_data_path};
