pub mod app;
pub mod errors;
pub mod handlers;
pub mod keys;
pub mod models;
pub mod progress;
pub mod storage;
pub mod streak;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
