//! Synopsis HTTP service: summarization routes and the CSV batch queue.

pub mod batch;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
