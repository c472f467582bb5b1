pub mod config;
pub mod doc;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::build_router;
