pub mod error;
pub mod routes;
pub mod store;

pub use routes::build_router;
pub use store::TaskStore;
