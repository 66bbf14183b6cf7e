pub mod auth;
pub mod plan;
pub mod staff;
pub mod store;

mod router;
pub use router::get_router;
