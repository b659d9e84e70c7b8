pub mod favorites;
pub mod handlers;
pub mod pokemon;
pub mod routes;

pub use routes::create_router;
