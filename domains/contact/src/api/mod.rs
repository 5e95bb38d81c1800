//! API layer for the Contact domain
//!
//! Contains the relay handler, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::ContactState;
pub use routes::routes;
