/// API error envelope and its HTTP rendering
pub mod errors;
/// Path extractors
pub mod extract;
/// HTTP handlers for members and orders
pub mod handlers;
/// Decode, convert and respond stages shared by the handlers
pub mod pipeline;
/// Routes configuration and setup
pub mod routes;
/// HTTP server implementation
pub mod server;
/// Shared handler state
pub mod state;
