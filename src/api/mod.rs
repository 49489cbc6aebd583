/// API error types and handling
pub mod errors;
/// HTTP handlers for the relay and health routes
pub mod handlers;
/// Routes configuration and setup
pub mod routes;
/// HTTP server implementation
pub mod server;
