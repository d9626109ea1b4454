// Infrastructure layer
pub mod config;

// Domain layer (dispatch pipeline)
pub mod delivery;
pub mod dispatch;

// Application layer
pub mod api;
pub mod server;
