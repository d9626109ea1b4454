mod handlers;
mod health;
mod models;
mod routes;

pub use models::CategoryDispatchRequest;
pub use routes::api_routes;
