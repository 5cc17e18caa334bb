pub mod routes;

pub use routes::ApiError;
