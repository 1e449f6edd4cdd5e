pub mod controller;
pub mod relay;
pub mod routes;
pub mod schema;
