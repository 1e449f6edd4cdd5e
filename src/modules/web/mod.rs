//! Everything that is not an API route: the built frontend in production, a proxy to the
//! frontend dev server otherwise.

pub mod controller;
pub mod routes;
