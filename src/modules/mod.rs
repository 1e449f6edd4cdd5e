pub mod chat;
pub mod error;
pub mod health;
pub mod leads;
pub mod web;
