pub mod database;
pub mod persona;
pub mod settings;
