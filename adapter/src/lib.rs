pub mod database;
pub mod repository;
