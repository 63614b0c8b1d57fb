pub mod api;
pub mod config;
pub mod context;
pub mod errors;
pub mod models;
pub mod query;
pub mod repositories;
pub mod seed;
pub mod usecases;
