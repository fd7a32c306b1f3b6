pub mod config;
pub mod districts;
pub mod engine;
pub mod error;
pub mod models;
pub mod observability;
pub mod seed;
pub mod state;
