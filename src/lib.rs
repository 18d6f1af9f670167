pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod lifecycle;
pub mod locks;
pub mod models;
pub mod services;

pub use db::{Store, connect};
pub use error::{AppError, AppResult};
