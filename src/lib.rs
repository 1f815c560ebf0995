pub mod api;
pub mod config;
pub mod error;
pub mod services;

pub use config::Config;
pub use error::{ AppError, Result };
