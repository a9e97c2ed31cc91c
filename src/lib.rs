pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod identity;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod relations;
pub mod source;
pub mod transform;

pub use error::{MigrationError, MigrationResult};
pub use pipeline::{RunReport, run};
