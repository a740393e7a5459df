pub mod config;
pub mod error;
pub mod models;
pub mod query;

pub use config::QueryConfig;
pub use error::{QuarryError, Result};
pub use models::Filter;
pub use query::{Diagnostic, SearchQuery, Severity};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
