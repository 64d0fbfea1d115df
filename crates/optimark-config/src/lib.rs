//! # OptiMark Config
//!
//! Configuration types for the OptiMark CLI.
//!
//! Configuration is read once at startup and handed by reference to the
//! components that need it; nothing here is stored in global state.
//!
//! - [`database`]: Connection credentials for the records database
//! - [`schema`]: Location of the schema definition file
//!
//! # Example
//!
//! ```ignore
//! use optimark_config::{DatabaseConfig, SchemaConfig};
//!
//! let database = DatabaseConfig::from_env();
//! let schema = SchemaConfig::from_env();
//! ```

pub mod database;
pub mod schema;

// Re-export commonly used types at crate root
pub use database::DatabaseConfig;
pub use schema::SchemaConfig;
