//! OptiMark Observability
//!
//! Console logging for the OptiMark CLI. Log lines go to stderr so the
//! tables printed on stdout can be piped without interleaved diagnostics.
//!
//! # Examples
//!
//! ```no_run
//! optimark_observability::init_logging();
//! tracing::info!("ready");
//! ```

pub mod basic_logging;

pub use basic_logging::{LogFormat, init_logging};
