//! Tracing with OpenTelemetry spans exported to a local file.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → pixgrid-trace.jsonl
//! ```
//!
//! The trace file lives in the data directory (`<data_local_dir>/pixgrid/`)
//! and rotates by size, keeping three numbered backups.
//!
//! Level resolution: `RUST_LOG`, then the `trace_level` config option, then
//! `"info"`.
//!
//! ```rust,no_run
//! use pixgrid::observability::init_tracing;
//! use pixgrid::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("tracing is now active");
//! ```

mod exporter;
mod init;
mod writer;

pub use init::{env_filter, init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
pub use writer::RotatingWriter;
