//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → opentelemetry_sdk → FileSpanExporter → JSON lines
//! ```
//!
//! Traces land in `~/.local/share/zellij/pokedexer/pokedexer-otlp.json`
//! (rotated at 10 MiB, three backups kept). The level comes from the
//! `trace_level` plugin option and defaults to `info`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `exporter`: OTLP JSON span exporter and tracer provider
//! - `file_writer`: Size-rotated trace file

mod exporter;
mod file_writer;
pub mod init;

pub use init::init_tracing;
