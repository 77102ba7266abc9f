//! Span export to a local JSON-lines trace file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → JsonLinesExporter → launchdeck-otlp.json
//! ```
//!
//! The trace file lives next to the favorites store, in
//! `~/.local/share/zellij/launchdeck/`, and is rotated by size. The level comes
//! from the `trace_level` plugin option (an `EnvFilter` directive, default
//! `info`).
//!
//! ```rust
//! use launchdeck::observability::init_tracing;
//! use launchdeck::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod file_writer;
mod init;
mod tracer;

pub use init::init_tracing;
