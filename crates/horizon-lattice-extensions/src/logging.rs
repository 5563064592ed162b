//! Logging facilities for Horizon Lattice extensions.
//!
//! Like the rest of Horizon Lattice, this crate is instrumented with the
//! `tracing` crate and never installs a subscriber itself. To see logs,
//! install one in your application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("horizon_lattice_extensions=trace"))
//!         .init();
//! }
//! ```

/// Span names used by the extension helpers.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL: &str = "horizon_lattice_extensions::signal";
    /// Weak subscription lifecycle span.
    pub const SUBSCRIPTION: &str = "horizon_lattice_extensions::subscription";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Crate-wide target.
    pub const EXTENSIONS: &str = "horizon_lattice_extensions";
    /// Signal/slot target.
    pub const SIGNAL: &str = "horizon_lattice_extensions::signal";
    /// Weak subscription target.
    pub const SUBSCRIPTION: &str = "horizon_lattice_extensions::subscription";
    /// Safe command invocation target.
    pub const COMMAND: &str = "horizon_lattice_extensions::command";
}
