//! Logging facilities for Tactile.
//!
//! Tactile uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the host installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("tactile::animation=trace")
//!     .init();
//! ```
//!
//! Style resolution logs each applied layer at `trace` level. The press
//! animation controller logs state transitions at `trace` and pass-through
//! of unusual configuration values at `debug`.

/// Span names used throughout Tactile for tracing.
pub mod span_names {
    /// Style resolution span.
    pub const RESOLVE: &str = "tactile::resolve";
    /// Pointer event handling span.
    pub const POINTER: &str = "tactile::pointer";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "tactile_core::signal";
    /// Theme loading target.
    pub const THEME: &str = "tactile_style::theme";
    /// Style resolution target.
    pub const STYLE: &str = "tactile::style";
    /// Press animation target.
    pub const ANIMATION: &str = "tactile::animation";
    /// Button control target.
    pub const BUTTON: &str = "tactile::button";
}
