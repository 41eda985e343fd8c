//! Logging facilities for Ribbon.
//!
//! Ribbon uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The constants in [`targets`] name each instrumented subsystem, for use
//! in filter directives such as `ribbon::carousel=debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "ribbon_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "ribbon_core::signal";
    /// Layout strip target.
    pub const STRIP: &str = "ribbon::strip";
    /// Carousel widget target.
    pub const CAROUSEL: &str = "ribbon::carousel";
}
