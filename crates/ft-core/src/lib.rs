//! Forecast tally core library.
//!
//! Wires the feed and clock collaborators to the report renderer:
//! - [`source`]: the remote feed behind the [`DataSource`] trait
//! - [`clock`]: current time, the fixed target instant, and the countdown
//! - [`app`]: one linear pass from fetch to report text
//! - [`logging`]: stderr-only structured logging
//! - [`exit_codes`]: stable process exit codes

pub mod app;
pub mod clock;
pub mod exit_codes;
pub mod logging;
pub mod settings;
pub mod source;

pub use app::{render_report, App, Report};
pub use clock::{Clock, Countdown, FixedClock, SystemClock};
pub use exit_codes::ExitCode;
pub use settings::{Settings, TargetInstant};
pub use source::{DataSource, HttpSource, StaticSource};
