//! Command-line front end for the nutrisweep engine: scenario files, the
//! three standard sweeps, and report rendering.

pub mod logging;
pub mod report;
pub mod run;
pub mod scenario;

pub use logging::init_logging;
pub use report::{Format, render, render_text};
pub use run::{Report, run};
pub use scenario::Scenario;

#[cfg(test)]
mod tests;
