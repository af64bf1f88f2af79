//! Output formatters for organize reports.
//!
//! - [`text`]: colored summary and details for the terminal
//! - [`json`]: machine-readable report for scripting
//!
//! # Example
//!
//! ```no_run
//! use dupesort::organizer::Organizer;
//! use dupesort::output::TextOutput;
//!
//! let mut organizer = Organizer::new("/home/user/Downloads");
//! let stats = organizer.organize().unwrap();
//! let report = organizer.report();
//!
//! TextOutput::new(&stats, &report)
//!     .write_to(&mut std::io::stdout())
//!     .unwrap();
//! ```

pub mod json;
pub mod text;

pub use json::{JsonOutput, JsonOutputError};
pub use text::TextOutput;
