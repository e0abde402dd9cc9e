use clap::ValueEnum;

pub mod error;
pub mod graphs;
pub mod scenario;
pub mod search;
pub mod utility;

pub use error::{GuideError, ParseError};
pub use search::solve;

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// `Scenario #n` / `Minimum Number of Trips = t` blocks
    Text,
    /// Pretty printed array of scenario reports
    Json,
}

/// What to do once a scenario has no answer.
#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop and exit with an error
    Abort,
    /// Report the failure and carry on with the next scenario
    Skip,
}
