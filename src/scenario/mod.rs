use indicatif::ParallelProgressIterator;
use log::{info, warn};
use rayon::prelude::*;
use report::ScenarioReport;

use crate::{
    error::GuideError,
    graphs::adjacency_graph::AdjacencyGraph,
    search::{request::TripRequest, solve},
    utility::get_progressbar_long_jobs,
    FailurePolicy,
};

pub mod reader;
pub mod report;
pub mod writer;

/// One road network together with the trip asked for on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub graph: AdjacencyGraph,
    pub request: TripRequest,
}

impl Scenario {
    pub fn solve(&self) -> Result<u32, GuideError> {
        solve(
            &self.graph,
            self.request.start,
            self.request.end,
            self.request.tourists,
        )
    }
}

/// Solves every scenario and returns the reports in input order.
///
/// Scenarios share nothing, so with `parallel` they are spread over the
/// rayon thread pool.
pub fn solve_scenarios(scenarios: &[Scenario], parallel: bool) -> Vec<ScenarioReport> {
    let report = |(index, scenario): (usize, &Scenario)| {
        let trips = scenario.solve();
        if let Err(error) = &trips {
            warn!("scenario #{}: {}", index + 1, error);
        }
        ScenarioReport {
            scenario: index + 1,
            request: scenario.request,
            trips,
        }
    };

    let reports: Vec<_> = if parallel {
        scenarios
            .par_iter()
            .enumerate()
            .progress_with(get_progressbar_long_jobs(
                "Solving scenarios",
                scenarios.len() as u64,
            ))
            .map(report)
            .collect()
    } else {
        scenarios.iter().enumerate().map(report).collect()
    };

    info!(
        "solved {} of {} scenarios",
        reports.iter().filter(|report| report.trips.is_ok()).count(),
        reports.len()
    );
    reports
}

/// Applies `policy` to solved reports.
///
/// With [`FailurePolicy::Abort`] the reports are cut before the first failed
/// scenario, which is returned separately. With [`FailurePolicy::Skip`] all
/// reports are kept and nothing is returned.
pub fn apply_failure_policy(
    mut reports: Vec<ScenarioReport>,
    policy: FailurePolicy,
) -> (Vec<ScenarioReport>, Option<ScenarioReport>) {
    if policy == FailurePolicy::Skip {
        return (reports, None);
    }

    match reports.iter().position(|report| report.trips.is_err()) {
        Some(index) => {
            let failed = reports.split_off(index).swap_remove(0);
            (reports, Some(failed))
        }
        None => (reports, None),
    }
}
