use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::{error::GuideError, search::request::TripRequest};

/// Outcome of one scenario of a batch. `scenario` counts from 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: usize,
    pub request: TripRequest,
    pub trips: Result<u32, GuideError>,
}

/// Prints the classic two line block per scenario:
///
/// ```text
/// Scenario #1
/// Minimum Number of Trips = 5
/// ```
pub fn write_text_report<W: Write>(mut writer: W, reports: &[ScenarioReport]) -> io::Result<()> {
    for report in reports {
        writeln!(writer, "Scenario #{}", report.scenario)?;
        match &report.trips {
            Ok(trips) => writeln!(writer, "Minimum Number of Trips = {}", trips)?,
            Err(error) => writeln!(writer, "No Route Found: {}", error)?,
        }
    }
    writer.flush()
}

pub fn write_json_report<W: Write>(
    mut writer: W,
    reports: &[ScenarioReport],
) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut writer, reports)?;
    writer.flush().map_err(serde_json::Error::io)
}
