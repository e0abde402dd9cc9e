use std::io::Cursor;

use tourist_guide::{
    scenario::{
        reader::read_scenarios,
        report::{write_text_report, ScenarioReport},
        solve_scenarios,
    },
    GuideError,
};

const BATCH: &str = "\
7 10
1 2 30
1 3 15
1 4 10
2 4 25
2 5 60
3 4 40
3 6 20
4 7 35
5 7 20
6 7 30
1 7 99
3 2
1 2 30
2 3 20
1 3 40
4 4
1 2 10
1 3 5
2 4 8
3 4 20
1 4 9
0 0
";

fn text_report(reports: &[ScenarioReport]) -> String {
    let mut buffer = Vec::new();
    write_text_report(&mut buffer, reports).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn batch_report() {
    let scenarios = read_scenarios(Cursor::new(BATCH)).unwrap();
    let reports = solve_scenarios(&scenarios, true);

    assert_eq!(
        text_report(&reports),
        "\
Scenario #1
Minimum Number of Trips = 5
Scenario #2
Minimum Number of Trips = 3
Scenario #3
Minimum Number of Trips = 2
"
    );
}

#[test]
fn failed_scenario_keeps_numbering() {
    let batch = "3 1\n1 2 5\n1 3 4\n2 1\n1 2 11\n1 2 10\n0 0\n";
    let scenarios = read_scenarios(Cursor::new(batch)).unwrap();
    let reports = solve_scenarios(&scenarios, false);

    assert_eq!(
        reports[0].trips,
        Err(GuideError::NoPathFound { start: 1, end: 3 })
    );
    assert_eq!(reports[1].scenario, 2);
    assert_eq!(reports[1].trips, Ok(1));
    assert_eq!(
        text_report(&reports),
        "Scenario #1\nNo Route Found: no path found from 1 to 3\n\
         Scenario #2\nMinimum Number of Trips = 1\n"
    );
}
