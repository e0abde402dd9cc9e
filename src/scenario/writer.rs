use std::io::{self, Write};

use itertools::Itertools;

use super::Scenario;
use crate::graphs::Graph;

/// Writes scenarios in the batch format understood by
/// [`read_scenarios`](super::reader::read_scenarios), terminated by `0 0`.
pub fn write_scenarios<W: Write>(mut writer: W, scenarios: &[Scenario]) -> io::Result<()> {
    for Scenario { graph, request } in scenarios {
        let edges = graph.edges();
        writeln!(writer, "{} {}", graph.number_of_vertices(), edges.len())?;
        for edge in edges {
            writeln!(
                writer,
                "{}",
                [edge.tail(), edge.head(), edge.capacity()].iter().join(" ")
            )?;
        }
        writeln!(
            writer,
            "{}",
            [request.start, request.end, request.tourists].iter().join(" ")
        )?;
    }
    writeln!(writer, "0 0")?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::write_scenarios;
    use crate::scenario::reader::read_scenarios;

    #[test]
    fn written_batch_reads_back() {
        let input = "4 4\n1 2 10\n1 3 5\n2 4 8\n3 4 20\n1 4 9\n3 1\n3 2 7\n1 3 2\n0 0\n";
        let scenarios = read_scenarios(Cursor::new(input)).unwrap();

        let mut buffer = Vec::new();
        write_scenarios(&mut buffer, &scenarios).unwrap();
        let reread = read_scenarios(Cursor::new(buffer)).unwrap();

        assert_eq!(reread, scenarios);
    }
}
