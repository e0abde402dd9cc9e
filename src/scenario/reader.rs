use std::io::{BufRead, Lines};

use log::debug;

use super::Scenario;
use crate::{
    error::ParseError,
    graphs::{adjacency_graph::AdjacencyGraph, edge::WeightedEdge, VertexId},
    search::request::TripRequest,
};

/// Reads a batch of scenarios.
///
/// Each scenario is a header `cities roads`, one line `u v capacity` per
/// road and a query line `start end tourists`. The header `0 0` or the end of
/// input finishes the batch. Blank lines are skipped.
pub fn read_scenarios<R: BufRead>(reader: R) -> Result<Vec<Scenario>, ParseError> {
    let mut lines = NumberedLines::new(reader.lines());
    let mut scenarios = Vec::new();

    while let Some((line, values)) = lines.next_values()? {
        let [number_of_vertices, number_of_edges] = exact::<2>(line, values)?;
        if number_of_vertices == 0 && number_of_edges == 0 {
            break;
        }
        if number_of_vertices == 0 {
            return Err(ParseError::MissingVertices {
                line,
                number_of_edges,
            });
        }

        let mut graph = AdjacencyGraph::with_vertices(number_of_vertices);
        for _ in 0..number_of_edges {
            let (line, values) = lines.expect_values("a road `u v capacity`")?;
            let [tail, head, capacity] = exact::<3>(line, values)?;
            check_vertex(line, tail, number_of_vertices)?;
            check_vertex(line, head, number_of_vertices)?;
            if capacity == 0 {
                return Err(ParseError::ZeroCapacity { line });
            }

            match WeightedEdge::new(tail, head, capacity) {
                Some(edge) => graph.add_edge(&edge),
                None => debug!("line {}: skipping road from city {} to itself", line, tail),
            }
        }

        let (line, values) = lines.expect_values("a query `start end tourists`")?;
        let [start, end, tourists] = exact::<3>(line, values)?;
        check_vertex(line, start, number_of_vertices)?;
        check_vertex(line, end, number_of_vertices)?;

        scenarios.push(Scenario {
            graph,
            request: TripRequest::new(start, end, tourists),
        });
    }

    debug!("read {} scenarios", scenarios.len());
    Ok(scenarios)
}

struct NumberedLines<B> {
    lines: Lines<B>,
    line: usize,
}

impl<B: BufRead> NumberedLines<B> {
    fn new(lines: Lines<B>) -> Self {
        NumberedLines { lines, line: 0 }
    }

    /// Next non blank line split into integers, with its line number.
    fn next_values(&mut self) -> Result<Option<(usize, Vec<u32>)>, ParseError> {
        for text in self.lines.by_ref() {
            let text = text?;
            self.line += 1;

            if text.trim().is_empty() {
                continue;
            }

            let values = text
                .split_whitespace()
                .map(|token| {
                    token.parse::<u32>().map_err(|_| ParseError::InvalidNumber {
                        line: self.line,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Some((self.line, values)));
        }

        Ok(None)
    }

    fn expect_values(&mut self, expected: &'static str) -> Result<(usize, Vec<u32>), ParseError> {
        self.next_values()?.ok_or(ParseError::UnexpectedEof {
            line: self.line + 1,
            expected,
        })
    }
}

fn exact<const N: usize>(line: usize, values: Vec<u32>) -> Result<[u32; N], ParseError> {
    let found = values.len();
    values.try_into().map_err(|_| ParseError::WrongTokenCount {
        line,
        expected: N,
        found,
    })
}

fn check_vertex(line: usize, vertex: VertexId, number_of_vertices: u32) -> Result<(), ParseError> {
    if vertex == 0 || vertex > number_of_vertices {
        return Err(ParseError::VertexOutOfRange {
            line,
            vertex,
            number_of_vertices,
        });
    }
    Ok(())
}
