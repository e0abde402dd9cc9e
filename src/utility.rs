use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

use crate::{
    graphs::{adjacency_graph::AdjacencyGraph, edge::WeightedEdge, Capacity, VertexId},
    scenario::Scenario,
    search::request::TripRequest,
};

pub fn get_progressbar_long_jobs(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(
        ProgressStyle::with_template(" {msg} {wide_bar} estimated remaining: {eta_precise}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

/// Shape of randomly generated scenarios.
#[derive(Clone, Copy, Debug)]
pub struct ScenarioShape {
    pub number_of_vertices: u32,
    pub number_of_edges: u32,
    pub max_capacity: Capacity,
    pub max_tourists: u32,
}

/// Builds a scenario with random roads and a random trip between two
/// distinct cities. Needs at least two cities and `max_capacity >= 2`.
pub fn random_scenario<R: Rng>(rng: &mut R, shape: &ScenarioShape) -> Option<Scenario> {
    let ScenarioShape {
        number_of_vertices,
        number_of_edges,
        max_capacity,
        max_tourists,
    } = *shape;
    if number_of_vertices < 2 || max_capacity < 2 || max_tourists == 0 {
        return None;
    }

    let mut graph = AdjacencyGraph::with_vertices(number_of_vertices);
    for _ in 0..number_of_edges {
        let (tail, head) = random_pair(rng, number_of_vertices);
        let capacity = rng.gen_range(2..=max_capacity);
        graph.add_edge(&WeightedEdge::new(tail, head, capacity)?);
    }

    let (start, end) = random_pair(rng, number_of_vertices);
    let tourists = rng.gen_range(1..=max_tourists);

    Some(Scenario {
        graph,
        request: TripRequest::new(start, end, tourists),
    })
}

// guarantee that tail != head
fn random_pair<R: Rng>(rng: &mut R, number_of_vertices: u32) -> (VertexId, VertexId) {
    let tail = rng.gen_range(1..=number_of_vertices);
    let mut head = rng.gen_range(1..number_of_vertices);
    if head >= tail {
        head += 1;
    }
    (tail, head)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{random_scenario, ScenarioShape};
    use crate::graphs::{is_symmetric, Graph};

    #[test]
    fn random_scenarios_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let shape = ScenarioShape {
            number_of_vertices: 20,
            number_of_edges: 40,
            max_capacity: 100,
            max_tourists: 500,
        };

        for _ in 0..50 {
            let scenario = random_scenario(&mut rng, &shape).unwrap();
            assert_eq!(scenario.graph.number_of_vertices(), 20);
            assert!(scenario.graph.number_of_edges() <= 40);
            assert!(is_symmetric(&scenario.graph));
            assert_ne!(scenario.request.start, scenario.request.end);
            assert!((1..=500).contains(&scenario.request.tourists));
        }
    }

    #[test]
    fn degenerate_shapes_are_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        let shape = ScenarioShape {
            number_of_vertices: 1,
            number_of_edges: 0,
            max_capacity: 100,
            max_tourists: 5,
        };
        assert!(random_scenario(&mut rng, &shape).is_none());
    }
}
