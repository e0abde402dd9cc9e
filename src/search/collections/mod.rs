pub mod frontier_queue;
pub mod visited_edges;
pub mod widest_path_data;
