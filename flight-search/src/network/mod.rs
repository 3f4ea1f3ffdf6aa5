//! The flight network: graph, direct flight index and the shared handle
//! that lets a rebuilt network replace the current one.

mod graph;
mod index;
mod shared;

pub use graph::{Graph, GraphError, Vertex, build_graph};
pub use index::{DirectFlightIndex, build_index};
pub use shared::{FlightNetwork, SharedNetwork};
