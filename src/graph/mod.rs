pub mod traits;
pub mod store;
pub mod loader;
pub mod generators;

pub use traits::{Edge, Graph, NodeIndex};
pub use store::{EdgeRecord, GraphStore};
pub use loader::{load_graph, parse_edge_list, LoadOptions};
