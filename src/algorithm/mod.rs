pub mod traits;
pub mod astar;
pub mod dijkstra;
pub mod batch;

pub use traits::{PathSearch, SearchResult, SearchStats};
