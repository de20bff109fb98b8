pub mod tree_walk;

pub use tree_walk::{TreeStats, metric_ids, validate_tree, walk, walk_all};
