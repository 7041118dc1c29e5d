#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod graph;
pub mod parse;
mod union_find;

pub use graph::{
    CycleDetected, CycleEnumeration, Detector, Graph, enumerate_cycles, enumerate_cycles_capped,
    find_cycle, has_cycle, has_cycle_iterative, has_cycle_kahn, topological_order_or_cycle,
};
pub use parse::{ParseError, parse_adjacency};

/// Returns the current version of the cyclegraph-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
