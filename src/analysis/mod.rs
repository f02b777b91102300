//! Analysis of carved grids

/// Spanning-tree verification and passage statistics
pub mod topology;
