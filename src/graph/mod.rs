// src/graph/mod.rs
// =============================================================================
// This module handles graph output.
//
// Submodules:
// - dot: streams discovered edges to a DOT digraph file
// =============================================================================

mod dot;

// Re-export the graph writer
pub use dot::GraphWriter;
