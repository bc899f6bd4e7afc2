//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation oracles
//! - `draw.rs` - Draw detection (fifty-move, repetition, insufficient material)
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `eval.rs` - Static evaluation
//! - `san.rs` - SAN output
//! - `search.rs` - Search behavior
//! - `proptest.rs` - Property-based tests

mod edge_cases;
mod proptest;
mod san;
mod search;
