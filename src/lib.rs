//! Finds every dictionary word that can be traced on a Squaredle-style letter grid and
//! traces each new word on screen.
//!
//! The pieces, leaf first:
//! - [`grid`]: the board, its cells and their 8-way adjacency
//! - [`dictionary`]: word acceptance by global set and length bucket
//! - [`prefix_tree`]: prefix index used to prune the search
//! - [`registry`]: words already found in this run
//! - [`search`]: depth-first enumeration of simple paths
//! - [`gesture`], [`actuator`], [`emitter`]: from a path to pointer events on screen

pub mod actuator;
pub mod dictionary;
pub mod emitter;
pub mod errors;
pub mod gesture;
pub mod grid;
pub mod log;
pub mod prefix_tree;
pub mod registry;
pub mod search;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
