//! Backend-agnostic implementations of dense graph algorithms.

pub mod dijkstra;
pub mod helpers;

pub use dijkstra::dense_dijkstra_impl;
