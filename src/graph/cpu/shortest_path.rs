//! CPU implementation of dense shortest path algorithms.

use crate::graph::impl_generic::dense_dijkstra_impl;
use crate::graph::traits::shortest_path::DenseShortestPathAlgorithms;
use crate::graph::traits::types::{DenseGraph, DijkstraOptions, DistanceVector};
use numr::error::Result;
use numr::runtime::cpu::{CpuClient, CpuRuntime};

impl DenseShortestPathAlgorithms<CpuRuntime> for CpuClient {
    fn dense_dijkstra_with_options(
        &self,
        graph: &DenseGraph<CpuRuntime>,
        source: usize,
        options: &DijkstraOptions,
    ) -> Result<DistanceVector> {
        dense_dijkstra_impl(self, graph, source, options)
    }
}
