//! Compiled rail graph and methods to work with it

use hashbrown::HashMap;
use log::info;

use super::network::{Edge, Node};
use crate::{ArcIdx, EdgeIdx, Error, NodeIdx};

/// One traversal direction of a declared edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    pub tail: NodeIdx,
    pub head: NodeIdx,
    /// Declared edge this arc was derived from
    pub edge: EdgeIdx,
}

/// Immutable adjacency structure over a rail network.
///
/// All arcs live in one flat array, grouped by tail node; `arcs_start[n]..arcs_start[n + 1]`
/// are the outgoing arcs of node `n`. Every declared edge contributes two arcs,
/// itself and its mirror.
#[derive(Debug, Clone)]
pub struct RailGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    arcs: Vec<Arc>,
    arcs_start: Vec<usize>,
    node_index: HashMap<String, NodeIdx>,
}

impl RailGraph {
    /// Builds the graph from raw records.
    ///
    /// # Errors
    ///
    /// Fails on duplicate node ids, on edges referencing unknown nodes, and on
    /// edges with negative, non-finite or out-of-range attributes.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, Error> {
        let mut node_index = HashMap::with_capacity(nodes.len());
        for (idx, node) in nodes.iter().enumerate() {
            if node_index.insert(node.id.clone(), idx).is_some() {
                return Err(Error::DuplicateNode(node.id.clone()));
            }
        }

        // Resolve endpoints and count degrees in one pass
        let mut endpoints = Vec::with_capacity(edges.len());
        let mut degree = vec![0usize; nodes.len()];
        for edge in &edges {
            let resolve = |id: &String| {
                node_index
                    .get(id)
                    .copied()
                    .ok_or_else(|| Error::UnknownEdgeEndpoint {
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        missing: id.clone(),
                    })
            };
            let tail = resolve(&edge.from)?;
            let head = resolve(&edge.to)?;
            edge.validate().map_err(|reason| Error::InvalidEdge {
                from: edge.from.clone(),
                to: edge.to.clone(),
                reason,
            })?;
            degree[tail] += 1;
            degree[head] += 1;
            endpoints.push((tail, head));
        }

        let mut arcs_start = Vec::with_capacity(nodes.len() + 1);
        let mut offset = 0;
        arcs_start.push(0);
        for d in &degree {
            offset += d;
            arcs_start.push(offset);
        }

        // Fill slots per node; `cursor` tracks the next free slot of every node
        let placeholder = Arc {
            tail: 0,
            head: 0,
            edge: 0,
        };
        let mut arcs = vec![placeholder; offset];
        let mut cursor = arcs_start[..nodes.len()].to_vec();
        for (edge, &(tail, head)) in endpoints.iter().enumerate() {
            arcs[cursor[tail]] = Arc { tail, head, edge };
            cursor[tail] += 1;
            arcs[cursor[head]] = Arc {
                tail: head,
                head: tail,
                edge,
            };
            cursor[head] += 1;
        }

        info!(
            "Built rail graph with {} nodes, {} edges ({} arcs)",
            nodes.len(),
            edges.len(),
            arcs.len()
        );

        Ok(Self {
            nodes,
            edges,
            arcs,
            arcs_start,
            node_index,
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of declared edges (mirrors not counted)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Dense index of the node with the given id
    pub fn node_idx(&self, id: &str) -> Option<NodeIdx> {
        self.node_index.get(id).copied()
    }

    pub fn node(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, idx: EdgeIdx) -> &Edge {
        &self.edges[idx]
    }

    pub fn arc(&self, idx: ArcIdx) -> &Arc {
        &self.arcs[idx]
    }

    /// Outgoing arcs of a node, declared and mirrored, with their arc indices
    pub fn outgoing(&self, node: NodeIdx) -> impl Iterator<Item = (ArcIdx, &Arc)> {
        let range = self.arcs_start[node]..self.arcs_start[node + 1];
        range.clone().zip(&self.arcs[range])
    }

    /// Declared edges touching the node with the given id
    pub fn incident_edges(&self, id: &str) -> Vec<&Edge> {
        self.node_idx(id)
            .map(|node| {
                self.outgoing(node)
                    .map(|(_, arc)| &self.edges[arc.edge])
                    .collect()
            })
            .unwrap_or_default()
    }
}
