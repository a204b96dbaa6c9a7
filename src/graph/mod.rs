//! Graph data model and build pipeline.
//!
//! Nodes and edges are owned by the graph-editing flow; this module gives
//! them their shape, ships the hand-authored seed dataset, and runs the
//! build pipeline that produces the node set every other subsystem reads:
//! seed nodes, then baseline profiles, then exactly one inheritance sweep.

pub mod seed;

use serde::{Deserialize, Serialize};

use crate::dna::baseline::generate_baseline;
use crate::dna::inherit::propagate;
use crate::dna::profile::TraitProfile;

/// Level-of-detail tier for rendering consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeTier {
    /// Always visible.
    Core,
    /// Ancestors, fade in on zoom.
    Root,
    /// Cross-genre descendants, fade in on zoom.
    Branch,
}

/// How one artist influenced another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfluenceKind {
    Direct,
    Stylistic,
    Compositional,
    Member,
    Cover,
}

/// An artist in the genealogy graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistNode {
    /// Stable identifier, also used as the display key in edges.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Descriptive metadata line ("Origin | Decade | Genre | Vibe"),
    /// scanned together with the label by the synth keyword matcher.
    pub title: String,
    /// Hex display color.
    pub color: String,
    /// Popularity/impact size hint for rendering.
    pub size: u32,
    /// Coarse category 0..=7, selects the baseline trait table.
    pub group: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<NodeTier>,
    /// Trait profile; `None` until baseline generation has run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<TraitProfile>,
    /// True when the profile came from the high-resolution sequencing
    /// path rather than the deterministic baseline.
    #[serde(default)]
    pub sequenced: bool,
}

impl ArtistNode {
    /// Intensity of a marker in this node's profile; 0 when the node has
    /// no profile or lacks the marker.
    pub fn trait_value(&self, marker_id: &str) -> u8 {
        self.profile
            .as_ref()
            .map(|p| p.intensity(marker_id))
            .unwrap_or(0)
    }
}

/// A directional influence relationship between two artists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluenceEdge {
    pub source: String,
    pub target: String,
    /// Influence strength 1..=5, rendered as line width.
    pub weight: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<InfluenceKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// The full graph handed to rendering and scoring consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<ArtistNode>,
    pub edges: Vec<InfluenceEdge>,
}

/// Build the seed graph: seed nodes and edges, baseline profiles for
/// every node, then a single inheritance sweep. The result is the final
/// node dataset; the propagator must not run on it again.
pub fn build_graph() -> GraphData {
    let mut nodes = seed::seed_nodes();
    let edges = seed::seed_edges();

    for node in &mut nodes {
        let overrides = seed::signature_traits(&node.id).unwrap_or(&[]);
        node.profile = Some(generate_baseline(node.group, overrides));
    }

    propagate(&mut nodes, &edges);

    GraphData { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_graph_gives_every_node_a_profile() {
        let graph = build_graph();
        assert!(!graph.nodes.is_empty());
        for node in &graph.nodes {
            let profile = node.profile.as_ref().expect("profile missing");
            assert!(!profile.is_empty(), "empty profile for {}", node.id);
            assert_eq!(node.trait_value("R10"), 5, "backbone missing on {}", node.id);
            assert!(!node.sequenced);
        }
    }

    #[test]
    fn test_build_graph_is_deterministic() {
        let a = build_graph();
        let b = build_graph();
        assert_eq!(
            serde_json::to_vec(&a.nodes).unwrap(),
            serde_json::to_vec(&b.nodes).unwrap()
        );
    }

    #[test]
    fn test_edges_reference_existing_nodes() {
        let graph = build_graph();
        for edge in &graph.edges {
            assert!(
                graph.nodes.iter().any(|n| n.id == edge.source),
                "unknown source {}",
                edge.source
            );
            assert!(
                graph.nodes.iter().any(|n| n.id == edge.target),
                "unknown target {}",
                edge.target
            );
        }
    }
}
