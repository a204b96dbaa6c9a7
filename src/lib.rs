//! # genegraph
//!
//! The musical-DNA core behind an interactive artist genealogy graph.
//!
//! Nodes carry layered trait profiles ("musical DNA"); directed edges
//! carry influence. This crate owns the trait catalog, baseline profile
//! generation, the deterministic inheritance sweep that seeds traits
//! along edges, the synth reverse-lookup engine that scores every node
//! against eight tunable perceptual dimensions, and the diff engine that
//! classifies two profiles' traits into shared, mutated, and lost.
//! Rendering and UI are consumers of these results; the AI sequencing
//! collaborator that upgrades profiles to high resolution is consumed
//! through the [`sequencing::Sequencer`] trait.

pub mod dna;
pub mod graph;
pub mod sequencing;
pub mod synth;

pub use dna::catalog::{marker_display_info, MarkerDisplayInfo};
pub use dna::diff::{compare_nodes, diff_profiles, DiffError, NodeComparison, TraitDiff};
pub use dna::profile::{TraitEntry, TraitProfile};
pub use graph::{build_graph, ArtistNode, GraphData, InfluenceEdge};
pub use sequencing::{GeminiSequencer, Sequencer, SequencingError};
pub use synth::{score_map, synth_score, SynthParams};

/// Library version.
pub const VERSION: &str = "0.4.1";
