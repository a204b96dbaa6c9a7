//! Trait inheritance along influence edges.
//!
//! Connected nodes should share plausible traits so trace and diff
//! features have signal before any high-resolution sequencing happens.
//! The propagator runs exactly once, synchronously, right after baseline
//! generation; it walks edges in input order and seeds two of the
//! source's dominant traits into the target at reduced intensity.
//!
//! Candidate selection uses indices derived from the two node id
//! lengths. This is a deliberately weak pseudo-random selector, kept
//! because it is deterministic across runs and matches the established
//! expected outputs; it is collision-prone (both indices frequently
//! coincide), in which case the second candidate is a no-op.

use std::collections::HashMap;

use crate::graph::{ArtistNode, InfluenceEdge};

/// Minimum intensity for a trait to count as dominant.
pub const DOMINANT_THRESHOLD: u8 = 4;

/// Number of dominant traits considered per edge.
const CANDIDATES_PER_EDGE: usize = 2;

/// Run one inheritance sweep over all edges, extending target profiles
/// in place.
///
/// Skip-and-continue throughout: a missing endpoint, a missing profile,
/// or an empty dominant set skips that edge and never aborts the pass.
/// Inherited entries get intensity `max(1, source - 1)` and never
/// overwrite an existing entry in the target layer.
pub fn propagate(nodes: &mut [ArtistNode], edges: &[InfluenceEdge]) {
    let index: HashMap<String, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.clone(), i))
        .collect();

    for edge in edges {
        let (Some(&src_idx), Some(&dst_idx)) = (index.get(&edge.source), index.get(&edge.target))
        else {
            log::debug!(
                "inheritance: skipping edge {} -> {}: unknown endpoint",
                edge.source,
                edge.target
            );
            continue;
        };

        let candidates = {
            let Some(profile) = nodes[src_idx].profile.as_ref() else {
                log::debug!(
                    "inheritance: skipping edge {} -> {}: source has no profile",
                    edge.source,
                    edge.target
                );
                continue;
            };
            let dominant: Vec<(String, u8)> = profile
                .iter_layers()
                .flat_map(|(_, entries)| entries)
                .filter(|e| e.value >= DOMINANT_THRESHOLD)
                .map(|e| (e.id.clone(), e.value))
                .collect();
            if dominant.is_empty() {
                continue;
            }
            select_candidates(&edge.source, &edge.target, &dominant)
        };

        let Some(profile) = nodes[dst_idx].profile.as_mut() else {
            log::debug!(
                "inheritance: skipping edge {} -> {}: target has no profile",
                edge.source,
                edge.target
            );
            continue;
        };
        for (id, value) in candidates {
            // Existing entries win, whether baseline or previously
            // inherited; a coinciding second candidate is a no-op here.
            profile.insert_if_absent(&id, value.saturating_sub(1).max(1));
        }
    }
}

/// Pick the two candidate traits for an edge from the dominant set.
fn select_candidates(
    source_id: &str,
    target_id: &str,
    dominant: &[(String, u8)],
) -> Vec<(String, u8)> {
    let n = dominant.len();
    let first = (source_id.len() + target_id.len()) % n;
    let second = (source_id.len() * target_id.len()) % n;
    let mut picked = Vec::with_capacity(CANDIDATES_PER_EDGE);
    picked.push(dominant[first].clone());
    picked.push(dominant[second].clone());
    picked
}
