//! Trait diffing: classify the union of two profiles' markers into
//! shared, mutation (new), and lost buckets, ranked by relevance.

use serde::Serialize;
use thiserror::Error;

use super::catalog;
use super::profile::TraitProfile;
use crate::graph::ArtistNode;

/// Display cap for the shared bucket.
pub const SHARED_CAP: usize = 8;
/// Display cap for the mutation bucket.
pub const MUTATION_CAP: usize = 6;
/// Display cap for the lost bucket.
pub const LOST_CAP: usize = 4;

/// Diff failures. "Nothing in common" is not an error; a wholly absent
/// profile is.
#[derive(Debug, Error)]
pub enum DiffError {
    /// One side has no trait profile at all, so there is nothing to
    /// compare. Distinct from an empty diff.
    #[error("insufficient trait data: no profile for {0}")]
    MissingProfile(String),
}

/// One marker compared across both sides.
#[derive(Debug, Clone, Serialize)]
pub struct MarkerComparison {
    pub id: String,
    /// Display name, falling back to the raw id for unknown markers.
    pub name: String,
    pub layer_name: String,
    /// Intensity on the source (influencer) side; 0 when absent.
    pub source: u8,
    /// Intensity on the target (influenced) side; 0 when absent.
    pub target: u8,
    /// Ranking score: `source + target + 5 if shared + 2 if boosted`.
    /// Orders display within a bucket only.
    pub relevance: u8,
}

/// A classification bucket, truncated to its display cap.
#[derive(Debug, Clone, Serialize)]
pub struct DiffBucket {
    /// Top entries by relevance, at most the bucket's cap.
    pub entries: Vec<MarkerComparison>,
    /// True bucket size before truncation, so callers can render
    /// "+N more" without recomputing.
    pub total: usize,
}

impl DiffBucket {
    fn from_ranked(mut entries: Vec<MarkerComparison>, cap: usize) -> Self {
        // Stable sort: ties keep input encounter order.
        entries.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        let total = entries.len();
        entries.truncate(cap);
        Self { entries, total }
    }
}

/// The classified comparison of two profiles.
#[derive(Debug, Clone, Serialize)]
pub struct TraitDiff {
    /// Markers present with intensity > 0 on both sides.
    pub shared: DiffBucket,
    /// Markers the target has and the source lacks.
    pub mutations: DiffBucket,
    /// Markers the source has and the target lacks.
    pub lost: DiffBucket,
}

/// A node-level diff, carrying the resolution flag for the pair.
#[derive(Debug, Clone, Serialize)]
pub struct NodeComparison {
    pub diff: TraitDiff,
    /// True only when both nodes carry sequenced (high-resolution)
    /// profiles.
    pub is_high_res: bool,
}

/// Diff two profiles.
///
/// The union of marker ids is classified exactly: every id lands in one
/// bucket and only one. Buckets are ranked by relevance descending and
/// truncated to their display caps; `total` keeps the true sizes.
pub fn diff_profiles(source: &TraitProfile, target: &TraitProfile) -> TraitDiff {
    let source_flat = source.flatten();
    let target_flat = target.flatten();

    let lookup = |flat: &[(String, u8)], id: &str| -> u8 {
        flat.iter()
            .find(|(marker, _)| marker == id)
            .map(|(_, value)| *value)
            .unwrap_or(0)
    };

    // Union in encounter order: source first, then target-only ids.
    let mut union: Vec<String> = source_flat.iter().map(|(id, _)| id.clone()).collect();
    for (id, _) in &target_flat {
        if !union.iter().any(|seen| seen == id) {
            union.push(id.clone());
        }
    }

    let mut shared = Vec::new();
    let mut mutations = Vec::new();
    let mut lost = Vec::new();

    for id in union {
        let s = lookup(&source_flat, &id);
        let t = lookup(&target_flat, &id);
        let info = catalog::marker_display_info(&id);
        let relevance = s + t + if s > 0 && t > 0 { 5 } else { 0 } + if t > s { 2 } else { 0 };
        let row = MarkerComparison {
            id,
            name: info.name,
            layer_name: info.layer_name,
            source: s,
            target: t,
            relevance,
        };
        if s > 0 && t > 0 {
            shared.push(row);
        } else if t > 0 {
            mutations.push(row);
        } else {
            lost.push(row);
        }
    }

    TraitDiff {
        shared: DiffBucket::from_ranked(shared, SHARED_CAP),
        mutations: DiffBucket::from_ranked(mutations, MUTATION_CAP),
        lost: DiffBucket::from_ranked(lost, LOST_CAP),
    }
}

/// Diff two nodes' profiles.
///
/// # Errors
///
/// Returns [`DiffError::MissingProfile`] when either node has no profile
/// at all; callers must be able to distinguish "nothing in common" from
/// "cannot compare".
pub fn compare_nodes(
    source: &ArtistNode,
    target: &ArtistNode,
) -> Result<NodeComparison, DiffError> {
    let source_profile = source
        .profile
        .as_ref()
        .ok_or_else(|| DiffError::MissingProfile(source.label.clone()))?;
    let target_profile = target
        .profile
        .as_ref()
        .ok_or_else(|| DiffError::MissingProfile(target.label.clone()))?;

    Ok(NodeComparison {
        diff: diff_profiles(source_profile, target_profile),
        is_high_res: source.sequenced && target.sequenced,
    })
}
