//! The AI sequencing collaborator: high-resolution trait profiles on
//! demand.
//!
//! Sequencing is the only asynchronous boundary in the crate. Everything
//! else computes synchronously over snapshots; a sequencing request
//! either resolves with a profile that is merged into the node
//! (extending, never deleting) or fails and leaves the node untouched.
//! The core never retries a failed sequence and never partially applies
//! a result. A caller that drops an in-flight future simply never
//! applies it; there is no shared state to unwind.

pub mod cache;
pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

use crate::dna::profile::TraitProfile;
use crate::graph::ArtistNode;

pub use cache::SessionCache;
pub use gemini::GeminiSequencer;

/// Sequencing failures. Malformed payloads are failures like any other:
/// the caller sees the error and prior state is untouched.
#[derive(Debug, Error)]
pub enum SequencingError {
    /// Connection, TLS, or timeout problems talking to the service.
    #[error("sequencing transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-retryable error status.
    #[error("sequencing service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// Retryable statuses kept failing until the retry budget ran out.
    #[error("sequencing service unavailable after retries: {0}")]
    Unavailable(String),

    /// The response arrived but could not be parsed into a profile.
    #[error("malformed sequencing response: {0}")]
    MalformedResponse(String),

    /// No API key was configured for the client.
    #[error("sequencing API key is not configured")]
    MissingApiKey,
}

/// An external service that produces a high-resolution trait profile for
/// an artist label.
#[async_trait]
pub trait Sequencer: Send + Sync {
    /// Sequence one artist. Implementations may serve repeated requests
    /// for the same label from a session cache.
    async fn sequence(&self, label: &str) -> Result<TraitProfile, SequencingError>;
}

/// Merge a sequenced profile into a node and mark it high-resolution.
///
/// Existing entries are upgraded or kept, never removed; a node without
/// any profile adopts the sequenced one outright.
pub fn apply_sequenced(node: &mut ArtistNode, sequenced: TraitProfile) {
    match node.profile.as_mut() {
        Some(profile) => profile.extend_from(&sequenced),
        None => node.profile = Some(sequenced),
    }
    node.sequenced = true;
}

/// Sequence both endpoints of a link concurrently and await them
/// jointly. The first failure wins and nothing is applied.
pub async fn sequence_pair(
    sequencer: &dyn Sequencer,
    source_label: &str,
    target_label: &str,
) -> Result<(TraitProfile, TraitProfile), SequencingError> {
    futures::future::try_join(
        sequencer.sequence(source_label),
        sequencer.sequence(target_label),
    )
    .await
}

/// Upgrade a link's endpoints to high resolution ahead of a re-diff.
///
/// Only endpoints that are not already sequenced are requested; both
/// requests run concurrently. On any failure neither node is modified.
pub async fn upgrade_link(
    sequencer: &dyn Sequencer,
    source: &mut ArtistNode,
    target: &mut ArtistNode,
) -> Result<(), SequencingError> {
    match (source.sequenced, target.sequenced) {
        (true, true) => Ok(()),
        (false, true) => {
            let profile = sequencer.sequence(&source.label).await?;
            apply_sequenced(source, profile);
            Ok(())
        }
        (true, false) => {
            let profile = sequencer.sequence(&target.label).await?;
            apply_sequenced(target, profile);
            Ok(())
        }
        (false, false) => {
            let (source_profile, target_profile) =
                sequence_pair(sequencer, &source.label, &target.label).await?;
            apply_sequenced(source, source_profile);
            apply_sequenced(target, target_profile);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted sequencer: counts calls and either returns a canned
    /// profile or fails.
    struct ScriptedSequencer {
        calls: AtomicUsize,
        fail: bool,
    }

    impl ScriptedSequencer {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Sequencer for ScriptedSequencer {
        async fn sequence(&self, label: &str) -> Result<TraitProfile, SequencingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SequencingError::MalformedResponse(format!(
                    "bad payload for {}",
                    label
                )));
            }
            let mut profile = TraitProfile::new();
            profile.insert_if_absent("H17", 5);
            profile.insert_if_absent("PF27", 4);
            Ok(profile)
        }
    }

    fn sample_node(label: &str) -> ArtistNode {
        let mut profile = TraitProfile::new();
        profile.insert_if_absent("R10", 5);
        profile.insert_if_absent("H17", 2);
        ArtistNode {
            id: label.to_string(),
            label: label.to_string(),
            title: String::new(),
            color: "#ffffff".to_string(),
            size: 20,
            group: 3,
            tier: None,
            profile: Some(profile),
            sequenced: false,
        }
    }

    #[test]
    fn test_apply_sequenced_extends_and_flags() {
        let mut node = sample_node("Queen");
        let mut sequenced = TraitProfile::new();
        sequenced.insert_if_absent("H17", 4);
        sequenced.insert_if_absent("MS17", 5);
        apply_sequenced(&mut node, sequenced);

        assert!(node.sequenced);
        assert_eq!(node.trait_value("R10"), 5); // kept
        assert_eq!(node.trait_value("H17"), 4); // upgraded
        assert_eq!(node.trait_value("MS17"), 5); // added
    }

    #[test]
    fn test_apply_sequenced_adopts_profile_when_none() {
        let mut node = sample_node("Queen");
        node.profile = None;
        let mut sequenced = TraitProfile::new();
        sequenced.insert_if_absent("P27", 5);
        apply_sequenced(&mut node, sequenced);
        assert!(node.sequenced);
        assert_eq!(node.trait_value("P27"), 5);
    }

    #[tokio::test]
    async fn test_upgrade_link_sequences_both_concurrently() {
        let sequencer = ScriptedSequencer::ok();
        let mut source = sample_node("Queen");
        let mut target = sample_node("Meat Loaf");
        upgrade_link(&sequencer, &mut source, &mut target)
            .await
            .unwrap();
        assert_eq!(sequencer.call_count(), 2);
        assert!(source.sequenced && target.sequenced);
    }

    #[tokio::test]
    async fn test_upgrade_link_skips_already_sequenced() {
        let sequencer = ScriptedSequencer::ok();
        let mut source = sample_node("Queen");
        source.sequenced = true;
        let mut target = sample_node("Meat Loaf");
        upgrade_link(&sequencer, &mut source, &mut target)
            .await
            .unwrap();
        assert_eq!(sequencer.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_leaves_nodes_untouched() {
        let sequencer = ScriptedSequencer::failing();
        let mut source = sample_node("Queen");
        let mut target = sample_node("Meat Loaf");
        let before_source = source.profile.clone();
        let before_target = target.profile.clone();

        let result = upgrade_link(&sequencer, &mut source, &mut target).await;
        assert!(matches!(
            result,
            Err(SequencingError::MalformedResponse(_))
        ));
        assert_eq!(source.profile, before_source);
        assert_eq!(target.profile, before_target);
        assert!(!source.sequenced && !target.sequenced);
    }

    #[test]
    fn test_sequence_pair_yields_both_profiles() {
        let sequencer = ScriptedSequencer::ok();
        let (a, b) =
            tokio_test::block_on(sequence_pair(&sequencer, "Rush", "Tool")).unwrap();
        assert_eq!(a.intensity("H17"), 5);
        assert_eq!(b.intensity("PF27"), 4);
    }
}
