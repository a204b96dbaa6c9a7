//! Trait profile model: a node's full collection of trait entries,
//! grouped by layer.
//!
//! Profiles serialize to the same shape the sequencing service speaks:
//! a JSON object mapping layer ids to entry lists, e.g.
//! `{"L1": [{"id": "R1", "value": 5}]}`. Absent layer keys and empty
//! lists both mean "no traits in that layer".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog;

/// Maximum trait intensity. Values are 1..=5; 0 means absent and is
/// never stored.
pub const MAX_INTENSITY: u8 = 5;

/// A single (marker, intensity) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitEntry {
    /// Marker identifier (e.g. "H27").
    pub id: String,
    /// Intensity 1..=5. 5 is a defining characteristic.
    pub value: u8,
}

impl TraitEntry {
    /// Create a new entry.
    pub fn new(id: impl Into<String>, value: u8) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }
}

/// A node's trait entries grouped by layer id.
///
/// Within one layer's list each marker id is unique; the idempotent
/// [`insert_if_absent`](TraitProfile::insert_if_absent) is the only way
/// entries are added during baseline generation and inheritance, so the
/// invariant holds by construction. Profiles only ever grow: nothing in
/// this module removes an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitProfile {
    layers: BTreeMap<String, Vec<TraitEntry>>,
}

impl TraitProfile {
    /// An empty profile with no layer keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// A profile with one empty entry list per catalog layer, the shape
    /// baseline generation starts from.
    pub fn with_all_layers() -> Self {
        let mut layers = BTreeMap::new();
        for layer in catalog::layers() {
            layers.insert(layer.id.to_string(), Vec::new());
        }
        Self { layers }
    }

    /// Whether the profile holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.layers.values().all(|entries| entries.is_empty())
    }

    /// Total number of entries across all layers.
    pub fn total_entries(&self) -> usize {
        self.layers.values().map(|entries| entries.len()).sum()
    }

    /// Entries for one layer; empty slice when the layer is absent.
    pub fn layer_entries(&self, layer_id: &str) -> &[TraitEntry] {
        self.layers
            .get(layer_id)
            .map(|entries| entries.as_slice())
            .unwrap_or(&[])
    }

    /// Intensity of a marker anywhere in the profile; 0 when absent.
    pub fn intensity(&self, marker_id: &str) -> u8 {
        for entries in self.layers.values() {
            if let Some(entry) = entries.iter().find(|e| e.id == marker_id) {
                return entry.value;
            }
        }
        0
    }

    /// Idempotent insert: resolve the marker's layer through the catalog
    /// and append the entry unless that layer already contains the id.
    /// First write wins; a second insert never overwrites the stored
    /// value. Zero intensities are dropped, values above 5 clamp to 5.
    ///
    /// Returns true if a new entry was stored.
    pub fn insert_if_absent(&mut self, marker_id: &str, value: u8) -> bool {
        if value == 0 {
            return false;
        }
        let layer_id = catalog::resolve_layer_id(marker_id);
        let entries = self.layers.entry(layer_id.to_string()).or_default();
        if entries.iter().any(|e| e.id == marker_id) {
            return false;
        }
        entries.push(TraitEntry::new(marker_id, value.min(MAX_INTENSITY)));
        true
    }

    /// Walk layers in catalog definition order, then any profile-only
    /// layers in sorted order. Every order-sensitive computation in the
    /// crate (dominant-trait collection, flattening) goes through this,
    /// which keeps results deterministic for identical inputs.
    pub fn iter_layers(&self) -> impl Iterator<Item = (&str, &[TraitEntry])> {
        let catalog_order = catalog::layers().iter().filter_map(move |layer| {
            self.layers
                .get(layer.id)
                .map(|entries| (layer.id, entries.as_slice()))
        });
        let extras = self
            .layers
            .iter()
            .filter(|(id, _)| catalog::layer(id).is_none())
            .map(|(id, entries)| (id.as_str(), entries.as_slice()));
        catalog_order.chain(extras)
    }

    /// Flatten to (marker id, intensity) pairs in first-seen order.
    /// Duplicate ids across layers should not occur given the catalog
    /// invariants, but when they do the last value wins and the first
    /// position is kept.
    pub fn flatten(&self) -> Vec<(String, u8)> {
        let mut order: Vec<String> = Vec::new();
        let mut values: BTreeMap<String, u8> = BTreeMap::new();
        for (_, entries) in self.iter_layers() {
            for entry in entries {
                if !values.contains_key(&entry.id) {
                    order.push(entry.id.clone());
                }
                values.insert(entry.id.clone(), entry.value);
            }
        }
        order
            .into_iter()
            .map(|id| {
                let value = values[&id];
                (id, value)
            })
            .collect()
    }

    /// Extend this profile from a higher-resolution one: entries new to
    /// this profile are inserted, entries present on both sides take the
    /// incoming intensity, and entries absent from `other` are kept
    /// untouched. Nothing is ever deleted.
    pub fn extend_from(&mut self, other: &TraitProfile) {
        for (_, entries) in other.iter_layers() {
            for entry in entries {
                if entry.value == 0 {
                    continue;
                }
                let value = entry.value.min(MAX_INTENSITY);
                let layer_id = catalog::resolve_layer_id(&entry.id);
                let slot = self.layers.entry(layer_id.to_string()).or_default();
                match slot.iter_mut().find(|e| e.id == entry.id) {
                    Some(existing) => existing.value = value,
                    None => slot.push(TraitEntry::new(entry.id.clone(), value)),
                }
            }
        }
    }

    /// Drop zero-valued entries and clamp intensities to 5. Applied to
    /// profiles parsed from external payloads, which do not go through
    /// `insert_if_absent`.
    pub fn normalize(&mut self) {
        for entries in self.layers.values_mut() {
            entries.retain(|e| e.value > 0);
            for entry in entries.iter_mut() {
                entry.value = entry.value.min(MAX_INTENSITY);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_resolves_layer_via_catalog() {
        let mut profile = TraitProfile::new();
        assert!(profile.insert_if_absent("H27", 5));
        assert_eq!(profile.layer_entries("L3"), &[TraitEntry::new("H27", 5)]);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut profile = TraitProfile::new();
        assert!(profile.insert_if_absent("R10", 5));
        // Second insert is a no-op and does not overwrite the value.
        assert!(!profile.insert_if_absent("R10", 2));
        assert_eq!(profile.intensity("R10"), 5);
        assert_eq!(profile.total_entries(), 1);
    }

    #[test]
    fn test_insert_drops_zero_and_clamps() {
        let mut profile = TraitProfile::new();
        assert!(!profile.insert_if_absent("H11", 0));
        assert!(profile.insert_if_absent("H11", 9));
        assert_eq!(profile.intensity("H11"), MAX_INTENSITY);
    }

    #[test]
    fn test_unknown_marker_lands_in_fallback_layer() {
        let mut profile = TraitProfile::new();
        profile.insert_if_absent("H901", 3);
        assert_eq!(profile.layer_entries("L3"), &[TraitEntry::new("H901", 3)]);
    }

    #[test]
    fn test_flatten_keeps_catalog_layer_order() {
        let mut profile = TraitProfile::new();
        profile.insert_if_absent("MS18", 5); // L20
        profile.insert_if_absent("R10", 5); // L1
        profile.insert_if_absent("H4", 4); // L3
        let flat = profile.flatten();
        let ids: Vec<&str> = flat.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["R10", "H4", "MS18"]);
    }

    #[test]
    fn test_extend_from_never_deletes() {
        let mut base = TraitProfile::new();
        base.insert_if_absent("R10", 5);
        base.insert_if_absent("H11", 3);

        let mut sequenced = TraitProfile::new();
        sequenced.insert_if_absent("H11", 5); // upgrade
        sequenced.insert_if_absent("F33", 4); // new

        base.extend_from(&sequenced);
        assert_eq!(base.intensity("R10"), 5); // untouched
        assert_eq!(base.intensity("H11"), 5); // upgraded
        assert_eq!(base.intensity("F33"), 4); // added
        assert_eq!(base.total_entries(), 3);
    }

    #[test]
    fn test_wire_shape_round_trip() {
        let payload = r#"{"L1":[{"id":"R1","value":5}],"L3":[{"id":"H11","value":3}]}"#;
        let profile: TraitProfile = serde_json::from_str(payload).unwrap();
        assert_eq!(profile.intensity("R1"), 5);
        assert_eq!(profile.intensity("H11"), 3);
        let back = serde_json::to_string(&profile).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn test_with_all_layers_is_empty_but_keyed() {
        let profile = TraitProfile::with_all_layers();
        assert!(profile.is_empty());
        assert_eq!(profile.iter_layers().count(), catalog::layers().len());
    }
}
