//! Static trait catalog: the registry of DNA layers and their markers.
//!
//! The catalog is loaded once and never mutated. Lookups must tolerate
//! marker ids that are not in the catalog (sequencing responses may carry
//! ids minted after this table was authored), so every resolution path has
//! a deterministic fallback: the alphabetic prefix of the marker id maps
//! to a layer through a fixed table, and display names fall back to the
//! raw id.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// A named trait within a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraitMarker {
    /// Short identifier, uppercase prefix plus number (e.g. "H27").
    pub id: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
}

/// A category of musical-style dimensions (e.g. harmonic, rhythmic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraitLayer {
    /// Layer identifier ("L0" through "L23").
    pub id: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// Markers defined in this layer. No marker id appears in two layers.
    pub markers: &'static [TraitMarker],
}

const fn m(id: &'static str, name: &'static str) -> TraitMarker {
    TraitMarker { id, name }
}

/// The full layer registry, in definition order.
pub static DNA_LAYERS: &[TraitLayer] = &[
    TraitLayer {
        id: "L0",
        name: "Sonic Texture",
        markers: &[
            m("W1", "Tape Saturation"),
            m("W5", "White Noise Wash"),
            m("W22", "Vinyl Crackle"),
            m("W30", "Silence & Space"),
        ],
    },
    TraitLayer {
        id: "L1",
        name: "Rhythmic Patterns",
        markers: &[
            m("R1", "Sixteenth-Note Drive"),
            m("R9", "Off-Beat Accents"),
            m("R10", "Snare on 2 & 4"),
            m("R14", "Humanized Swing"),
            m("R15", "Four-on-the-Floor"),
            m("R16", "Breakbeat"),
            m("R19", "Ghost Notes"),
            m("R28", "Tambourine Backbeat"),
            m("R36", "Eighth-Note Tom Fills"),
            m("R40", "Blast Beat"),
        ],
    },
    TraitLayer {
        id: "L2",
        name: "Song Form",
        markers: &[
            m("S3", "Extended Jam Form"),
            m("S7", "Verse-Chorus Economy"),
        ],
    },
    TraitLayer {
        id: "L3",
        name: "Harmonic Language",
        markers: &[
            m("H1", "Twelve-Bar Blues Changes"),
            m("H3", "Dorian Mode"),
            m("H4", "Phrygian Mode"),
            m("H5", "Lydian Mode"),
            m("H8", "Natural Minor"),
            m("H10", "Major Pentatonic"),
            m("H11", "Blues Scale"),
            m("H13", "Chromatic Runs"),
            m("H15", "Suspended Voicings"),
            m("H17", "Extended Chords"),
            m("H21", "Modal Mixture"),
            m("H25", "Power Chords"),
            m("H26", "Harmonized Twin Leads"),
            m("H27", "Tritone Interval"),
            m("H28", "Quartal Harmony"),
            m("H53", "Dissonant Clusters"),
        ],
    },
    TraitLayer {
        id: "L4",
        name: "Vocal Delivery",
        markers: &[
            m("P9", "Rasp & Grit"),
            m("P10", "Gravel Shout"),
            m("P18", "Air-Raid Wail"),
            m("P19", "Guttural Growl"),
            m("P20", "Scream"),
            m("P21", "Rap Cadence"),
            m("P27", "Stacked Choir Harmonies"),
            m("P30", "Falsetto"),
            m("P31", "Chest Voice"),
            m("P33", "Belting"),
            m("P34", "Swagger Drawl"),
            m("P43", "Vocoder"),
        ],
    },
    TraitLayer {
        id: "L5",
        name: "Drum Sound",
        markers: &[
            m("D1", "Tight Kick"),
            m("D2", "Room-Mic Thunder"),
            m("D16", "Drum-Machine Kick"),
            m("D30", "Double Kick Pedal"),
            m("D32", "D-Beat"),
        ],
    },
    TraitLayer {
        id: "L6",
        name: "String Technique",
        markers: &[
            m("B2", "Fingerstyle Pluck"),
            m("B3", "Slap Bass"),
            m("B5", "Palm Muting"),
            m("B10", "Lead Bass"),
            m("B14", "Sweep Picking"),
            m("B16", "Gallop Picking"),
            m("B21", "Keyboard Bass"),
            m("B34", "Distorted Bass"),
        ],
    },
    TraitLayer {
        id: "L7",
        name: "Effects & Processing",
        markers: &[
            m("F1", "Hall Reverb"),
            m("F8", "Shimmer Reverb"),
            m("F26", "Rotary Speaker"),
            m("F33", "Tube Distortion"),
            m("F36", "Feedback Sustain"),
            m("F49", "Talk Box"),
            m("F62", "Glitch Processing"),
        ],
    },
    TraitLayer {
        id: "L8",
        name: "Arrangement",
        markers: &[
            m("A9", "Orchestral Arrangement"),
            m("A10", "Extended Guitar Solo"),
            m("A39", "Through-Composed"),
            m("A54", "Relentless Density"),
        ],
    },
    TraitLayer {
        id: "L9",
        name: "Emotional Register",
        markers: &[
            m("E1", "Joy"),
            m("E27", "Darkness"),
            m("E28", "Brightness"),
            m("E30", "Coldness"),
        ],
    },
    TraitLayer {
        id: "L10",
        name: "Stylistic Color",
        markers: &[
            m("C2", "Occult Imagery"),
            m("C4", "Theatrical Drama"),
            m("C35", "Country Inflection"),
            m("C36", "Heartland Storytelling"),
            m("C43", "Turntablism"),
            m("C52", "Cinematic Sweep"),
            m("C60", "Ambient Texture"),
        ],
    },
    TraitLayer {
        id: "L11",
        name: "Historical Era",
        markers: &[
            m("HE1", "Pre-1950"),
            m("HE4", "1960-1964"),
            m("HE6", "1970-1974"),
            m("HE8", "1980s"),
            m("HE10", "1990s Onward"),
            m("HE24", "Lo-Fi Era Production"),
            m("HE25", "Hi-Fi Era Production"),
        ],
    },
    TraitLayer {
        id: "L12",
        name: "Melodic Character",
        markers: &[
            m("M1", "Hook-Centric Melody"),
            m("M6", "Wordless Vocalise"),
        ],
    },
    TraitLayer {
        id: "L13",
        name: "Tempo & Meter",
        markers: &[
            m("RH7", "Tempo 160-180"),
            m("RH8", "Tempo Above 180"),
            m("RH15", "Seven-Four Time"),
            m("RH18", "Polymeter"),
        ],
    },
    TraitLayer {
        id: "L14",
        name: "Mix Signature",
        markers: &[
            m("SS1", "Vocal-Forward Mix"),
            m("SS4", "Guitar-Forward Mix"),
        ],
    },
    TraitLayer {
        id: "L15",
        name: "Instrumentation",
        markers: &[
            m("IS1", "Stratocaster Voice"),
            m("IS33", "Fender Tube Amp"),
            m("IS129", "Analog Synthesizers"),
        ],
    },
    TraitLayer {
        id: "L16",
        name: "Groove Feel",
        markers: &[
            m("G5", "Swing Ratio 51-55%"),
            m("G35", "Staccato Funk Pocket"),
            m("G50", "Polyrhythmic Pocket"),
            m("G63", "Behind-the-Beat Feel"),
        ],
    },
    TraitLayer {
        id: "L17",
        name: "Production Methods",
        markers: &[
            m("PM3", "Click-Track Precision"),
            m("PM11", "First-Take Liveness"),
        ],
    },
    TraitLayer {
        id: "L18",
        name: "Mix & Loudness",
        markers: &[
            m("ML2", "Wall-of-Sound Density"),
            m("ML9", "Dynamic Headroom"),
        ],
    },
    TraitLayer {
        id: "L19",
        name: "Tonal Atmosphere",
        markers: &[
            m("TA5", "Layered Drones"),
            m("TA12", "Stark Minimalism"),
        ],
    },
    TraitLayer {
        id: "L20",
        name: "Structural Devices",
        markers: &[
            m("MS11", "Multi-Movement Epic"),
            m("MS17", "Operatic Sections"),
            m("MS18", "Tempo & Meter Shifts"),
        ],
    },
    TraitLayer {
        id: "L21",
        name: "Sampling & Reuse",
        markers: &[m("IR1", "Verbatim Sampling")],
    },
    TraitLayer {
        id: "L22",
        name: "Process & Format",
        markers: &[
            m("PF27", "Studio-as-Instrument"),
            m("PF48", "Tape Experimentation"),
            m("PF77", "Loop-Based Writing"),
            m("PF80", "Live-Room Tracking"),
            m("PF92", "Major-Label Polish"),
        ],
    },
    TraitLayer {
        id: "L23",
        name: "Lyrical Subjects",
        markers: &[
            m("LS3", "Mysticism & Fantasy"),
            m("LS8", "Street Realism"),
        ],
    },
];

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());

/// Display name and layer name for a marker id, resolved through the
/// catalog with fallbacks for unknown ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerDisplayInfo {
    /// Marker display name, or the raw id when the catalog has no entry.
    pub name: String,
    /// Display name of the layer the marker resolves to.
    pub layer_name: String,
}

/// All catalog layers in definition order.
pub fn layers() -> &'static [TraitLayer] {
    DNA_LAYERS
}

/// Look up a layer by its id.
pub fn layer(layer_id: &str) -> Option<&'static TraitLayer> {
    DNA_LAYERS.iter().find(|l| l.id == layer_id)
}

/// Find the layer whose marker list contains `marker_id`.
pub fn layer_containing(marker_id: &str) -> Option<&'static TraitLayer> {
    DNA_LAYERS
        .iter()
        .find(|l| l.markers.iter().any(|mk| mk.id == marker_id))
}

/// Layer assignment for a marker id that is not in the catalog, derived
/// from its alphabetic prefix. Unrecognized prefixes land in L1.
pub fn fallback_layer_id(marker_id: &str) -> &'static str {
    let prefix = DIGITS.replace_all(marker_id, "");
    match prefix.as_ref() {
        "W" => "L0",
        "R" => "L1",
        "S" => "L2",
        "H" => "L3",
        "P" => "L4",
        "D" => "L5",
        "B" => "L6",
        "F" => "L7",
        "A" => "L8",
        "E" => "L9",
        "C" => "L10",
        "HE" => "L11",
        "M" => "L12",
        "RH" => "L13",
        "SS" => "L14",
        "IS" => "L15",
        "G" => "L16",
        "PM" => "L17",
        "ML" => "L18",
        "TA" => "L19",
        "MS" => "L20",
        "IR" => "L21",
        "PF" => "L22",
        "LS" => "L23",
        _ => "L1",
    }
}

/// Resolve a marker id to a layer id. Catalog entries win; anything else
/// goes through the prefix fallback, so every id resolves to some layer.
pub fn resolve_layer_id(marker_id: &str) -> &'static str {
    layer_containing(marker_id)
        .map(|l| l.id)
        .unwrap_or_else(|| fallback_layer_id(marker_id))
}

/// Display name for a marker within a layer, falling back to the raw id.
/// Callers must never fail on unknown markers.
pub fn marker_name(layer_id: &str, marker_id: &str) -> String {
    layer(layer_id)
        .and_then(|l| l.markers.iter().find(|mk| mk.id == marker_id))
        .map(|mk| mk.name.to_string())
        .unwrap_or_else(|| marker_id.to_string())
}

/// Resolve a marker id to its display name and layer name.
///
/// Unknown markers resolve to their raw id and the prefix-derived layer,
/// so this never fails.
pub fn marker_display_info(marker_id: &str) -> MarkerDisplayInfo {
    if let Some(layer) = layer_containing(marker_id) {
        let name = layer
            .markers
            .iter()
            .find(|mk| mk.id == marker_id)
            .map(|mk| mk.name.to_string())
            .unwrap_or_else(|| marker_id.to_string());
        return MarkerDisplayInfo {
            name,
            layer_name: layer.name.to_string(),
        };
    }
    let layer_name = layer(fallback_layer_id(marker_id))
        .map(|l| l.name.to_string())
        .unwrap_or_default();
    MarkerDisplayInfo {
        name: marker_id.to_string(),
        layer_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_marker_ids_unique_across_layers() {
        let mut seen = HashSet::new();
        for layer in layers() {
            for marker in layer.markers {
                assert!(seen.insert(marker.id), "duplicate marker id {}", marker.id);
            }
        }
    }

    #[test]
    fn test_layer_containing_is_consistent() {
        for layer in layers() {
            for marker in layer.markers {
                let found = layer_containing(marker.id).unwrap();
                assert_eq!(found.id, layer.id);
                assert!(found.markers.iter().any(|mk| mk.id == marker.id));
            }
        }
    }

    #[test]
    fn test_fallback_layer_is_deterministic() {
        assert_eq!(fallback_layer_id("H999"), "L3");
        assert_eq!(fallback_layer_id("HE999"), "L11");
        assert_eq!(fallback_layer_id("RH999"), "L13");
        assert_eq!(fallback_layer_id("XYZ1"), "L1");
        // Stable across calls.
        assert_eq!(fallback_layer_id("PF500"), fallback_layer_id("PF500"));
    }

    #[test]
    fn test_resolve_layer_prefers_catalog() {
        assert_eq!(resolve_layer_id("H27"), "L3");
        // Unknown id with a known prefix goes through the fallback table.
        assert_eq!(resolve_layer_id("G777"), "L16");
    }

    #[test]
    fn test_marker_display_info_known() {
        let info = marker_display_info("H27");
        assert_eq!(info.name, "Tritone Interval");
        assert_eq!(info.layer_name, "Harmonic Language");
    }

    #[test]
    fn test_marker_display_info_unknown_falls_back_to_raw_id() {
        let info = marker_display_info("H901");
        assert_eq!(info.name, "H901");
        assert_eq!(info.layer_name, "Harmonic Language");
    }

    #[test]
    fn test_marker_name_unknown_layer() {
        assert_eq!(marker_name("L99", "H27"), "H27");
    }
}
