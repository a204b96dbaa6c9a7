//! The synth reverse-lookup engine: scores every node against the eight
//! tunable dimensions.
//!
//! Each dimension combines hand-tuned trait-marker weights with keyword
//! bonuses and penalties matched case-insensitively against the node's
//! metadata (title plus label). The per-dimension weights are curated
//! domain knowledge, not computed. Scoring is pure: identical
//! (node, params) pairs always produce the identical score, which the
//! reactive recomputation model relies on.

use std::collections::HashMap;

use crate::graph::ArtistNode;

use super::params::{SynthParams, DONT_CARE_THRESHOLD};

/// Aggregate scores at or below this are left out of the score map.
pub const MATCH_THRESHOLD: f64 = 0.4;

/// Case-insensitive keyword test over the node's metadata text.
fn meta_matches(node: &ArtistNode, keywords: &[&str]) -> bool {
    let text = format!("{} {}", node.title, node.label).to_lowercase();
    keywords.iter().any(|k| text.contains(&k.to_lowercase()))
}

fn trait_value(node: &ArtistNode, marker_id: &str) -> i32 {
    i32::from(node.trait_value(marker_id))
}

/// Heaviness: distortion, aggression.
fn heaviness_value(node: &ArtistNode) -> i32 {
    let mut v = 0;
    v += trait_value(node, "F33"); // tube distortion
    v += trait_value(node, "B34"); // distorted bass
    v += trait_value(node, "P20"); // scream
    v += trait_value(node, "H25"); // power chords
    if meta_matches(node, &["Metal", "Heavy", "Thrash", "Doom"]) {
        v += 4;
    }
    if meta_matches(node, &["Hard Rock", "Grunge"]) {
        v += 2;
    }
    v
}

/// Speed: tempo and note density. Doom/sludge metadata penalizes.
fn speed_value(node: &ArtistNode) -> i32 {
    let mut v = 0;
    v += trait_value(node, "RH8") * 2; // above 180 BPM, strong weight
    v += trait_value(node, "RH7"); // 160-180 BPM
    v += trait_value(node, "D30"); // double kick pedal
    v += trait_value(node, "R40"); // blast beat
    v += trait_value(node, "R1"); // sixteenth-note drive
    if meta_matches(node, &["Thrash", "Speed", "Power Metal", "Punk"]) {
        v += 5;
    }
    if meta_matches(node, &["Doom", "Sludge"]) {
        v -= 3;
    }
    v
}

/// Atmosphere: reverb, space, psychedelia.
fn atmosphere_value(node: &ArtistNode) -> i32 {
    let mut v = 0;
    v += trait_value(node, "F1"); // hall reverb
    v += trait_value(node, "F8"); // shimmer
    v += trait_value(node, "C60"); // ambient texture
    v += trait_value(node, "IS129"); // synthesizers
    if meta_matches(node, &["Psych", "Prog", "Art", "Shoegaze", "Pink Floyd", "Tool"]) {
        v += 4;
    }
    v
}

/// Complexity: odd meters, virtuosity. Punk/garage metadata penalizes.
fn complexity_value(node: &ArtistNode) -> i32 {
    let mut v = 0;
    v += trait_value(node, "RH18"); // polymeter
    v += trait_value(node, "RH15"); // seven-four time
    v += trait_value(node, "MS18"); // tempo and meter shifts
    v += trait_value(node, "A10"); // extended solos
    if meta_matches(node, &["Prog", "Technical", "Math", "Jazz", "Fusion"]) {
        v += 6;
    }
    if meta_matches(node, &["Punk", "Garage"]) {
        v -= 2;
    }
    v
}

/// Groove: swing, syncopation, bass.
fn groove_value(node: &ArtistNode) -> i32 {
    let mut v = 0;
    v += trait_value(node, "G5"); // swing ratio
    v += trait_value(node, "R14"); // humanized swing
    v += trait_value(node, "H11"); // blues scale
    v += trait_value(node, "B3"); // slap bass
    if meta_matches(node, &["Funk", "Soul", "Blues", "Groove", "Southern"]) {
        v += 5;
    }
    if meta_matches(node, &["Pantera", "Rage"]) {
        v += 4;
    }
    v
}

/// Vocals: instrumental vs vocal dominance. "Instrumental" metadata is a
/// hard override to zero, ahead of any trait signal.
fn vocals_value(node: &ArtistNode) -> i32 {
    if meta_matches(node, &["Instrumental"]) {
        return 0;
    }
    let mut v = 0;
    v += trait_value(node, "SS1") * 2; // vocal-forward mix, strong weight
    v += trait_value(node, "P27"); // stacked choir harmonies
    v += trait_value(node, "P33"); // belting
    if meta_matches(node, &["Queen", "Opera", "Choral"]) {
        v += 4;
    }
    v
}

/// Production: lo-fi vs hi-fi. A net-zero raw sum means "no signal" and
/// defaults to the midpoint rather than scoring as maximally raw.
fn production_value(node: &ArtistNode) -> i32 {
    let mut v = 0;
    v += trait_value(node, "HE25") * 2; // hi-fi era, strong weight
    v += trait_value(node, "PF92"); // major-label polish
    v -= trait_value(node, "HE24"); // lo-fi era
    v -= trait_value(node, "W22"); // vinyl crackle
    if meta_matches(node, &["Modern", "Pop", "Industrial"]) {
        v += 4;
    }
    if meta_matches(node, &["Garage", "Black Metal", "Roots"]) {
        v -= 2;
    }
    if v == 0 {
        v = 5;
    }
    v.max(0)
}

/// Mood: dark vs bright. Starts neutral, nudged by trait presence, then
/// overwritten outright by strong genre keywords; dark is checked first,
/// so a node matching both lists reads as bright.
fn mood_value(node: &ArtistNode) -> i32 {
    let mut v = 5;
    if trait_value(node, "E27") > 0 {
        v -= 3; // darkness
    }
    if trait_value(node, "H8") > 0 {
        v -= 2; // natural minor
    }
    if trait_value(node, "E30") > 0 {
        v -= 2; // coldness
    }
    if trait_value(node, "E1") > 0 {
        v += 3; // joy
    }
    if trait_value(node, "H10") > 0 {
        v += 2; // major pentatonic
    }
    if trait_value(node, "E28") > 0 {
        v += 2; // brightness
    }
    if meta_matches(node, &["Doom", "Goth", "Black", "Slayer", "Ghost"]) {
        v = 1;
    }
    if meta_matches(node, &["Pop", "Glam", "Beatles", "Queen"]) {
        v = 9;
    }
    v
}

/// Score a node against the tunable dimensions. Always in [0, 1].
///
/// A slider at or below the don't-care threshold excludes its dimension
/// from numerator and denominator alike, so a zeroed slider never
/// penalizes nodes without signal there. Each active dimension
/// contributes `10 - |target - band_value|` against a maximum of 10,
/// with the raw band value clamped into [0, 10] first. No active
/// dimensions means score 0, not a full match.
pub fn synth_score(node: &ArtistNode, params: &SynthParams) -> f64 {
    let mut score = 0.0;
    let mut max_possible = 0.0;

    let dimensions: [(u8, fn(&ArtistNode) -> i32); 8] = [
        (params.heaviness, heaviness_value),
        (params.speed, speed_value),
        (params.atmosphere, atmosphere_value),
        (params.complexity, complexity_value),
        (params.groove, groove_value),
        (params.vocals, vocals_value),
        (params.production, production_value),
        (params.mood, mood_value),
    ];

    for (param, band_value) in dimensions {
        if param <= DONT_CARE_THRESHOLD {
            continue;
        }
        max_possible += 10.0;
        let band = f64::from(band_value(node).clamp(0, 10));
        let target = f64::from(param) / 10.0;
        score += 10.0 - (target - band).abs();
    }

    if max_possible == 0.0 {
        return 0.0;
    }
    score / max_possible
}

/// Recompute the full score map from scratch. Only nodes whose score
/// exceeds [`MATCH_THRESHOLD`] appear.
pub fn score_map(nodes: &[ArtistNode], params: &SynthParams) -> HashMap<String, f64> {
    let mut results = HashMap::new();
    for node in nodes {
        let score = synth_score(node, params);
        if score > MATCH_THRESHOLD {
            results.insert(node.id.clone(), score);
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dna::profile::TraitProfile;

    fn bare_node(id: &str, title: &str, markers: &[(&str, u8)]) -> ArtistNode {
        let mut profile = TraitProfile::new();
        for (marker, value) in markers {
            profile.insert_if_absent(marker, *value);
        }
        ArtistNode {
            id: id.to_string(),
            label: id.to_string(),
            title: title.to_string(),
            color: "#ffffff".to_string(),
            size: 20,
            group: 1,
            tier: None,
            profile: Some(profile),
            sequenced: false,
        }
    }

    fn seed_nodes() -> Vec<ArtistNode> {
        crate::graph::build_graph().nodes
    }

    #[test]
    fn test_all_sliders_at_dont_care_scores_zero() {
        let params = SynthParams {
            heaviness: 10,
            speed: 10,
            atmosphere: 10,
            complexity: 10,
            groove: 10,
            vocals: 10,
            production: 10,
            mood: 10,
        };
        for node in seed_nodes() {
            assert_eq!(synth_score(&node, &params), 0.0, "node {}", node.id);
        }
    }

    #[test]
    fn test_score_is_always_in_unit_interval() {
        let panels = [
            SynthParams { heaviness: 100, speed: 100, atmosphere: 100, complexity: 100, groove: 100, vocals: 100, production: 100, mood: 100 },
            SynthParams { heaviness: 11, mood: 55, ..Default::default() },
            SynthParams { speed: 100, ..Default::default() },
            SynthParams { production: 37, vocals: 90, ..Default::default() },
        ];
        for params in panels {
            for node in seed_nodes() {
                let score = synth_score(&node, &params);
                assert!(
                    (0.0..=1.0).contains(&score),
                    "{} scored {} for {:?}",
                    node.id,
                    score,
                    params
                );
            }
        }
    }

    #[test]
    fn test_heaviness_scenario() {
        let params = SynthParams {
            heaviness: 100,
            ..Default::default()
        };
        // Strong metal metadata plus maxed heavy markers: band value
        // saturates at 10 against a target of 10.
        let heavy = bare_node(
            "Heavy",
            "UK | 1980s | Heavy Metal | Loud",
            &[("F33", 5), ("B34", 5), ("P20", 4), ("H25", 5)],
        );
        assert!(synth_score(&heavy, &params) > 0.95);

        // No relevant markers, no metal metadata: band value 0, diff 10,
        // contributes nothing.
        let soft = bare_node("Soft", "USA | 1970s | Country Rock | Gentle", &[]);
        assert_eq!(synth_score(&soft, &params), 0.0);

        let map = score_map(&[heavy.clone(), soft.clone()], &params);
        assert!(map.contains_key("Heavy"));
        assert!(!map.contains_key("Soft"));
    }

    #[test]
    fn test_band_value_boundaries() {
        let params = SynthParams {
            heaviness: 100,
            ..Default::default()
        };
        // Band value far above 10 clamps to 10: perfect match.
        let maxed = bare_node(
            "Maxed",
            "Heavy Thrash Metal",
            &[("F33", 5), ("B34", 5), ("P20", 5), ("H25", 5)],
        );
        assert_eq!(synth_score(&maxed, &params), 1.0);
        // Band value 0 against target 10: zero contribution.
        let zero = bare_node("Zero", "Quiet Folk", &[]);
        assert_eq!(synth_score(&zero, &params), 0.0);
    }

    #[test]
    fn test_speed_penalty_clamps_at_zero() {
        // Doom metadata pushes the raw sum negative; the clamp keeps the
        // band value at 0 rather than letting the score go negative.
        let params = SynthParams {
            speed: 100,
            ..Default::default()
        };
        let doom = bare_node("Doomed", "UK | 1970s | Doom | Slow", &[]);
        assert_eq!(synth_score(&doom, &params), 0.0);
    }

    #[test]
    fn test_instrumental_hard_override() {
        let params = SynthParams {
            vocals: 100,
            ..Default::default()
        };
        let node = bare_node(
            "Surf",
            "USA | 1960s | Instrumental Surf | No Singer",
            &[("SS1", 5), ("P27", 5), ("P33", 5)],
        );
        // Marker signal is discarded entirely.
        assert_eq!(synth_score(&node, &params), 0.0);
    }

    #[test]
    fn test_production_defaults_to_midpoint() {
        // No production markers and no keyword hits: raw sum is 0, which
        // means "no signal" and defaults to 5.
        let params = SynthParams {
            production: 50,
            ..Default::default()
        };
        let plain = bare_node("Plain", "UK | 1970s | Rock | Plain", &[]);
        assert_eq!(synth_score(&plain, &params), 1.0);
    }

    #[test]
    fn test_mood_keyword_overrides_traits() {
        let params = SynthParams {
            mood: 100,
            ..Default::default()
        };
        // Bright markers everywhere, but doom metadata pins mood to 1.
        let node = bare_node(
            "Gloom",
            "UK | 1970s | Doom | Heavy",
            &[("E1", 5), ("H10", 5), ("E28", 5)],
        );
        let score = synth_score(&node, &params);
        // target 10, band 1 -> (10 - 9) / 10
        assert!((score - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_mood_bright_wins_over_dark() {
        let params = SynthParams {
            mood: 100,
            ..Default::default()
        };
        // Matches both keyword lists; bright is applied last.
        let node = bare_node("Ghost Pop", "SWE | 2010s | Goth Pop | Duality", &[]);
        let score = synth_score(&node, &params);
        // target 10, band 9 -> (10 - 1) / 10
        assert!((score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_scoring_is_pure() {
        let params = SynthParams {
            heaviness: 70,
            groove: 45,
            mood: 20,
            ..Default::default()
        };
        for node in seed_nodes() {
            assert_eq!(synth_score(&node, &params), synth_score(&node, &params));
        }
    }

    #[test]
    fn test_score_map_threshold() {
        let params = SynthParams {
            heaviness: 100,
            ..Default::default()
        };
        let nodes = seed_nodes();
        let map = score_map(&nodes, &params);
        for (id, score) in &map {
            assert!(score > &MATCH_THRESHOLD, "{} at {}", id, score);
        }
        // Sanity: the seed metal bands clear the bar.
        assert!(map.contains_key("Black Sabbath"));
        assert!(map.contains_key("Metallica"));
    }
}
