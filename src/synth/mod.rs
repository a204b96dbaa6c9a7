//! The synth reverse-lookup: match nodes against tunable perceptual
//! dimensions.

pub mod engine;
pub mod params;

pub use engine::{score_map, synth_score, MATCH_THRESHOLD};
pub use params::{SynthParams, DONT_CARE_THRESHOLD};
