//! User-tunable synth dimensions.

use serde::{Deserialize, Serialize};

/// Slider values at or below this count as "don't care": the dimension
/// is excluded from both sides of the score.
pub const DONT_CARE_THRESHOLD: u8 = 10;

/// The eight perceptual dimensions, each 0..=100. Owned by the UI layer
/// and passed by value into the scoring engine on every recomputation;
/// nothing here persists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthParams {
    /// Distortion and aggression.
    pub heaviness: u8,
    /// Tempo and note density.
    pub speed: u8,
    /// Reverb, space, psychedelia.
    pub atmosphere: u8,
    /// Odd meters and virtuosity.
    pub complexity: u8,
    /// Swing, syncopation, bass.
    pub groove: u8,
    /// Instrumental vs vocal-centric.
    pub vocals: u8,
    /// Raw/lo-fi vs polished/hi-fi.
    pub production: u8,
    /// Dark/minor vs bright/major.
    pub mood: u8,
}

impl SynthParams {
    /// Whether any slider has been moved off zero at all. The UI treats
    /// an all-zero panel as "synth off" and skips scoring entirely.
    pub fn is_active(&self) -> bool {
        let Self {
            heaviness,
            speed,
            atmosphere,
            complexity,
            groove,
            vocals,
            production,
            mood,
        } = *self;
        [
            heaviness, speed, atmosphere, complexity, groove, vocals, production, mood,
        ]
        .iter()
        .any(|&v| v > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inactive() {
        assert!(!SynthParams::default().is_active());
    }

    #[test]
    fn test_any_slider_activates() {
        let params = SynthParams {
            mood: 1,
            ..Default::default()
        };
        assert!(params.is_active());
    }
}
