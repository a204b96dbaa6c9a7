//! Baseline profile generation.
//!
//! Every node gets a deterministic starter profile before any inheritance
//! or sequencing happens: one empty list per catalog layer, a universal
//! rhythmic backbone, a hand-authored set of markers for the node's
//! category, and finally any per-node signature overrides. All writes go
//! through the idempotent insert, so earlier sources win over later ones.

use super::profile::TraitProfile;

/// The rhythmic backbone every node starts with (rock-standard backbeat).
pub const UNIVERSAL_BACKBONE: (&str, u8) = ("R10", 5);

/// Hand-authored base markers per coarse category (0..=7). These are
/// domain knowledge, not computed: 0 = pre-rock ancestors, 1 = 60s roots,
/// 2 = 70s southern/heartland, 3 = prog and theatrical, 4 = heavy metal,
/// 5 = thrash, 6 = modern/experimental, 7 = cross-genre branches.
fn category_markers(group: u8) -> &'static [(&'static str, u8)] {
    match group {
        0 => &[
            ("H11", 5),
            ("G5", 5),
            ("R14", 5),
            ("IS33", 4),
            ("HE1", 5),
        ],
        1 => &[
            ("R14", 4),
            ("H11", 5),
            ("B2", 3),
            ("P31", 4),
            ("HE4", 5),
        ],
        2 => &[
            ("R28", 3),
            ("H10", 5),
            ("G5", 4),
            ("P31", 5),
            ("HE6", 5),
        ],
        3 => &[
            ("R36", 4),
            ("H5", 5),
            ("H15", 3),
            ("MS18", 5),
            ("HE6", 5),
        ],
        4 => &[
            ("H4", 5),
            ("H25", 5),
            ("B34", 4),
            ("P30", 3),
            ("HE8", 5),
        ],
        5 => &[("D30", 5), ("H13", 4), ("P19", 4), ("HE8", 5)],
        6 => &[("R19", 3), ("H28", 5), ("D1", 4), ("HE10", 5)],
        7 => &[("D16", 5), ("IR1", 5), ("PF77", 5), ("HE10", 5)],
        _ => &[],
    }
}

/// Generate the baseline profile for a node.
///
/// `overrides` is the node's signature trait list (may be empty). The
/// result is fully deterministic: identical inputs produce identical
/// profiles.
pub fn generate_baseline(group: u8, overrides: &[(&str, u8)]) -> TraitProfile {
    let mut profile = TraitProfile::with_all_layers();

    let (id, value) = UNIVERSAL_BACKBONE;
    profile.insert_if_absent(id, value);

    for (id, value) in category_markers(group) {
        profile.insert_if_absent(id, *value);
    }

    for (id, value) in overrides {
        profile.insert_if_absent(id, *value);
    }

    profile
}
