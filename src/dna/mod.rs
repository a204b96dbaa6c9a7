//! The musical-DNA trait system: catalog, profiles, baseline generation,
//! inheritance, and diffing.

pub mod baseline;
pub mod catalog;
pub mod diff;
pub mod inherit;
pub mod profile;

pub use catalog::{marker_display_info, MarkerDisplayInfo};
pub use diff::{compare_nodes, diff_profiles, DiffError, NodeComparison, TraitDiff};
pub use profile::{TraitEntry, TraitProfile};
