//! Per-stage RNG derivation from the master surface seed.
//!
//! Each synthesis stage gets its own ChaCha8 stream so that changing, say,
//! the crater count does not reshuffle the grit or the noise lattice.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The random stages of surface synthesis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceStage {
    /// Value table and permutation of the noise lattice.
    Lattice,
    /// Crater placement and sizing.
    Craters,
    /// Per-pixel albedo grit.
    Grit,
}

/// Derive a u64 seed for a stage from the master seed.
///
/// Uses SipHash (via std's `DefaultHasher`) to spread the pair into a
/// well-distributed value.
pub fn derive_stage_seed(master_seed: u64, stage: SurfaceStage) -> u64 {
    let mut hasher = DefaultHasher::new();
    master_seed.hash(&mut hasher);
    stage.hash(&mut hasher);
    hasher.finish()
}

/// Deterministic RNG for one stage of one surface.
pub fn stage_rng(master_seed: u64, stage: SurfaceStage) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_stage_seed(master_seed, stage))
}
