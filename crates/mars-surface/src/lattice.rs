//! Seeded 2D value-noise lattice.
//!
//! 256 random scalars are addressed through a shuffled permutation of
//! `0..256`, duplicated to 512 entries so the nested lookup
//! `perm[perm[x] + y]` never needs a wraparound check. Queries between
//! lattice corners are bilinear with smoothstep easing, which makes the
//! field continuous everywhere and equal to the corner value at integers.

use noise::NoiseFn;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::seed::{SurfaceStage, stage_rng};

/// Number of distinct lattice values and permutation entries.
pub const LATTICE_SIZE: usize = 256;

/// Immutable value-noise lattice.
#[derive(Clone, Debug)]
pub struct NoiseLattice {
    perm: [u8; LATTICE_SIZE * 2],
    values: [f64; LATTICE_SIZE],
}

impl NoiseLattice {
    /// Build the lattice from the master surface seed.
    pub fn new(seed: u64) -> Self {
        let mut rng = stage_rng(seed, SurfaceStage::Lattice);

        let mut values = [0.0; LATTICE_SIZE];
        for v in &mut values {
            *v = rng.random_range(-1.0..=1.0);
        }

        let mut base: Vec<u8> = (0..=u8::MAX).collect();
        base.shuffle(&mut rng);

        let mut perm = [0u8; LATTICE_SIZE * 2];
        perm[..LATTICE_SIZE].copy_from_slice(&base);
        perm[LATTICE_SIZE..].copy_from_slice(&base);

        Self { perm, values }
    }

    /// The lattice value at integer corner `(ix, iy)`. Indices wrap every
    /// [`LATTICE_SIZE`] cells.
    pub fn value_at(&self, ix: i64, iy: i64) -> f64 {
        let x = ix.rem_euclid(LATTICE_SIZE as i64) as usize;
        let y = iy.rem_euclid(LATTICE_SIZE as i64) as usize;
        let hashed = self.perm[self.perm[x] as usize + y];
        self.values[hashed as usize]
    }

    /// Sample the field at a fractional coordinate. Result is in `[-1, 1]`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        self.sample_wrapped(x, y, None)
    }

    /// Sample with the X lattice index wrapped every `period` cells, so that
    /// `sample_periodic(x, y, p) == sample_periodic(x + p, y, p)`.
    ///
    /// A period of zero falls back to the natural lattice period.
    pub fn sample_periodic(&self, x: f64, y: f64, period: u32) -> f64 {
        self.sample_wrapped(x, y, (period > 0).then_some(i64::from(period)))
    }

    fn sample_wrapped(&self, x: f64, y: f64, period: Option<i64>) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let sx = smoothstep(x - x0);
        let sy = smoothstep(y - y0);

        let mut ix0 = x0 as i64;
        let mut ix1 = ix0 + 1;
        if let Some(p) = period {
            ix0 = ix0.rem_euclid(p);
            ix1 = ix1.rem_euclid(p);
        }
        let iy0 = y0 as i64;
        let iy1 = iy0 + 1;

        let top = lerp(self.value_at(ix0, iy0), self.value_at(ix1, iy0), sx);
        let bottom = lerp(self.value_at(ix0, iy1), self.value_at(ix1, iy1), sx);
        lerp(top, bottom, sy)
    }
}

impl NoiseFn<f64, 2> for NoiseLattice {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.sample(point[0], point[1])
    }
}

/// A view of a lattice that repeats horizontally every `period` cells.
///
/// One view is created per fBm octave so that each octave tiles across the
/// texture's left/right seam.
#[derive(Clone, Copy, Debug)]
pub struct PeriodicLattice<'a> {
    lattice: &'a NoiseLattice,
    period: u32,
}

impl<'a> PeriodicLattice<'a> {
    /// Wrap `lattice` with a horizontal period in cells.
    pub fn new(lattice: &'a NoiseLattice, period: u32) -> Self {
        Self { lattice, period }
    }
}

impl NoiseFn<f64, 2> for PeriodicLattice<'_> {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.lattice.sample_periodic(point[0], point[1], self.period)
    }
}

#[inline]
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
