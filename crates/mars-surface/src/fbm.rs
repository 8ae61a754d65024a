//! Fractal sum of lattice noise over texture space.

use noise::NoiseFn;

use crate::lattice::{NoiseLattice, PeriodicLattice};

/// Octave layout for the base terrain field.
#[derive(Clone, Debug, PartialEq)]
pub struct FbmParams {
    /// Number of octaves to sum. 2-4 gives the intended soft relief.
    pub octaves: u32,
    /// Lattice cells across the texture width for the first octave.
    pub base_cells: u32,
    /// Integer cell multiplier between octaves; integral so every octave
    /// still tiles horizontally.
    pub lacunarity: u32,
    /// Amplitude multiplier between octaves.
    pub persistence: f64,
}

impl Default for FbmParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            base_cells: 8,
            lacunarity: 2,
            persistence: 0.5,
        }
    }
}

/// Fractal Brownian motion over a [`NoiseLattice`], addressed in normalized
/// texture coordinates.
#[derive(Clone, Debug)]
pub struct Fbm {
    lattice: NoiseLattice,
    params: FbmParams,
}

impl Fbm {
    /// Build the sampler. Zero octaves or cells are raised to one.
    pub fn new(lattice: NoiseLattice, mut params: FbmParams) -> Self {
        params.octaves = params.octaves.max(1);
        params.base_cells = params.base_cells.max(1);
        params.lacunarity = params.lacunarity.max(1);
        Self { lattice, params }
    }

    /// Sample at texture coordinate `(u, v)` in `[0, 1)`, where `aspect` is
    /// `height / width` so lattice cells stay square.
    ///
    /// The result is normalized by the total amplitude and lies in `[-1, 1]`.
    /// It repeats exactly when `u` advances by one.
    pub fn sample(&self, u: f64, v: f64, aspect: f64) -> f64 {
        let mut total = 0.0;
        let mut norm = 0.0;
        let mut cells = self.params.base_cells;
        let mut amplitude = 1.0;

        for _ in 0..self.params.octaves {
            let layer = PeriodicLattice::new(&self.lattice, cells);
            let c = f64::from(cells);
            total += layer.get([u * c, v * c * aspect]) * amplitude;
            norm += amplitude;

            cells = cells.saturating_mul(self.params.lacunarity);
            amplitude *= self.params.persistence;
        }

        if norm > 0.0 { total / norm } else { 0.0 }
    }

    /// [`sample`](Self::sample) remapped from `[-1, 1]` to `[0, 1]`.
    pub fn sample_unit(&self, u: f64, v: f64, aspect: f64) -> f64 {
        (self.sample(u, v, aspect) * 0.5 + 0.5).clamp(0.0, 1.0)
    }

    /// The underlying lattice.
    pub fn lattice(&self) -> &NoiseLattice {
        &self.lattice
    }

    /// Octave parameters after normalization.
    pub fn params(&self) -> &FbmParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampler(seed: u64, octaves: u32) -> Fbm {
        Fbm::new(
            NoiseLattice::new(seed),
            FbmParams {
                octaves,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_deterministic() {
        let a = sampler(42, 4);
        let b = sampler(42, 4);
        assert_eq!(a.sample(0.3, 0.6, 0.5), b.sample(0.3, 0.6, 0.5));
    }

    #[test]
    fn test_within_range() {
        let fbm = sampler(8, 4);
        for i in 0..2000 {
            let u = (i as f64 * 0.0137).fract();
            let v = (i as f64 * 0.0071).fract();
            let s = fbm.sample(u, v, 0.5);
            assert!((-1.0..=1.0).contains(&s), "{s} out of range");
            let unit = fbm.sample_unit(u, v, 0.5);
            assert!((0.0..=1.0).contains(&unit));
        }
    }

    #[test]
    fn test_tiles_horizontally() {
        let fbm = sampler(17, 4);
        for i in 0..50 {
            let v = i as f64 / 50.0;
            let left = fbm.sample(0.0, v, 0.5);
            let right = fbm.sample(1.0, v, 0.5);
            assert!((left - right).abs() < 1e-12, "seam at v={v}");
        }
    }

    #[test]
    fn test_more_octaves_add_detail() {
        let coarse = sampler(7, 1);
        let fine = sampler(7, 4);
        let step = 1.0 / 512.0;
        // Second differences weight high frequencies, where the extra octaves live.
        let curvature = |fbm: &Fbm, u: f64| {
            (fbm.sample(u + step, 0.4, 0.5) - 2.0 * fbm.sample(u, 0.4, 0.5)
                + fbm.sample(u - step, 0.4, 0.5))
                .abs()
        };
        let (mut curv_coarse, mut curv_fine) = (0.0, 0.0);
        for i in 1..512 {
            let u = i as f64 * step;
            curv_coarse += curvature(&coarse, u);
            curv_fine += curvature(&fine, u);
        }
        assert!(
            curv_fine > curv_coarse * 1.5,
            "fine={curv_fine} coarse={curv_coarse}"
        );
    }

    #[test]
    fn test_zero_octaves_clamped() {
        let fbm = Fbm::new(
            NoiseLattice::new(1),
            FbmParams {
                octaves: 0,
                base_cells: 0,
                ..Default::default()
            },
        );
        assert_eq!(fbm.params().octaves, 1);
        assert_eq!(fbm.params().base_cells, 1);
    }
}
