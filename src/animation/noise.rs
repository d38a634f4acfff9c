use crate::foundation::math::Rng64;

/// A deterministic, smoothly varying 2D scalar field.
pub trait Noise2D {
    /// Sample the field at `(x, y)`. Implementations return values roughly in `[-1, 1]`.
    fn sample(&self, x: f64, y: f64) -> f64;
}

impl<F> Noise2D for F
where
    F: Fn(f64, f64) -> f64,
{
    fn sample(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

// Skew/unskew factors for the 2D simplex grid: (sqrt(3) - 1) / 2 and (3 - sqrt(3)) / 6.
const F2: f64 = 0.366_025_403_784_438_6;
const G2: f64 = 0.211_324_865_405_187_1;

const GRAD2: [(f64, f64); 12] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

/// Seeded 2D simplex noise.
///
/// The permutation table is shuffled once at construction; sampling never mutates it, so one
/// instance can be shared by every ring of an animation.
#[derive(Clone)]
pub struct SimplexNoise2D {
    perm: [u8; 512],
    seed: u64,
}

impl std::fmt::Debug for SimplexNoise2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimplexNoise2D")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl SimplexNoise2D {
    /// Build a noise field from `seed`.
    pub fn new(seed: u64) -> Self {
        let mut p: [u8; 256] = std::array::from_fn(|i| i as u8);
        let mut rng = Rng64::new(seed);
        for k in (1..p.len()).rev() {
            let j = rng.next_below(k as u64 + 1) as usize;
            p.swap(k, j);
        }

        let perm = std::array::from_fn(|i| p[i & 255]);
        Self { perm, seed }
    }

    /// Seed this field was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn corner(&self, gi: usize, x: f64, y: f64) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            return 0.0;
        }
        let (gx, gy) = GRAD2[gi];
        let t2 = t * t;
        t2 * t2 * (gx * x + gy * y)
    }
}

impl Noise2D for SimplexNoise2D {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };
        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;
        let perm = &self.perm;
        let gi0 = perm[ii + perm[jj] as usize] as usize % 12;
        let gi1 = perm[ii + i1 + perm[jj + j1] as usize] as usize % 12;
        let gi2 = perm[ii + 1 + perm[jj + 1] as usize] as usize % 12;

        70.0 * (self.corner(gi0, x0, y0) + self.corner(gi1, x1, y1) + self.corner(gi2, x2, y2))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/noise.rs"]
mod tests;
