//! Shared helpers for rota benchmarks: seeded RNG, input generators.

use rota::{Degree, Euler, Mat3, Quaternion, Vec3};

/// xoshiro256** PRNG so every bench run sees the same inputs.
pub struct Rng {
    s: [u64; 4],
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // SplitMix64 to expand seed into state
        let mut z = seed;
        let mut s = [0u64; 4];
        for slot in &mut s {
            z = z.wrapping_add(0x9e3779b97f4a7c15);
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            *slot = z ^ (z >> 31);
        }
        Self { s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.s[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);
        result
    }

    /// Uniform f32 in [-1, 1]
    pub fn f32(&mut self) -> f32 {
        ((self.next_u64() as f64) / (u64::MAX as f64) * 2.0 - 1.0) as f32
    }

    /// Uniform f32 in [lo, hi]
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (self.f32() + 1.0) * 0.5 * (hi - lo)
    }
}

pub fn make_rng() -> Rng {
    Rng::new(0xDEAD_BEEF_CAFE_BABE)
}

/// Head/pitch/bank in degrees, head and bank in [-180, 180], pitch in [-90, 90].
pub fn random_hpb_degrees(n: usize) -> Vec<[f32; 3]> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| [rng.range(-180.0, 180.0), rng.range(-90.0, 90.0), rng.range(-180.0, 180.0)])
        .collect()
}

pub fn random_euler(n: usize) -> Vec<Euler> {
    random_hpb_degrees(n)
        .into_iter()
        .map(|[h, p, b]| Euler::new(Degree::new(h), Degree::new(p), Degree::new(b)))
        .collect()
}

pub fn random_quat(n: usize) -> Vec<Quaternion> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Quaternion::new(rng.f32(), rng.f32(), rng.f32(), rng.f32()).normalized())
        .collect()
}

pub fn random_vec3(n: usize) -> Vec<Vec3> {
    let mut rng = make_rng();
    (0..n).map(|_| Vec3::new(rng.f32(), rng.f32(), rng.f32())).collect()
}

/// Diagonally dominant, so always invertible.
pub fn random_mat3(n: usize) -> Vec<Mat3> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| {
            let mut m = [0.0f32; 9];
            for v in &mut m {
                *v = rng.f32();
            }
            for i in 0..3 {
                m[i * 3 + i] += 4.0;
            }
            Mat3::from_array(m)
        })
        .collect()
}

pub fn random_f32_triples(n: usize) -> Vec<[f32; 3]> {
    let mut rng = make_rng();
    (0..n).map(|_| [rng.f32(), rng.f32(), rng.f32()]).collect()
}
