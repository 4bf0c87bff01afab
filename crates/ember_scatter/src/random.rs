//! Per-path random streams.
//!
//! Every path owns one generator for a whole iteration and threads it through
//! each bounce. Streams are derived from `(iteration, path index)` so renders
//! are reproducible and no two paths share a sequence.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Generator type handed to each path.
pub type PathRng = StdRng;

/// Integer avalanche hash (Wang/Jenkins style) used to decorrelate seeds.
pub fn hash_seed(mut a: u32) -> u32 {
    a = a.wrapping_add(0x7ed5_5d16).wrapping_add(a << 12);
    a = (a ^ 0xc761_c23c) ^ (a >> 19);
    a = a.wrapping_add(0x1656_67b1).wrapping_add(a << 5);
    a = a.wrapping_add(0xd3a2_646c) ^ (a << 9);
    a = a.wrapping_add(0xfd70_46c5).wrapping_add(a << 3);
    a = (a ^ 0xb55a_4f09) ^ (a >> 16);
    a
}

/// Create the random stream for one path of one iteration.
pub fn path_rng(iteration: u32, path_index: usize) -> PathRng {
    let hi = hash_seed(iteration.wrapping_mul(0x9e37_79b9) ^ hash_seed(path_index as u32)) as u64;
    let lo = hash_seed((path_index as u64 >> 32) as u32 ^ hash_seed(iteration)) as u64;
    StdRng::seed_from_u64(hi << 32 | lo)
}

/// Uniform float in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}
