//! Per-replicate seed derivation.
//!
//! Every (cell, replicate) job owns an RNG seeded from the run's base seed,
//! so results do not depend on which worker runs which job.

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Seed for replicate `replicate` of grid cell `cell`.
pub fn replicate_seed(base: u64, cell: usize, replicate: usize) -> u64 {
    let cell_seed = splitmix64(splitmix64(base) ^ cell as u64);
    splitmix64(cell_seed ^ replicate as u64)
}
