//! Random source construction.
//!
//! Every run owns exactly one [`StdRng`]. Seeding it explicitly makes a run
//! reproducible; [`clock_seed`] gives the time-based seed used when no seed
//! is configured.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Seed derived from the current wall-clock time in nanoseconds.
///
/// Falls back to a random seed if the clock reads before the Unix epoch.
pub fn clock_seed() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_nanos() as u64,
        Err(_) => rand::random(),
    }
}
