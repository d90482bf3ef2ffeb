//! Per-run random streams.
//!
//! Every run draws from its own ChaCha stream keyed by `(seed, stream)`, so
//! a batch is reproducible from its base seed no matter how runs are
//! scheduled across threads.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Independent generator for run `stream` of the batch seeded by `seed`.
pub fn stream_rng(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

/// Use the configured seed, or draw a fresh one from OS entropy.
pub fn resolve_seed(configured: Option<u64>) -> u64 {
    configured.unwrap_or_else(rand::random)
}
