use rand::{prelude::*, rngs::StdRng, rngs::SysRng};

/// Seed used by debug builds so games are reproducible
pub const DEBUG_SEED: u64 = 63;

#[cfg(debug_assertions)]
pub fn make_rng() -> StdRng {
    seeded_rng(DEBUG_SEED)
}

#[cfg(not(debug_assertions))]
pub fn make_rng() -> StdRng {
    use rand::TryRng;
    match SysRng::try_next_u64(&mut SysRng) {
        Ok(seed) => seeded_rng(seed),
        Err(err) => {
            tracing::warn!(%err, "system rng unavailable, using the fixed seed");
            seeded_rng(DEBUG_SEED)
        }
    }
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
