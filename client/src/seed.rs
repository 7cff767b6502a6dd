use rand::Rng;

/// Uniform over the whole `u32` range.
pub fn random_seed() -> u32 {
    rand::thread_rng().gen_range(0..=u32::MAX)
}
