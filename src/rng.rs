use getrandom::getrandom;
use oorandom::Rand64;
use tracing::warn;

pub fn rng64(seed: u128) -> Rand64 {
    Rand64::new(seed)
}

/// Draws a seed from the operating system, falling back to 0 if none is available.
pub fn os_random_seed() -> u128 {
    let mut buf = [0; 16];
    if let Err(err) = getrandom(&mut buf) {
        warn!("could not obtain an os random seed, using 0: {}", err);
        buf = [0; 16];
    }
    u128::from_le_bytes(buf)
}

pub fn os_random_seed64() -> u64 {
    (os_random_seed() >> 64) as u64
}
