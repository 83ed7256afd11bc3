use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Entropy comes from the OS on native targets and from `crypto.getRandomValues` in the browser
/// (the `js` feature of getrandom).
pub fn crypto_rng() -> ChaCha20Rng {
    ChaCha20Rng::from_entropy()
}
