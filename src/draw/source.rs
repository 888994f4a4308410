//! Sources of drawn results.
//!
//! ## Sources
//!
//! - `SecureDrawSource`: operating-system entropy (`OsRng`). Use this for
//!   instant draws that pay real money.
//! - `SeededDrawSource`: a ChaCha20 stream from a known seed. Same seed,
//!   same draws, which makes a draw replayable for audits and tests.
//!
//! Both produce every prize independently and uniformly in [0, 9999].
//!
//! ```
//! use bicho_engine::draw::{DrawSource, SeededDrawSource};
//!
//! let mut a = SeededDrawSource::new(7);
//! let mut b = SeededDrawSource::new(7);
//! assert_eq!(a.draw(5), b.draw(5));
//! ```

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ResultSequence, MAX_THOUSAND};

/// Something that can draw a result sequence.
pub trait DrawSource {
    /// Draw `prize_count` independent prizes, each uniform in [0, 9999].
    fn draw(&mut self, prize_count: usize) -> ResultSequence;
}

fn draw_from<R: RngCore + CryptoRng>(rng: &mut R, prize_count: usize) -> ResultSequence {
    let prizes = (0..prize_count)
        .map(|_| rng.gen_range(0..=MAX_THOUSAND))
        .collect();
    ResultSequence::from_checked(prizes)
}

/// Draw source backed by operating-system entropy.
///
/// Holds no state of its own; each call reads fresh entropy, so copies can
/// be used from any number of threads at once. Failure of the entropy
/// source is unrecoverable and panics inside `OsRng`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecureDrawSource;

impl SecureDrawSource {
    /// Create a new secure source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DrawSource for SecureDrawSource {
    fn draw(&mut self, prize_count: usize) -> ResultSequence {
        let results = draw_from(&mut OsRng, prize_count);
        debug!(prize_count, results = %results, "instant draw");
        results
    }
}

/// Draw `prize_count` prizes from the operating-system entropy source.
#[must_use]
pub fn generate_instant_result(prize_count: usize) -> ResultSequence {
    SecureDrawSource.draw(prize_count)
}

/// Replayable draw source seeded with a known value.
#[derive(Clone, Debug)]
pub struct SeededDrawSource {
    inner: ChaCha20Rng,
    seed: u64,
}

impl SeededDrawSource {
    /// Create a source from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha20Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a source from a seed taken from operating-system entropy.
    ///
    /// The seed is recorded in `state()`, so the draw can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(OsRng.next_u64())
    }

    /// The seed this source started from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Capture the stream position for later replay.
    #[must_use]
    pub fn state(&self) -> DrawSeedState {
        DrawSeedState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream from a captured state.
    #[must_use]
    pub fn from_state(state: &DrawSeedState) -> Self {
        let mut inner = ChaCha20Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DrawSource for SeededDrawSource {
    fn draw(&mut self, prize_count: usize) -> ResultSequence {
        let results = draw_from(&mut self.inner, prize_count);
        debug!(prize_count, seed = self.seed, results = %results, "seeded draw");
        results
    }
}

/// Serializable position of a `SeededDrawSource` stream.
///
/// Uses the ChaCha word position, so capture and restore are O(1) however
/// many prizes have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSeedState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha word position (128-bit counter).
    pub word_pos: u128,
}
