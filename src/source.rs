//! Random-source qualities. The sampler only needs `RngCore`; this
//! module decides which generator backs it.

use rand::rngs::adapter::ReseedingRng;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use rand_chacha::{ChaCha20Core, ChaCha20Rng};

/// Bytes generated between reseeds of the `crypt-very-strong` source.
const RESEED_AFTER: u64 = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
  /// Fast, strong PRNG seeded from the OS.
  Strong,
  /// Reads the OS entropy source for every draw. Slow; may block.
  VeryStrong,
  /// ChaCha20 stream-cipher generator seeded from the OS.
  #[default]
  CryptStrong,
  /// ChaCha20 periodically reseeded from the OS entropy source.
  CryptVeryStrong,
}

impl Quality {
  /// Parse a `--random` flag value.
  pub fn from_flag(s: &str) -> Option<Quality> {
    match s {
      "strong" => Some(Quality::Strong),
      "very-strong" => Some(Quality::VeryStrong),
      "crypt-strong" => Some(Quality::CryptStrong),
      "crypt-very-strong" => Some(Quality::CryptVeryStrong),
      _ => None,
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Quality::Strong => "strong",
      Quality::VeryStrong => "very-strong",
      Quality::CryptStrong => "crypt-strong",
      Quality::CryptVeryStrong => "crypt-very-strong",
    }
  }

  /// Build the backing generator. The source is released when the box
  /// is dropped, on every exit path.
  pub fn build(self) -> Box<dyn RngCore> {
    match self {
      Quality::Strong => Box::new(StdRng::from_entropy()),
      Quality::VeryStrong => Box::new(OsRng),
      Quality::CryptStrong => Box::new(ChaCha20Rng::from_entropy()),
      Quality::CryptVeryStrong => Box::new(ReseedingRng::new(
        ChaCha20Core::from_entropy(),
        RESEED_AFTER,
        OsRng,
      )),
    }
  }
}
