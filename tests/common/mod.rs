use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rangen::{encode_scalar, generate, parse_ranges, Interval, Mode};

/// RNG that replays a fixed list of draws, cycling when exhausted.
pub struct ScriptedRng {
  draws: Vec<u64>,
  next: usize,
}

impl ScriptedRng {
  pub fn new(draws: &[u64]) -> Self {
    ScriptedRng {
      draws: draws.to_vec(),
      next: 0,
    }
  }
}

impl RngCore for ScriptedRng {
  fn next_u32(&mut self) -> u32 {
    self.next_u64() as u32
  }
  fn next_u64(&mut self) -> u64 {
    let v = self.draws[self.next % self.draws.len()];
    self.next += 1;
    v
  }
  fn fill_bytes(&mut self, dest: &mut [u8]) {
    for chunk in dest.chunks_mut(8) {
      let bytes = self.next_u64().to_le_bytes();
      chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
  }
  fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
    self.fill_bytes(dest);
    Ok(())
  }
}

pub fn seeded(seed: u64) -> StdRng {
  StdRng::seed_from_u64(seed)
}

/// Parse a character-mode script; panics on error.
pub fn ranges_of(script: &str) -> Vec<Interval> {
  let mut out = Vec::new();
  parse_ranges(script, Mode::Character, &mut out).unwrap();
  out
}

/// Generate `count` characters with the given RNG, decoded to a String.
pub fn gen_string(ranges: &[Interval], count: usize, rng: &mut impl RngCore) -> String {
  let mut bytes = Vec::new();
  let mut buf = [0u8; 4];
  generate(ranges, count, rng, |v| {
    bytes.extend_from_slice(encode_scalar(v as u32, &mut buf));
    Ok(())
  })
  .unwrap();
  String::from_utf8(bytes).unwrap()
}

/// Generate `count` raw values with the given RNG.
pub fn gen_values(ranges: &[Interval], count: usize, rng: &mut impl RngCore) -> Vec<u64> {
  let mut out = Vec::new();
  generate(ranges, count, rng, |v| {
    out.push(v);
    Ok(())
  })
  .unwrap();
  out
}
