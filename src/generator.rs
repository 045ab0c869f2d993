//! Weighted sampling over parsed intervals and the raw byte copier.

use crate::parser::Interval;
use rand::RngCore;
use std::io::{self, Write};

/// Inclusive prefix sums of interval sizes. Non-decreasing; the last
/// element is the total weight.
pub fn prefix_weights(ranges: &[Interval]) -> Vec<u64> {
  let mut weights: Vec<u64> = ranges.iter().map(Interval::len).collect();
  for i in 1..weights.len() {
    weights[i] += weights[i - 1];
  }
  weights
}

/// Draw `count` values, each interval weighted by its size. One `u64`
/// draw per value: reduced by the total it selects the interval through
/// the prefix sums, and reduced by the interval size it picks the member
/// within it. An empty range list is a caller bug, not bad input.
pub fn generate<F>(
  ranges: &[Interval],
  count: usize,
  rng: &mut impl RngCore,
  mut emit: F,
) -> io::Result<()>
where
  F: FnMut(u64) -> io::Result<()>,
{
  assert!(!ranges.is_empty(), "generate needs at least one interval");
  let weights = prefix_weights(ranges);
  let total = *weights.last().unwrap();
  for _ in 0..count {
    let n = rng.next_u64();
    let r = n % (total + 1);
    let i = weights
      .iter()
      .position(|&w| r <= w)
      .expect("prefix sums cover every draw"); // paranoid
    let iv = &ranges[i];
    emit(iv.lo + n % iv.len())?;
  }
  Ok(())
}

/// Minimal UTF-8-style encoding of a scalar. Covers the full grammar
/// range `0..=0x1F_FFFF`, which is wider than `char` can carry, so the
/// 4-byte form is produced by hand.
pub fn encode_scalar(value: u32, buf: &mut [u8; 4]) -> &[u8] {
  debug_assert!(value <= crate::parser::MAX_SCALAR);
  if value < 0x80 {
    buf[0] = value as u8;
    &buf[..1]
  } else if value < 0x800 {
    buf[0] = 0xC0 | (value >> 6) as u8;
    buf[1] = 0x80 | (value & 0x3F) as u8;
    &buf[..2]
  } else if value < 0x1_0000 {
    buf[0] = 0xE0 | (value >> 12) as u8;
    buf[1] = 0x80 | ((value >> 6) & 0x3F) as u8;
    buf[2] = 0x80 | (value & 0x3F) as u8;
    &buf[..3]
  } else {
    buf[0] = 0xF0 | (value >> 18) as u8;
    buf[1] = 0x80 | ((value >> 12) & 0x3F) as u8;
    buf[2] = 0x80 | ((value >> 6) & 0x3F) as u8;
    buf[3] = 0x80 | (value & 0x3F) as u8;
    &buf[..4]
  }
}

/// Copy `length` random bytes straight to the sink in bounded chunks,
/// bypassing all range logic.
pub fn dump_raw(length: usize, rng: &mut impl RngCore, out: &mut impl Write) -> io::Result<()> {
  let mut buf = [0u8; 4096];
  let mut remaining = length;
  while remaining > 0 {
    let n = remaining.min(buf.len());
    rng.fill_bytes(&mut buf[..n]);
    out.write_all(&buf[..n])?;
    remaining -= n;
  }
  Ok(())
}
