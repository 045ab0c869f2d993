//! Range collection and generation commands for the CLI.

use log::{debug, error, info};
use rangen::{dump_raw, encode_scalar, err, generate, parse_ranges, Interval, Mode, Quality};
use std::fs;
use std::io::{self, Write};

/// Parse one inline range script from the command line, appending to
/// `ranges`. On failure the offending text is logged split at the
/// failure offset.
pub fn add_inline(arg: &str, mode: Mode, ranges: &mut Vec<Interval>) -> bool {
  match parse_ranges(arg, mode, ranges) {
    Ok(()) => true,
    Err(e) => {
      let (before, after) = err::split_line(arg, e.offset);
      error!("{}\n{} ERROR --> {}", e, before, after);
      false
    }
  }
}

/// Load a range script from a file. Parse failures report the 1-based
/// line and the split line.
pub fn add_config_file(path: &str, mode: Mode, ranges: &mut Vec<Interval>) -> bool {
  let src = match fs::read_to_string(path) {
    Ok(s) => s,
    Err(e) => {
      error!(
        "Unable to open config file '{}'. Ensure that it exists and is readable.",
        path
      );
      debug!("{}", e);
      return false;
    }
  };
  match parse_ranges(&src, mode, ranges) {
    Ok(()) => true,
    Err(e) => {
      let line = err::line_of(&src, e.offset);
      let (before, after) = err::split_line(&src, e.offset);
      error!(
        "Error in file '{}' at line {}: {}\n{} ERROR --> {}",
        path, line, e, before, after
      );
      false
    }
  }
}

/// Generate `length` weighted values to stdout.
pub fn generate_to_stdout(
  ranges: &[Interval],
  mode: Mode,
  length: usize,
  quality: Quality,
) -> io::Result<()> {
  info!("Using '{}' RNG.", quality.name());
  let mut rng = quality.build();
  let stdout = io::stdout();
  let mut out = stdout.lock();
  match mode {
    Mode::Character => {
      let mut buf = [0u8; 4];
      generate(ranges, length, &mut rng, |v| {
        out.write_all(encode_scalar(v as u32, &mut buf))
      })?;
      out.write_all(b"\n")?;
    }
    Mode::Numeric => {
      generate(ranges, length, &mut rng, |v| writeln!(out, "{}", v))?;
    }
  }
  out.flush()
}

/// Copy `length` raw bytes from the source to stdout.
pub fn raw_to_stdout(length: usize, quality: Quality) -> io::Result<()> {
  info!("Using '{}' RNG.", quality.name());
  let mut rng = quality.build();
  let stdout = io::stdout();
  let mut out = stdout.lock();
  dump_raw(length, &mut rng, &mut out)?;
  out.flush()
}
