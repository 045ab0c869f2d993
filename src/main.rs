use log::{error, info, warn, LevelFilter};
use rangen::{Interval, Mode, Quality};
use std::env;
use std::io::Write;
use std::process::ExitCode;

mod run;

const DESCRIPTION: &str = "Weighted random character and integer generator";

fn main() -> ExitCode {
  init_log();

  let args: Vec<String> = match collect_args() {
    Some(a) => a,
    None => {
      error!("Command line must be UTF-8 encoded.");
      return ExitCode::FAILURE;
    }
  };

  let mut ranges: Vec<Interval> = Vec::new();
  let mut length = 32usize;
  let mut quality = Quality::default();
  let mut mode = Mode::Character;
  let mut raw = false;

  let mut i = 1;
  while i < args.len() {
    let arg = &args[i];
    if let Some(flag) = flag_name(arg) {
      match flag {
        "help" | "h" => {
          print_help(&args[0]);
          return ExitCode::SUCCESS;
        }
        "version" => {
          println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
          return ExitCode::SUCCESS;
        }
        "verbose" | "v" => {
          if i != 1 {
            warn!("'-{}' should be the first argument!", flag);
          }
          log::set_max_level(LevelFilter::Debug);
        }
        "length" | "l" => match take_value(&args, &mut i, flag) {
          Some(v) => match v.parse::<usize>() {
            Ok(n) => length = n,
            Err(_) => {
              error!("Invalid number. '-{} {}'.", flag, v);
              return ExitCode::FAILURE;
            }
          },
          None => return ExitCode::FAILURE,
        },
        "raw" | "w" => raw = true,
        "random" | "r" => match take_value(&args, &mut i, flag) {
          Some(v) => match Quality::from_flag(&v) {
            Some(q) => quality = q,
            None => {
              error!("Invalid random mode. '-{} {}'.", flag, v);
              return ExitCode::FAILURE;
            }
          },
          None => return ExitCode::FAILURE,
        },
        "numeric" | "n" => mode = Mode::Numeric,
        "config" | "c" => match take_value(&args, &mut i, flag) {
          Some(path) => {
            if !run::add_config_file(&path, mode, &mut ranges) {
              return ExitCode::FAILURE;
            }
          }
          None => return ExitCode::FAILURE,
        },
        "AZ" | "A" => ranges.push(Interval { lo: 'A' as u64, hi: 'Z' as u64 + 1 }),
        "az" | "a" => ranges.push(Interval { lo: 'a' as u64, hi: 'z' as u64 + 1 }),
        "09" | "0" => ranges.push(Interval { lo: '0' as u64, hi: '9' as u64 + 1 }),
        "special" | "x" => {
          ranges.push(Interval { lo: 33, hi: 48 });
          ranges.push(Interval { lo: 58, hi: 65 });
          ranges.push(Interval { lo: 91, hi: 97 });
          ranges.push(Interval { lo: 123, hi: 127 });
        }
        "show-ascii" => {
          print_ascii_table();
          return ExitCode::SUCCESS;
        }
        _ => {
          error!("Unknown parameter: '-{}'.", flag);
          return ExitCode::FAILURE;
        }
      }
    } else if arg.is_empty() {
      info!("Ignoring argument {} which is empty.", i);
    } else if !run::add_inline(arg, mode, &mut ranges) {
      return ExitCode::FAILURE;
    }
    i += 1;
  }

  let result = if raw {
    run::raw_to_stdout(length, quality)
  } else {
    if ranges.is_empty() {
      error!("No input set specified, try -AZ -az -09.");
      return ExitCode::FAILURE;
    }
    run::generate_to_stdout(&ranges, mode, length, quality)
  };
  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      error!("{}", e);
      ExitCode::FAILURE
    }
  }
}

fn init_log() {
  env_logger::Builder::new()
    .filter_level(LevelFilter::Trace)
    .format(|buf, record| writeln!(buf, "[ {} ] {}", record.level(), record.args()))
    .init();
  log::set_max_level(LevelFilter::Warn);
}

fn collect_args() -> Option<Vec<String>> {
  env::args_os().map(|a| a.into_string().ok()).collect()
}

/// Strip `-`/`--` so both spellings of every option work.
fn flag_name(arg: &str) -> Option<&str> {
  arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))
}

fn take_value(args: &[String], i: &mut usize, flag: &str) -> Option<String> {
  *i += 1;
  match args.get(*i) {
    Some(v) => Some(v.clone()),
    None => {
      error!("Missing value. '-{} ???'.", flag);
      None
    }
  }
}

fn print_help(argv0: &str) {
  println!("{}", DESCRIPTION);
  println!();
  println!("Usage: {} [OPTION | RANGES]...", argv0);
  println!();
  println!("RANGES is a small script that adds ranges to the input set.");
  println!("The following example should be self-explanatory.");
  println!();
  println!("  (A Z) // Add the letters A, B, C, ..., Y, Z.");
  println!("  (a z)(0 9) // Add lower case letters and digits.");
  println!("  (U+0041 U+005A) // Same as (A Z).");
  println!("  (U+0041 Z) // Same as (A Z).");
  println!("  (U+41 Z) // Leading zeros can be omitted.");
  println!("  (A) // Add only a single letter.");
  println!();
  println!("  // Characters other than (A Z)(a z)(0 9) must be put inside double quotes:");
  println!("  (\"あ\" \"わ\")");
  println!();
  println!("  // Comment");
  println!("  /* Multiline");
  println!("   * Comment");
  println!("   */");
  println!();
  println!("Each OPTION can be written with a single dash '-' or a double dash '--',");
  println!("so '-help' is equivalent to '--help'.");
  println!();
  println!("-h --help      Show this message.");
  println!("--version      Show the version.");
  println!("-v --verbose   Verbose output.");
  println!("-l --length    The number of values to generate. [32]");
  println!("-w --raw       Output a random byte stream of --length bytes");
  println!("               of raw data coming directly from the random number generator.");
  println!("-r --random    Quality of the random number generator. [crypt-strong]");
  println!("                   strong ... Generate strong random numbers quickly.");
  println!("                   very-strong ... Slow(!) but very strong.");
  println!("                       Drains the system's entropy pool!");
  println!("                   crypt-strong ... ChaCha20 seeded from the OS.");
  println!("                   crypt-very-strong ... ChaCha20, periodically reseeded.");
  println!("-n --numeric   Parse ranges as unsigned integers and print one number");
  println!("               per line. Must precede the ranges it applies to.");
  println!("-c --config    Load a range script from a file.");
  println!("-A --AZ        Add (A Z): ABCDEFGHIJKLMNOPQRSTUVWXYZ");
  println!("-a --az        Add (a z): abcdefghijklmnopqrstuvwxyz");
  println!("-0 --09        Add (0 9): 0123456789");
  println!("-x --special   Add: !\"#$%&'()*+,-./:;<=>?@[\\]^_`{{|}}~");
  println!("--show-ascii   Print a simple ASCII table and exit.");
  println!();
  println!("NOTE: Range scripts must be UTF-8 encoded.");
  println!("NOTE: The program doesn't check if a value has already been added.");
  println!("      Adding values multiple times (through overlapping ranges) increases");
  println!("      the relative likelihood that they get picked.");
}

fn print_ascii_table() {
  for (beg, end) in [
    (33u32, 47u32),
    (48, 57),
    (58, 64),
    (65, 90),
    (91, 96),
    (97, 122),
    (123, 126),
  ] {
    let chars: String = (beg..=end).filter_map(char::from_u32).collect();
    println!("(U+{:X} U+{:X}): {}", beg, end, chars);
  }
}
