mod common;

use common::ranges_of;
use rangen::{parse_ranges, Interval, Mode};

#[test]
fn single_value_equals_degenerate_pair() {
  assert_eq!(ranges_of("(A)"), ranges_of("(A A)"));
  assert_eq!(ranges_of("(A)"), vec![Interval { lo: 65, hi: 66 }]);
}

#[test]
fn three_ascii_ranges_in_order() {
  let v = ranges_of("(A Z)(a z)(0 9)");
  assert_eq!(
    v,
    vec![
      Interval { lo: 65, hi: 91 },
      Interval { lo: 97, hi: 123 },
      Interval { lo: 48, hi: 58 },
    ]
  );
}

#[test]
fn unicode_escape_equals_the_plain_letter() {
  assert_eq!(ranges_of("(U+0041 U+005A)"), ranges_of("(A Z)"));
  assert_eq!(ranges_of("(U+0041 Z)"), ranges_of("(A Z)"));
  assert_eq!(ranges_of("(U+41 Z)"), ranges_of("(A Z)"));
}

#[test]
fn quoted_multibyte_literals() {
  let v = ranges_of("(\"あ\" \"わ\")");
  assert_eq!(v, vec![Interval { lo: 0x3042, hi: 0x3090 }]);
}

#[test]
fn comments_are_skipped() {
  let v = ranges_of("// leading\n(A Z) /* in the\nmiddle */ (0 9)\n");
  assert_eq!(v.len(), 2);
}

#[test]
fn every_interval_is_nonempty() {
  for iv in ranges_of("(A)(A Z)(\"あ\")(U+0 U+10)") {
    assert!(iv.lo < iv.hi);
  }
}

#[test]
fn duplicates_are_kept_in_order() {
  let v = ranges_of("(A Z)(A Z)(A M)");
  assert_eq!(v.len(), 3);
  assert_eq!(v[0], v[1]);
}

#[test]
fn scripts_accumulate_across_calls() {
  let mut v = Vec::new();
  parse_ranges("(A Z)", Mode::Character, &mut v).unwrap();
  parse_ranges("(0 9)", Mode::Character, &mut v).unwrap();
  assert_eq!(v.len(), 2);
}

#[test]
fn numeric_mode_ranges() {
  let mut v = Vec::new();
  parse_ranges("(5 10)(7)", Mode::Numeric, &mut v).unwrap();
  assert_eq!(
    v,
    vec![Interval { lo: 5, hi: 11 }, Interval { lo: 7, hi: 8 }]
  );
}

#[test]
fn empty_input_adds_nothing() {
  let mut v = Vec::new();
  parse_ranges("", Mode::Character, &mut v).unwrap();
  parse_ranges("  /* only a comment */ ", Mode::Character, &mut v).unwrap();
  assert!(v.is_empty());
}
