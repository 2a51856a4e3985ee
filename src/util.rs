//! Small utility helpers used across modules.

/// True if any of `needles` occurs as a substring of `haystack`.
/// Callers lower-case both sides; this does no case folding itself.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
  needles.iter().any(|n| haystack.contains(n))
}

/// Number of `needles` present in `haystack` (each needle counts at most once).
pub fn count_present(haystack: &str, needles: &[&str]) -> usize {
  needles.iter().filter(|n| haystack.contains(*n)).count()
}

/// Letter label for an option position: 0 -> 'A', 1 -> 'B', ...
/// Positions past 'Z' continue through the following code points.
pub fn option_letter(index: usize) -> char {
  char::from_u32('A' as u32 + index as u32).unwrap_or('?')
}

/// `value` unless it is blank, then `placeholder`.
pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
  if value.trim().is_empty() { placeholder } else { value }
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request payloads.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut cut = max;
  while !s.is_char_boundary(cut) {
    cut -= 1;
  }
  format!("{}… ({} bytes total)", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn counts_each_needle_once() {
    assert_eq!(count_present("quiz quiz quiz", &["quiz", "test"]), 1);
    assert_eq!(count_present("a test quiz", &["quiz", "test"]), 2);
  }

  #[test]
  fn letters_follow_position() {
    assert_eq!(option_letter(0), 'A');
    assert_eq!(option_letter(3), 'D');
  }

  #[test]
  fn truncation_respects_char_boundaries() {
    let s = "ééééé";
    let out = trunc_for_log(s, 3);
    assert!(out.starts_with('é'));
    assert!(out.ends_with("(10 bytes total)"));
    assert_eq!(trunc_for_log("short", 10), "short");
  }

  #[test]
  fn blank_values_get_placeholder() {
    assert_eq!(or_placeholder("  ", "N/A"), "N/A");
    assert_eq!(or_placeholder("x", "N/A"), "x");
  }
}
