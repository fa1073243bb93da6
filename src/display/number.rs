
//! Plain-text rendering of converted quantities.
//!
//! Finite values are rounded to at most three fractional digits,
//! trailing fractional zeros are trimmed, and digits left of the
//! decimal point are grouped in threes with commas. A value which
//! rounds to zero is always rendered as "0", never "-0". Non-finite
//! values keep Rust's own rendering: "inf", "-inf", "NaN".

/// Formats a value for display. Total over f64, since a conversion on
/// finite input can still overflow to infinity.
pub fn format_number(value: f64) -> String {
  if !value.is_finite() {
    return value.to_string();
  }
  let rounded = format!("{:.3}", value.abs());
  // `{:.3}` always produces a decimal point.
  let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
  let fraction = fraction.trim_end_matches('0');
  let mut out = String::new();
  if value < 0.0 && !is_zero(whole, fraction) {
    out.push('-');
  }
  push_grouped(&mut out, whole);
  if !fraction.is_empty() {
    out.push('.');
    out.push_str(fraction);
  }
  out
}

fn is_zero(whole: &str, fraction: &str) -> bool {
  fraction.is_empty() && whole.bytes().all(|b| b == b'0')
}

fn push_grouped(out: &mut String, digits: &str) {
  for (index, ch) in digits.chars().enumerate() {
    if index > 0 && (digits.len() - index) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
}
