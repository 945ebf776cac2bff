//! Byte-string behavior for `Strand<u8>`.
//!
//! A strand of single-byte characters behaves like the generic container
//! for every structural operation, and additionally gains textual I/O:
//! `Display` output that emits every byte in order with no framing, a
//! nul-probing constructor for C-style byte runs, conversions from `&str`,
//! and (with the `std` feature) line-oriented input that stops at a newline
//! or end of input.
//!
//! These are extension impls on the one generic [`Strand`] type rather than
//! a separate specialized container, so the shared operations cannot drift
//! from the generic behavior.
//!
//! ## Examples
//!
//! ```
//! use strand::Strand;
//!
//! let hello = Strand::from("Hello");
//! assert_eq!(hello.len(), 5);
//! assert_eq!(hello.to_string(), "Hello");
//! assert_eq!(hello.substrand(1, 3).unwrap(), "ell");
//! ```

use core::fmt;
use core::fmt::Write;

use crate::strand::Strand;

/// A strand of single-byte characters.
pub type ByteStrand = Strand<u8>;

impl Strand<u8> {
  /// Copies bytes from `source` up to, but not including, the first nul
  /// byte. If no nul occurs, the whole slice is taken; the slice length
  /// bounds the probe.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use strand::Strand;
  /// let s = Strand::from_nul_terminated(b"abc\0def");
  /// assert_eq!(s, "abc");
  /// ```
  pub fn from_nul_terminated(source: &[u8]) -> Self {
    let len = source
      .iter()
      .position(|&b| b == b'\0')
      .unwrap_or(source.len());
    Self::from_slice(&source[..len])
  }

  /// Returns the bytes of the strand as a slice.
  pub fn as_bytes(&self) -> &[u8] {
    self.as_slice()
  }

  /// Returns the strand as a `&str` if its bytes form valid UTF-8.
  pub fn to_str(&self) -> Result<&str, core::str::Utf8Error> {
    core::str::from_utf8(self.as_bytes())
  }

  /// Replaces the contents of the strand with one line read from
  /// `reader`: bytes accumulate until a newline is consumed or input is
  /// exhausted. The newline is consumed but not stored. An immediate
  /// newline leaves the strand empty, which is not an error.
  ///
  /// The strand is cleared before any bytes are read. Returns the number
  /// of bytes consumed from `reader`, including the newline.
  ///
  /// # Errors
  ///
  /// Propagates any I/O error from `reader`.
  #[cfg(feature = "std")]
  pub fn read_line<R: std::io::BufRead>(
    &mut self,
    reader: &mut R,
  ) -> std::io::Result<usize> {
    self.clear();
    let mut buf = Vec::new();
    let consumed = reader.read_until(b'\n', &mut buf)?;
    if buf.last() == Some(&b'\n') {
      buf.pop();
    }
    *self = Self::from(buf);
    Ok(consumed)
  }

  /// Reads one line from `reader` into a new strand. See
  /// [`Strand::read_line`] for the exact semantics.
  ///
  /// # Errors
  ///
  /// Propagates any I/O error from `reader`.
  #[cfg(feature = "std")]
  pub fn from_line<R: std::io::BufRead>(
    reader: &mut R,
  ) -> std::io::Result<Self> {
    let mut strand = Self::new();
    strand.read_line(reader)?;
    Ok(strand)
  }
}

/// Emits every byte in order as a character, with no added delimiters.
/// Bytes are rendered byte-wise, not decoded as UTF-8.
impl fmt::Display for Strand<u8> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for &byte in self.iter() {
      f.write_char(byte as char)?;
    }
    Ok(())
  }
}

impl From<&str> for Strand<u8> {
  fn from(source: &str) -> Self {
    Self::from_slice(source.as_bytes())
  }
}

impl PartialEq<str> for Strand<u8> {
  fn eq(&self, other: &str) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl PartialEq<&str> for Strand<u8> {
  fn eq(&self, other: &&str) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl PartialEq<Strand<u8>> for str {
  fn eq(&self, other: &Strand<u8>) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl PartialEq<Strand<u8>> for &str {
  fn eq(&self, other: &Strand<u8>) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::AsciiUppercase;

  #[test]
  fn hello_scenario() {
    let mut s = Strand::from("Hello");
    assert_eq!(s.len(), 5);
    assert!(!s.is_empty());

    s[1] = b'a';
    assert_eq!(s, "Hallo");

    assert_eq!(s.substrand(1, 3).unwrap(), "all");

    let shouted = &s + &Strand::from("!!");
    assert_eq!(shouted, "Hallo!!");

    assert_eq!(&Strand::from("ab") * 3, "ababab");

    assert_eq!(Strand::from("abC").applied(&AsciiUppercase), "ABC");
    assert_eq!(
      Strand::from("ABC").modified(|b| b.to_ascii_lowercase()),
      "abc"
    );
  }

  #[test]
  fn nul_probe_stops_at_first_nul() {
    assert_eq!(Strand::from_nul_terminated(b"abc\0def"), "abc");
    assert_eq!(Strand::from_nul_terminated(b"abc"), "abc");
    assert!(Strand::from_nul_terminated(b"\0abc").is_empty());
  }

  #[test]
  fn display_emits_bytes_verbatim() {
    let s = Strand::from("a b\tc");
    assert_eq!(s.to_string(), "a b\tc");
    assert_eq!(Strand::<u8>::new().to_string(), "");
  }

  #[test]
  fn str_comparisons_cut_both_ways() {
    let s = Strand::from("hey");
    assert_eq!(s, "hey");
    assert_eq!("hey", s);
    assert_ne!(s, "he");
    assert!(*"hey" == s);
  }

  #[test]
  fn to_str_checks_utf8() {
    let s = Strand::from("héllo");
    assert_eq!(s.to_str().unwrap(), "héllo");
    let bad = Strand::from(&[0xffu8, 0xfe][..]);
    assert!(bad.to_str().is_err());
  }

  #[cfg(feature = "std")]
  mod line_input {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_up_to_and_consumes_newline() {
      let mut input = Cursor::new("first line\nsecond");
      let s = Strand::from_line(&mut input).unwrap();
      assert_eq!(s, "first line");
      // the newline was consumed, the next read starts after it
      let rest = Strand::from_line(&mut input).unwrap();
      assert_eq!(rest, "second");
    }

    #[test]
    fn empty_line_is_an_empty_strand() {
      let mut input = Cursor::new("\nafter");
      let s = Strand::from_line(&mut input).unwrap();
      assert!(s.is_empty());
    }

    #[test]
    fn exhausted_input_yields_empty() {
      let mut input = Cursor::new("");
      let s = Strand::from_line(&mut input).unwrap();
      assert!(s.is_empty());
    }

    #[test]
    fn read_line_clears_previous_contents() {
      let mut s = Strand::from("stale");
      let mut input = Cursor::new("fresh\n");
      let consumed = s.read_line(&mut input).unwrap();
      assert_eq!(s, "fresh");
      assert_eq!(consumed, 6);
    }
  }
}
