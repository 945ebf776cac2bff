//! Per-element transformation protocol.
//!
//! A transformer maps one element to another of the same type. Two calling
//! conventions are supported:
//!
//! 1. **Dynamic dispatch** via the [`Transform`] trait, for call sites that
//!    must not know the transformer's concrete type at compile time (for
//!    example, a collection of boxed heterogeneous transformers). Used by
//!    [`Strand::apply`](crate::Strand::apply) and
//!    [`Strand::applied`](crate::Strand::applied).
//! 2. **Static dispatch** via any `Fn(&T) -> T` closure or function, resolved
//!    at compile time and eligible for inlining. Used by
//!    [`Strand::modify`](crate::Strand::modify) and
//!    [`Strand::modified`](crate::Strand::modified).
//!
//! Transformers only ever see element references, so they cannot resize or
//! reallocate the strand they are being applied to.
//!
//! ## Examples
//!
//! ```
//! use strand::{AsciiUppercase, Identity, Strand, Transform};
//!
//! // Heterogeneous transformers behind one trait object type.
//! let stages: Vec<Box<dyn Transform<u8>>> =
//!   vec![Box::new(Identity), Box::new(AsciiUppercase)];
//!
//! let mut s = Strand::from("abC");
//! for stage in &stages {
//!   s.apply(stage.as_ref());
//! }
//! assert_eq!(s, "ABC");
//! ```

/// A dynamically dispatchable element transformer.
///
/// Implementations map one element to a replacement element. The trait is
/// dyn-safe, so transformers of different concrete types can live behind
/// `&dyn Transform<T>` or `Box<dyn Transform<T>>` at the same call site.
pub trait Transform<T> {
  /// Produces the replacement for `value`.
  fn transform(&self, value: &T) -> T;
}

/// The do-nothing transformer: every element maps to a copy of itself.
///
/// This is the default behavior for element types with no meaningful
/// notion of case folding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<T: Clone> Transform<T> for Identity {
  fn transform(&self, value: &T) -> T {
    value.clone()
  }
}

/// Byte-wise ASCII uppercasing. Bytes outside `a..=z` pass through
/// unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiUppercase;

impl Transform<u8> for AsciiUppercase {
  fn transform(&self, value: &u8) -> u8 {
    value.to_ascii_uppercase()
  }
}

/// Byte-wise ASCII lowercasing. Bytes outside `A..=Z` pass through
/// unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiLowercase;

impl Transform<u8> for AsciiLowercase {
  fn transform(&self, value: &u8) -> u8 {
    value.to_ascii_lowercase()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Strand;

  #[test]
  fn identity_leaves_elements_unchanged() {
    let s = Strand::from(&[1u32, 2, 3][..]);
    assert_eq!(s.applied(&Identity), s);
  }

  #[test]
  fn ascii_case_folding() {
    assert_eq!(AsciiUppercase.transform(&b'a'), b'A');
    assert_eq!(AsciiUppercase.transform(&b'!'), b'!');
    assert_eq!(AsciiLowercase.transform(&b'Z'), b'z');
  }

  #[test]
  fn apply_mutates_in_place() {
    let mut s = Strand::from("abC");
    s.apply(&AsciiUppercase);
    assert_eq!(s, "ABC");
  }

  #[test]
  fn applied_leaves_source_untouched() {
    let s = Strand::from("abC");
    let upper = s.applied(&AsciiUppercase);
    assert_eq!(s, "abC");
    assert_eq!(upper, "ABC");
  }

  #[test]
  fn modify_with_closure() {
    let mut s = Strand::from("ABC");
    s.modify(|b| b.to_ascii_lowercase());
    assert_eq!(s, "abc");
  }

  #[test]
  fn modified_leaves_source_untouched() {
    let s = Strand::from("ABC");
    let lower = s.modified(|b| b.to_ascii_lowercase());
    assert_eq!(s, "ABC");
    assert_eq!(lower, "abc");
  }

  #[test]
  fn heterogeneous_transformers_behind_trait_objects() {
    let stages: Vec<Box<dyn Transform<u8>>> = vec![
      Box::new(AsciiLowercase),
      Box::new(Identity),
      Box::new(AsciiUppercase),
    ];
    let mut s = Strand::from("MiXeD");
    for stage in &stages {
      s.apply(stage.as_ref());
    }
    assert_eq!(s, "MIXED");
  }

  #[test]
  fn function_pointers_satisfy_the_static_path() {
    fn negate(v: &i32) -> i32 {
      -v
    }
    let s = Strand::from(&[1, -2, 3][..]);
    assert_eq!(s.modified(negate).as_slice(), &[-1, 2, -3]);
  }
}
