//! # Strand
//!
//! ### Exactly-sized owned element sequences with string-like semantics
//!
//! This crate provides [`Strand<T>`], a heap-backed, contiguous, owned
//! sequence of elements with plain value semantics: deep copies, native
//! move transfer, structural equality and lexicographic ordering,
//! concatenation, repetition, and checked subsequencing. Unlike `Vec<T>`,
//! a `Strand` carries no spare capacity: its buffer always holds exactly
//! as many elements as its length, and an empty strand holds no buffer at
//! all.
//!
//! ---
//!
//! ## [`Strand<T>`]
//!
//! The core container, generic over any element type.
//!
//! ### Example
//!
//! ```rust
//! use strand::Strand;
//!
//! let a = Strand::from(&[1u32, 2, 3][..]);
//! let b = Strand::filled(2, 9u32);
//! let joined = &a + &b;
//! assert_eq!(joined.as_slice(), &[1, 2, 3, 9, 9]);
//! assert_eq!((&a * 2).as_slice(), &[1, 2, 3, 1, 2, 3]);
//! ```
//!
//! ## Byte strands
//!
//! `Strand<u8>` doubles as a byte string. It gains `Display` output, a
//! nul-probing constructor, conversions from `&str`, and (with the `std`
//! feature) line-oriented input.
//!
//! ```rust
//! use strand::Strand;
//!
//! let mut s = Strand::from("Hello");
//! s[1] = b'a';
//! assert_eq!(s, "Hallo");
//! ```
//!
//! ## Transforms
//!
//! Per-element rewrites come in two flavors: the dyn-safe [`Transform`]
//! trait for call sites that must not know the transformer's concrete type,
//! and plain closures through [`Strand::modify`] for statically dispatched,
//! inlinable use.
//!
//! ```rust
//! use strand::{AsciiUppercase, Strand};
//!
//! let mut s = Strand::from("abC");
//! s.apply(&AsciiUppercase);
//! assert_eq!(s, "ABC");
//! let lower = s.modified(|b| b.to_ascii_lowercase());
//! assert_eq!(lower, "abc");
//! ```
//!
//! ---
//!
//! ## `no_std` Support
//!
//! With the `std` feature disabled the crate is `no_std` (it still requires
//! `alloc`). Line-oriented input is the only `std`-gated functionality.
//!
//! ---
//!
//! ## Features
//!
//! - `std`†: Enables integration with the Rust standard library, in
//!   particular [`Strand::read_line`]. When disabled, the crate operates in
//!   `no_std` mode.
//! - `serde`†: Enables serialization and deserialization support via Serde.
//! - `from`†: Derives buffer conversions via `derive_more`.
//!
//! > † enabled by default

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;
extern crate core;

pub mod byte_strand;
pub mod strand;
pub mod transform;

pub use byte_strand::*;
pub use strand::*;
pub use transform::*;
