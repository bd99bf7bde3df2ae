//! # libsam
//!
//! A [suffix automaton](https://en.wikipedia.org/wiki/Suffix_automaton) library for Rust.
//!
//! A suffix automaton is the minimal deterministic automaton accepting exactly the
//! substrings of a text. It is built online in time linear in the text's length, has at
//! most `2n` states for a text of `n` symbols, and answers "does this pattern occur in
//! the text?" in time linear in the pattern's length. The construction follows
//! [Blumer et al. (1985)](https://doi.org/10.1016/0304-3975(85)90157-4).
//!
//! ## Features
//!
//! - **Generic over symbol type**: works with `char`, `u8`, `u16`, or any type implementing
//!   [`SamChar`](sam::SamChar)
//! - **Compact**: states live in a single index-addressed arena sized up front
//! - **Fast**: O(pattern length) lookups, no allocation for states with one or two transitions
//! - **Thread-safe**: a built [`SuffixAutomaton`](sam::SuffixAutomaton) is immutable and `Sync`
//!
//! ## Quick Start
//!
//! ```
//! use libsam::sam::build_automaton;
//!
//! let sam = build_automaton("banana").unwrap();
//! assert!(sam.has("ana"));
//! assert!(sam.has("nan"));
//! assert!(!sam.has("nab"));
//! ```
//!
//! Symbol by symbol, when the text arrives incrementally:
//!
//! ```
//! use libsam::sam::Builder;
//!
//! let mut builder = Builder::new(4).unwrap();
//! builder.extend("abab".chars()).unwrap();
//! let sam = builder.build().unwrap();
//! assert!(sam.has("bab"));
//! assert_eq!(sam.distinct_substrings(), 7);
//! ```
//!
//! ## Generic Usage
//!
//! ```
//! use libsam::sam::build_automaton;
//!
//! let text: Vec<u32> = vec![10, 20, 30, 20, 30];
//! let sam = build_automaton(&text).unwrap();
//! assert!(sam.has([30, 20]));
//! assert!(!sam.has([10, 30]));
//! ```
//!
//! ## Finding positions
//!
//! The automaton only reports presence. [`scan::find_all`] lists every offset at which
//! a pattern occurs.

#![warn(missing_docs)]

/// Suffix automaton: states, builder, and symbol trait.
pub mod sam;
/// Exact-match scanning used to cross-check automaton answers.
pub mod scan;

pub use sam::{build_automaton, BuildError, Builder, SamChar, SuffixAutomaton};
