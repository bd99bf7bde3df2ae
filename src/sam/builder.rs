use smallvec::SmallVec;

use std::error::Error;

use super::automaton::SuffixAutomaton;
use super::char_trait::SamChar;
use super::state_arena::{StateArena, ROOT};
use super::transitions::{StateId, Transitions};

/// Trait for types that can be used as a text or a pattern.
///
/// Implemented for common string and sequence types so that [`build_automaton`]
/// and [`SuffixAutomaton::has`] accept them directly without manual conversion.
pub trait IntoSymbols<C: SamChar> {
    /// Collects this sequence into a symbol buffer.
    fn collect_symbols(self) -> SmallVec<[C; 32]>;
}

// String types → char

impl IntoSymbols<char> for &str {
    fn collect_symbols(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoSymbols<char> for &&str {
    fn collect_symbols(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoSymbols<char> for String {
    fn collect_symbols(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoSymbols<char> for &String {
    fn collect_symbols(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

// Generic sequence types → C

impl<C: SamChar> IntoSymbols<C> for &[C] {
    fn collect_symbols(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: SamChar> IntoSymbols<C> for Vec<C> {
    fn collect_symbols(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: SamChar> IntoSymbols<C> for &Vec<C> {
    fn collect_symbols(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: SamChar, const N: usize> IntoSymbols<C> for [C; N] {
    fn collect_symbols(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: SamChar, const N: usize> IntoSymbols<C> for &[C; N] {
    fn collect_symbols(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

/// Errors that can occur when building a suffix automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// The text was empty. A suffix automaton is only built for a text of at least one symbol.
    EmptyText,
    /// The state arena is full.
    ///
    /// A text of `n` symbols never needs more than `2n` states, so this only happens when
    /// more symbols are pushed into a [`Builder`] than it was created for.
    CapacityExceeded {
        /// Number of state slots the arena was created with.
        capacity: usize,
    },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::EmptyText => write!(f, "EmptyTextError - text must not be empty"),
            BuildError::CapacityExceeded { capacity } => {
                write!(f, "CapacityError - more than {capacity} states required")
            }
        }
    }
}

impl Error for BuildError {}

/// Online suffix automaton construction.
///
/// The builder is created for a text of known length, which fixes the capacity of its
/// state arena at twice that length. Symbols are then pushed one at a time; after each
/// push the builder holds the minimal automaton recognizing every substring of the
/// symbols pushed so far.
///
/// # Examples
///
/// ```
/// use libsam::sam::builder::Builder;
///
/// let mut builder = Builder::new(3).unwrap();
/// for b in *b"abb" {
///     builder.push(b).unwrap();
/// }
/// let sam = builder.build().unwrap();
/// assert!(sam.has(b"bb"));
/// assert!(!sam.has(b"ba"));
/// ```
pub struct Builder<C: SamChar> {
    arena: StateArena<C>,
    /// State of the whole text pushed so far.
    last: StateId,
    text_len: usize,
    pushed: usize,
}

impl<C: SamChar> Builder<C> {
    /// Creates a builder for a text of `text_len` symbols.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::EmptyText` if `text_len` is zero.
    pub fn new(text_len: usize) -> Result<Self, BuildError> {
        if text_len == 0 {
            return Err(BuildError::EmptyText);
        }
        Ok(Builder {
            arena: StateArena::with_capacity(text_len.saturating_mul(2)),
            last: ROOT,
            text_len,
            pushed: 0,
        })
    }

    /// Appends one symbol to the text.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::CapacityExceeded` if the builder has already received as many
    /// symbols as it was created for. The builder is left unchanged in that case.
    pub fn push(&mut self, symbol: C) -> Result<(), BuildError> {
        if self.pushed == self.text_len {
            return Err(BuildError::CapacityExceeded {
                capacity: self.arena.capacity(),
            });
        }

        let cur_len = self.arena.state(self.last).len() + 1;
        let cur = self.arena.alloc(cur_len, None, Transitions::None)?;

        // Every suffix class of the old text without a `symbol` edge gets one to `cur`.
        let mut p = Some(self.last);
        let link = loop {
            let Some(id) = p else {
                break ROOT;
            };
            if let Some(q) = self.arena.state(id).transitions().get(symbol) {
                break self.suffix_class(id, q, symbol)?;
            }
            self.arena.state_mut(id).transitions_mut().insert(symbol, cur);
            p = self.arena.state(id).link();
        };

        self.arena.state_mut(cur).set_link(link);
        self.last = cur;
        self.pushed += 1;
        Ok(())
    }

    /// Appends every symbol of `symbols` in order.
    pub fn extend(&mut self, symbols: impl IntoIterator<Item = C>) -> Result<(), BuildError> {
        symbols.into_iter().try_for_each(|symbol| self.push(symbol))
    }

    /// Returns the state that the new state's suffix link must point at, given the first
    /// suffix class `p` that already has an edge to `q` on `symbol`.
    ///
    /// Splits `q` when it holds strings longer than `len(p) + 1`.
    fn suffix_class(&mut self, p: StateId, q: StateId, symbol: C) -> Result<StateId, BuildError> {
        let len = self.arena.state(p).len() + 1;
        if self.arena.state(q).len() == len {
            return Ok(q);
        }

        let (link, transitions) = {
            let split = self.arena.state(q);
            (split.link(), split.transitions().clone())
        };
        let clone = self.arena.alloc(len, link, transitions)?;
        self.arena.state_mut(q).set_link(clone);

        // Suffix classes of `p` still reaching `q` on `symbol` now reach the clone.
        // The first one that doesn't ends the walk.
        let mut ancestor = Some(p);
        while let Some(id) = ancestor {
            let transitions = self.arena.state_mut(id).transitions_mut();
            if transitions.get(symbol) != Some(q) {
                break;
            }
            transitions.replace(symbol, clone);
            ancestor = self.arena.state(id).link();
        }

        debug_assert!(self.arena.state(clone).len() < self.arena.state(q).len());
        Ok(clone)
    }

    /// Finalizes construction and returns the immutable automaton.
    ///
    /// Marks the suffix-link chain of the whole text as terminal, so that
    /// [`SuffixAutomaton::is_suffix`] can answer suffix queries.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::EmptyText` if no symbol was pushed.
    pub fn build(mut self) -> Result<SuffixAutomaton<C>, BuildError> {
        if self.pushed == 0 {
            return Err(BuildError::EmptyText);
        }
        let mut state = Some(self.last);
        while let Some(id) = state {
            self.arena.state_mut(id).set_terminal();
            state = self.arena.state(id).link();
        }
        Ok(SuffixAutomaton::from_arena(self.arena, self.pushed))
    }
}

/// Builds a suffix automaton for `text`.
///
/// The text can be any type that implements [`IntoSymbols`], including `&str`,
/// `String`, `&[u8]`, `Vec<u8>`, or fixed-size arrays like `[u8; 3]`.
///
/// # Errors
///
/// Returns `BuildError::EmptyText` if the text is empty.
///
/// # Examples
///
/// ```
/// use libsam::sam::builder::build_automaton;
///
/// let sam = build_automaton("banana").unwrap();
/// assert!(sam.has("nan"));
/// assert!(!sam.has("nab"));
///
/// let bytes = build_automaton(&[3u8, 1, 4, 1, 5]).unwrap();
/// assert!(bytes.has([4, 1]));
/// ```
pub fn build_automaton<C, T>(text: T) -> Result<SuffixAutomaton<C>, BuildError>
where
    C: SamChar,
    T: IntoSymbols<C>,
{
    let text = text.collect_symbols();
    let mut builder = Builder::new(text.len())?;
    builder.extend(text)?;
    builder.build()
}
