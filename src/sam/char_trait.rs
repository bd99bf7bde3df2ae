use std::fmt::Debug;

/// Trait for types that can serve as symbols of a suffix automaton's alphabet.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: transitions store symbols by value
/// - `Eq + Ord`: keeping each state's transitions sorted and unique
/// - `Debug`: debug printing of states
pub trait SamChar: Copy + Eq + Ord + Debug {}

impl<T: Copy + Eq + Ord + Debug> SamChar for T {}
