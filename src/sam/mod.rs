/// Immutable automaton and read-only state handles.
pub mod automaton;
/// Online construction from a text, one symbol at a time.
pub mod builder;
/// Trait for types that can serve as automaton symbols.
pub mod char_trait;
/// Fixed-capacity, index-addressed state storage.
pub(crate) mod state_arena;
/// Per-state data and the compact transition map.
pub mod transitions;

pub use automaton::{StateRef, SuffixAutomaton};
pub use builder::{build_automaton, BuildError, Builder, IntoSymbols};
pub use char_trait::SamChar;
pub use state_arena::ROOT;
pub use transitions::{State, StateId, Transitions};
