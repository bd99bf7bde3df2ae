//! A fixed-capacity, index-addressed store for automaton states.
//!
//! Slot 0 is always the root. Slots are handed out in order, never freed and
//! never reused, so a [`StateId`] stays valid for the arena's whole lifetime.

use super::builder::BuildError;
use super::char_trait::SamChar;
use super::transitions::{State, StateId, Transitions};

/// Index of the root state.
pub const ROOT: StateId = 0;

pub(crate) struct StateArena<C: SamChar> {
    states: Vec<State<C>>,
    capacity: usize,
}

impl<C: SamChar> StateArena<C> {
    /// Creates an arena holding only the root, with room for `capacity` states in total.
    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity >= 1, "the root needs a slot");
        let mut states = Vec::with_capacity(capacity);
        states.push(State::root());
        StateArena { states, capacity }
    }

    /// Appends a state and returns its index.
    ///
    /// Fails instead of growing past the capacity the arena was created with.
    pub fn alloc(
        &mut self,
        len: usize,
        link: Option<StateId>,
        transitions: Transitions<C>,
    ) -> Result<StateId, BuildError> {
        let id = self.states.len();
        if id == self.capacity {
            return Err(BuildError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.states.push(State::new(len, link, transitions));
        Ok(id)
    }

    /// Returns the number of states allocated, root included.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn state(&self, id: StateId) -> &State<C> {
        &self.states[id]
    }

    #[inline]
    pub fn state_mut(&mut self, id: StateId) -> &mut State<C> {
        &mut self.states[id]
    }

    pub fn states(&self) -> &[State<C>] {
        &self.states
    }
}
