use std::mem;

use super::char_trait::SamChar;

/// Index of a state inside a suffix automaton's arena. The root is always `0`.
pub type StateId = usize;

/// Above this many edges, lookups switch from a linear scan to binary search.
const BINARY_SEARCH_THRESHOLD: usize = 16;

/// A compact, sorted transition map that doesn't allocate until there are at
/// least three outgoing edges.
///
/// Most states of a suffix automaton have one or two transitions, so those
/// cases are stored inline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transitions<C: SamChar> {
    /// No transitions.
    None,
    /// Exactly one transition (symbol, target).
    One((C, StateId)),
    /// Exactly two transitions (symbol1, target1, symbol2, target2), `symbol1 < symbol2`.
    Two((C, StateId, C, StateId)),
    /// Three or more transitions, sorted by symbol.
    Many(Vec<(C, StateId)>),
}

impl<C: SamChar> Default for Transitions<C> {
    fn default() -> Self {
        Transitions::None
    }
}

impl<C: SamChar> Transitions<C> {
    /// Returns the target of the transition labeled `symbol`, if any.
    #[inline]
    pub fn get(&self, symbol: C) -> Option<StateId> {
        match self {
            Transitions::None => None,
            Transitions::One((c, target)) => (*c == symbol).then_some(*target),
            Transitions::Two((c1, t1, c2, t2)) => {
                if symbol == *c1 {
                    Some(*t1)
                } else if symbol == *c2 {
                    Some(*t2)
                } else {
                    None
                }
            }
            Transitions::Many(edges) => position(edges, symbol).map(|i| edges[i].1),
        }
    }

    /// Returns the transition at the specified position in symbol order.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<(C, StateId)> {
        match self {
            Transitions::None => None,
            Transitions::One(edge) => (index == 0).then_some(*edge),
            Transitions::Two((c1, t1, c2, t2)) => match index {
                0 => Some((*c1, *t1)),
                1 => Some((*c2, *t2)),
                _ => None,
            },
            Transitions::Many(edges) => edges.get(index).copied(),
        }
    }

    /// Returns the number of transitions.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Transitions::None => 0,
            Transitions::One(_) => 1,
            Transitions::Two(_) => 2,
            Transitions::Many(edges) => edges.len(),
        }
    }

    /// True if there are no transitions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Transitions::None)
    }

    /// Returns an iterator over `(symbol, target)` pairs in ascending symbol order.
    #[inline]
    pub fn iter(&self) -> TransitionIter<'_, C> {
        TransitionIter {
            transitions: self,
            index: 0,
        }
    }

    /// Adds a transition, keeping the edges sorted.
    ///
    /// `symbol` must not already have a transition.
    pub(crate) fn insert(&mut self, symbol: C, target: StateId) {
        debug_assert!(self.get(symbol).is_none(), "insert: symbol already present");
        *self = match mem::take(self) {
            Transitions::None => Transitions::One((symbol, target)),
            Transitions::One((c1, t1)) => {
                if symbol < c1 {
                    Transitions::Two((symbol, target, c1, t1))
                } else {
                    Transitions::Two((c1, t1, symbol, target))
                }
            }
            Transitions::Two((c1, t1, c2, t2)) => {
                let mut edges = vec![(c1, t1), (c2, t2), (symbol, target)];
                edges.sort_by_key(|&(c, _)| c);
                Transitions::Many(edges)
            }
            Transitions::Many(mut edges) => {
                let pos = edges.partition_point(|&(c, _)| c < symbol);
                edges.insert(pos, (symbol, target));
                Transitions::Many(edges)
            }
        };
    }

    /// Points the transition labeled `symbol` at `target`, returning the old target.
    ///
    /// Returns `None` and leaves the map untouched if there is no such transition.
    pub(crate) fn replace(&mut self, symbol: C, target: StateId) -> Option<StateId> {
        let slot = match self {
            Transitions::None => None,
            Transitions::One((c, t)) => (*c == symbol).then_some(t),
            Transitions::Two((c1, t1, c2, t2)) => {
                if *c1 == symbol {
                    Some(t1)
                } else if *c2 == symbol {
                    Some(t2)
                } else {
                    None
                }
            }
            Transitions::Many(edges) => match position(edges, symbol) {
                Some(i) => Some(&mut edges[i].1),
                None => None,
            },
        }?;
        Some(mem::replace(slot, target))
    }
}

fn position<C: SamChar>(edges: &[(C, StateId)], symbol: C) -> Option<usize> {
    if edges.len() > BINARY_SEARCH_THRESHOLD {
        return edges.binary_search_by_key(&symbol, |&(c, _)| c).ok();
    }
    // Unrolled by 2.
    let chunks = edges.chunks_exact(2);
    let tail = edges.len() - chunks.remainder().len();
    for (i, chunk) in chunks.enumerate() {
        if chunk[0].0 == symbol {
            return Some(2 * i);
        }
        if chunk[1].0 == symbol {
            return Some(2 * i + 1);
        }
    }
    (tail < edges.len() && edges[tail].0 == symbol).then_some(tail)
}

/// An iterator over the transitions of a state.
#[derive(Clone)]
pub struct TransitionIter<'a, C: SamChar> {
    transitions: &'a Transitions<C>,
    index: usize,
}

impl<C: SamChar> Iterator for TransitionIter<'_, C> {
    type Item = (C, StateId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.transitions.get_index(self.index)?;
        self.index += 1;
        Some(edge)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.transitions.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<C: SamChar> ExactSizeIterator for TransitionIter<'_, C> {}

/// One end-position equivalence class of the text's substrings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State<C: SamChar> {
    len: usize,
    link: Option<StateId>,
    terminal: bool,
    transitions: Transitions<C>,
}

impl<C: SamChar> State<C> {
    /// Creates the root state: the class of the empty string, with no suffix link.
    pub fn root() -> Self {
        State {
            len: 0,
            link: None,
            terminal: false,
            transitions: Transitions::None,
        }
    }

    /// Creates a state whose longest member has length `len`.
    ///
    /// # Arguments
    ///
    /// * `len` - Length of the longest substring in the class
    /// * `link` - Suffix link, or `None` until it is known
    /// * `transitions` - Outgoing edges; a clone copies these from the state it splits
    pub fn new(len: usize, link: Option<StateId>, transitions: Transitions<C>) -> Self {
        State {
            len,
            link,
            terminal: false,
            transitions,
        }
    }

    /// Length of the longest substring in this class.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The suffix link. `None` only for the root.
    #[inline]
    pub fn link(&self) -> Option<StateId> {
        self.link
    }

    /// True if the strings of this class are suffixes of the whole text.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Outgoing transitions of this state.
    #[inline]
    pub fn transitions(&self) -> &Transitions<C> {
        &self.transitions
    }

    pub(crate) fn transitions_mut(&mut self) -> &mut Transitions<C> {
        &mut self.transitions
    }

    pub(crate) fn set_link(&mut self, link: StateId) {
        self.link = Some(link);
    }

    pub(crate) fn set_terminal(&mut self) {
        self.terminal = true;
    }
}
