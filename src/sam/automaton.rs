use std::fmt;

use super::builder::IntoSymbols;
use super::char_trait::SamChar;
use super::state_arena::{StateArena, ROOT};
use super::transitions::{State, StateId};

/// A suffix automaton: the minimal DFA accepting exactly the substrings of one text.
///
/// Built once by [`build_automaton`](super::builder::build_automaton) or a
/// [`Builder`](super::builder::Builder), then read-only. It owns all of its states,
/// can be freely moved, and is `Send + Sync`, so any number of threads can query
/// a shared reference concurrently.
///
/// # Examples
///
/// ```
/// use libsam::sam::builder::build_automaton;
///
/// let sam = build_automaton("abab").unwrap();
/// assert!(sam.has("ba"));
/// assert!(!sam.has("aab"));
/// assert!(sam.is_suffix("bab"));
///
/// // Walk the states directly, one symbol at a time.
/// let root = sam.root();
/// let ab = "ab".chars().try_fold(root, |s, ch| s.get(ch)).unwrap();
/// assert_eq!(ab.len(), 2);
/// ```
pub struct SuffixAutomaton<C: SamChar> {
    arena: StateArena<C>,
    text_len: usize,
}

impl<C: SamChar> SuffixAutomaton<C> {
    pub(crate) fn from_arena(arena: StateArena<C>, text_len: usize) -> Self {
        SuffixAutomaton { arena, text_len }
    }

    /// Returns the root state, which stands for the empty string.
    pub fn root(&self) -> StateRef<'_, C> {
        StateRef {
            automaton: self,
            id: ROOT,
        }
    }

    /// Returns the state with index `id`, or `None` if there is no such state.
    pub fn state(&self, id: StateId) -> Option<StateRef<'_, C>> {
        (id < self.arena.len()).then_some(StateRef { automaton: self, id })
    }

    /// Returns all states in creation order, root first.
    pub fn states(&self) -> impl ExactSizeIterator<Item = StateRef<'_, C>> + '_ {
        (0..self.arena.len()).map(move |id| StateRef { automaton: self, id })
    }

    /// True if `pattern` occurs somewhere in the text.
    ///
    /// Runs in time linear in the pattern's length. The empty pattern is contained in
    /// every text.
    pub fn has(&self, pattern: impl IntoSymbols<C>) -> bool {
        self.walk(pattern).is_some()
    }

    /// True if the text ends with `pattern`.
    pub fn is_suffix(&self, pattern: impl IntoSymbols<C>) -> bool {
        self.walk(pattern).is_some_and(|state| state.is_terminal())
    }

    fn walk(&self, pattern: impl IntoSymbols<C>) -> Option<StateRef<'_, C>> {
        pattern
            .collect_symbols()
            .into_iter()
            .try_fold(self.root(), |state, symbol| state.get(symbol))
    }

    /// Returns the number of distinct non-empty substrings of the text.
    pub fn distinct_substrings(&self) -> u64 {
        let states = self.arena.states();
        states
            .iter()
            .filter_map(|state| {
                let link = state.link()?;
                Some((state.len() - states[link].len()) as u64)
            })
            .sum()
    }

    /// Returns the number of states, root included.
    pub fn state_count(&self) -> usize {
        self.arena.len()
    }

    /// Returns the number of state slots reserved for this automaton.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Returns the length of the text the automaton was built from.
    pub fn text_len(&self) -> usize {
        self.text_len
    }
}

impl<C: SamChar> fmt::Debug for SuffixAutomaton<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuffixAutomaton")
            .field("text_len", &self.text_len)
            .field("state_count", &self.state_count())
            .finish()
    }
}

/// A read-only handle to one state of a [`SuffixAutomaton`].
///
/// Handles are cheap to copy. Two handles are equal when they point at the same state
/// of the same automaton.
pub struct StateRef<'a, C: SamChar> {
    automaton: &'a SuffixAutomaton<C>,
    id: StateId,
}

impl<'a, C: SamChar> StateRef<'a, C> {
    fn data(&self) -> &'a State<C> {
        self.automaton.arena.state(self.id)
    }

    fn at(&self, id: StateId) -> StateRef<'a, C> {
        StateRef {
            automaton: self.automaton,
            id,
        }
    }

    /// Index of this state in the automaton. The root is `0`.
    #[inline]
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Length of the longest substring this state stands for.
    #[inline]
    pub fn len(&self) -> usize {
        self.data().len()
    }

    /// The state of the longest suffix that ends at a different set of positions.
    ///
    /// `None` for the root.
    #[inline]
    pub fn link(&self) -> Option<StateRef<'a, C>> {
        self.data().link().map(|id| self.at(id))
    }

    /// Returns the state that `symbol`'s transition leads to, or `None` if no such
    /// transition exists.
    #[inline]
    pub fn get(&self, symbol: C) -> Option<StateRef<'a, C>> {
        self.data().transitions().get(symbol).map(|id| self.at(id))
    }

    /// Returns all outgoing transitions in ascending symbol order.
    pub fn transitions(&self) -> impl ExactSizeIterator<Item = (C, StateRef<'a, C>)> + 'a {
        let automaton = self.automaton;
        self.data()
            .transitions()
            .iter()
            .map(move |(symbol, id)| (symbol, StateRef { automaton, id }))
    }

    /// Returns the number of outgoing transitions.
    #[inline]
    pub fn transition_count(&self) -> usize {
        self.data().transitions().len()
    }

    /// True if the strings of this state are suffixes of the text.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.data().is_terminal()
    }
}

impl<C: SamChar> Clone for StateRef<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: SamChar> Copy for StateRef<'_, C> {}

impl<C: SamChar> PartialEq for StateRef<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.automaton, other.automaton) && self.id == other.id
    }
}

impl<C: SamChar> Eq for StateRef<'_, C> {}

impl<C: SamChar> fmt::Debug for StateRef<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateRef")
            .field("id", &self.id)
            .field("len", &self.len())
            .field("link", &self.data().link())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::super::builder::build_automaton;
    use super::*;

    fn assert_well_formed<C: SamChar>(sam: &SuffixAutomaton<C>) {
        assert_eq!(sam.root().len(), 0);
        assert_eq!(sam.root().link(), None);
        for state in sam.states().skip(1) {
            let link = state.link().expect("non-root state without suffix link");
            assert!(link.len() < state.len(), "{state:?} links to {link:?}");
        }
        for state in sam.states() {
            let symbols: Vec<C> = state.transitions().map(|(c, _)| c).collect();
            assert!(
                symbols.windows(2).all(|w| w[0] < w[1]),
                "{state:?} has duplicate or unsorted transitions"
            );
        }
        assert!(sam.state_count() - 1 <= 2 * sam.text_len() - 1);
    }

    #[test]
    fn abab() {
        let sam = build_automaton("abab").unwrap();
        assert!(sam.has("ab"));
        assert!(sam.has("ba"));
        assert!(sam.has("abab"));
        assert!(!sam.has("aab"));
        assert!(sam.has(""));
        assert_well_formed(&sam);
    }

    #[test]
    fn aaaa() {
        let sam = build_automaton("aaaa").unwrap();
        assert!(sam.has("aaa"));
        assert!(!sam.has("aaaaa"));
        assert_well_formed(&sam);
    }

    #[test]
    fn single_a() {
        let sam = build_automaton("a").unwrap();
        assert!(sam.has("a"));
        assert!(!sam.has("b"));
        assert_well_formed(&sam);
    }

    #[test]
    fn banana() {
        let sam = build_automaton("banana").unwrap();
        assert!(sam.has("ana"));
        assert!(sam.has("nan"));
        assert!(!sam.has("xyz"));
        assert!(!sam.has("bananas"));
        assert_well_formed(&sam);
    }

    #[test]
    fn suffixes() {
        let sam = build_automaton("banana").unwrap();
        for suffix in ["", "a", "na", "ana", "nana", "anana", "banana"] {
            assert!(sam.is_suffix(suffix), "{suffix}");
        }
        for not_suffix in ["b", "ban", "nan", "an", "xa"] {
            assert!(!sam.is_suffix(not_suffix), "{not_suffix}");
        }
    }

    #[test]
    fn distinct_substrings() {
        assert_eq!(build_automaton("a").unwrap().distinct_substrings(), 1);
        assert_eq!(build_automaton("aaaa").unwrap().distinct_substrings(), 4);
        assert_eq!(build_automaton("abab").unwrap().distinct_substrings(), 7);
        assert_eq!(build_automaton("banana").unwrap().distinct_substrings(), 15);
    }

    #[test]
    fn repeated_queries_give_same_answers() {
        let sam = build_automaton("abracadabra").unwrap();
        let patterns = ["abra", "cad", "dab", "rac", "bra", "arb", "aa"];
        let first: Vec<bool> = patterns.iter().map(|p| sam.has(p)).collect();
        let count = sam.state_count();
        for _ in 0..3 {
            let again: Vec<bool> = patterns.iter().map(|p| sam.has(p)).collect();
            assert_eq!(first, again);
        }
        assert_eq!(sam.state_count(), count);
        assert_eq!(first, [true, true, true, true, true, false, false]);
    }

    #[test]
    fn navigation() {
        let sam = build_automaton(b"abb").unwrap();
        let root = sam.root();
        assert_eq!(root.id(), 0);
        assert_eq!(root.transition_count(), 2);
        let symbols: Vec<u8> = root.transitions().map(|(c, _)| c).collect();
        assert_eq!(symbols, b"ab");
        for (symbol, target) in root.transitions() {
            assert_eq!(root.get(symbol), Some(target));
        }
        assert_eq!(sam.state(root.id()), Some(root));
        assert_eq!(sam.state(sam.state_count()), None);
    }

    #[test]
    fn terminal_states() {
        let sam = build_automaton("abb").unwrap();
        let terminal: Vec<usize> = sam
            .states()
            .filter(|s| s.is_terminal())
            .map(|s| s.len())
            .collect();
        // Classes of "abb"/"bb", "b" and the root.
        assert_eq!(terminal.len(), 3);
        assert!(terminal.contains(&3));
        assert!(terminal.contains(&1));
        assert!(terminal.contains(&0));
    }

    #[test]
    fn states_of_different_automata_differ() {
        let a = build_automaton("ab").unwrap();
        let b = build_automaton("ab").unwrap();
        assert_ne!(a.root(), b.root());
        assert_eq!(a.root(), a.root());
    }

    #[test]
    fn debug_output() {
        let sam = build_automaton("abb").unwrap();
        assert_eq!(
            format!("{sam:?}"),
            "SuffixAutomaton { text_len: 3, state_count: 5 }"
        );
    }

    #[test]
    fn automaton_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SuffixAutomaton<char>>();
        assert_send_sync::<SuffixAutomaton<u8>>();
    }

    #[test]
    fn concurrent_readers() {
        let text = "the quick brown fox jumps over the lazy dog";
        let sam = build_automaton(text).unwrap();
        std::thread::scope(|scope| {
            for offset in 0..4 {
                let sam = &sam;
                scope.spawn(move || {
                    for start in (offset..text.len()).step_by(4) {
                        for end in start..=text.len() {
                            assert!(sam.has(&text[start..end]));
                        }
                        assert!(!sam.has(format!("{}#", &text[start..])));
                    }
                });
            }
        });
    }
}
