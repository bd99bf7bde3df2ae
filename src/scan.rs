//! Exact pattern search by the Knuth–Morris–Pratt algorithm.
//!
//! Independent of the automaton; reports where a pattern occurs rather than only
//! whether it does, which makes it a convenient cross-check for
//! [`SuffixAutomaton::has`](crate::sam::SuffixAutomaton::has).

/// Computes the prefix function of `pattern`.
///
/// Entry `i` is the length of the longest proper prefix of `pattern[..=i]` that is
/// also a suffix of it.
pub fn prefix_function<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut pi = vec![0; pattern.len()];
    let mut j = 0;
    for i in 1..pattern.len() {
        while j > 0 && pattern[j] != pattern[i] {
            j = pi[j - 1];
        }
        if pattern[j] == pattern[i] {
            j += 1;
        }
        pi[i] = j;
    }
    pi
}

/// Returns the starting offsets of every occurrence of `pattern` in `text`, in
/// increasing order. Overlapping occurrences are all reported.
///
/// The empty pattern occurs at every offset from `0` to `text.len()` inclusive.
///
/// # Examples
///
/// ```
/// use libsam::scan::find_all;
///
/// assert_eq!(find_all(b"abababa", b"aba"), [0, 2, 4]);
/// assert!(find_all(b"abababa", b"bb").is_empty());
/// ```
pub fn find_all<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    if pattern.is_empty() {
        return (0..=text.len()).collect();
    }
    let pi = prefix_function(pattern);
    let mut offsets = Vec::new();
    let mut j = 0;
    for (i, symbol) in text.iter().enumerate() {
        while j > 0 && pattern[j] != *symbol {
            j = pi[j - 1];
        }
        if pattern[j] == *symbol {
            j += 1;
        }
        if j == pattern.len() {
            offsets.push(i + 1 - j);
            j = pi[j - 1];
        }
    }
    offsets
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prefix_function_of_known_patterns() {
        assert_eq!(prefix_function(b"abcabcd"), [0, 0, 0, 1, 2, 3, 0]);
        assert_eq!(prefix_function(b"aabaaab"), [0, 1, 0, 1, 2, 2, 3]);
        assert!(prefix_function::<u8>(&[]).is_empty());
    }

    #[test]
    fn overlapping_occurrences() {
        assert_eq!(find_all(b"aaaa", b"aa"), [0, 1, 2]);
        assert_eq!(find_all(b"banana", b"ana"), [1, 3]);
    }

    #[test]
    fn no_occurrence() {
        assert!(find_all(b"banana", b"nab").is_empty());
        assert!(find_all(b"ab", b"abc").is_empty());
    }

    #[test]
    fn whole_text() {
        assert_eq!(find_all(b"banana", b"banana"), [0]);
    }

    #[test]
    fn empty_pattern_matches_everywhere() {
        assert_eq!(find_all(b"abc", b""), [0, 1, 2, 3]);
        assert_eq!(find_all::<u8>(&[], &[]), [0]);
    }

    #[test]
    fn agrees_with_naive_search() {
        let text: Vec<char> = "abracadabra abracadabra".chars().collect();
        for len in 1..=5 {
            for start in 0..=text.len() - len {
                let pattern = &text[start..start + len];
                let naive: Vec<usize> = text
                    .windows(len)
                    .enumerate()
                    .filter(|(_, w)| w == &pattern)
                    .map(|(i, _)| i)
                    .collect();
                assert_eq!(find_all(&text, pattern), naive);
            }
        }
    }
}
