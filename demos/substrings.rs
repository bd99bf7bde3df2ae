//! Example: substring and suffix queries on a small text.
//!
//! Builds a suffix automaton once, then answers queries against it and shows
//! where matches occur using the KMP scanner.
//!
//! Run with: cargo run --example substrings

use libsam::sam::build_automaton;
use libsam::scan::find_all;

fn main() {
    let text = "abracadabra";
    let sam = build_automaton(text).unwrap();
    println!("{sam:?}");
    println!("Distinct substrings: {}", sam.distinct_substrings());

    // Substring lookup
    println!("\nSubstring lookup:");
    for pattern in ["abra", "cad", "dab", "arb", "abracadabra", "abracadabras"] {
        let offsets = find_all(text.as_bytes(), pattern.as_bytes());
        println!(
            "  {pattern}: {} {offsets:?}",
            if sam.has(pattern) { "yes" } else { "no" }
        );
    }

    // Suffix checking
    println!("\nSuffix checking:");
    for pattern in ["bra", "abra", "cad", ""] {
        println!(
            "  *{pattern}: {}",
            if sam.is_suffix(pattern) { "yes" } else { "no" }
        );
    }

    // Suffix link chain of the whole text
    println!("\nSuffix links from the full text:");
    let mut state = text.chars().try_fold(sam.root(), |s, ch| s.get(ch));
    while let Some(s) = state {
        println!("  state {} (len {})", s.id(), s.len());
        state = s.link();
    }
}
