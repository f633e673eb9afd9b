//! The Spanish alphabet and the static reference data derived from it.
//!
//! Symbols are addressed by their position in [`ALPHABET`]. Every other module
//! works on these positions and only converts back to `char` at the edges.

/// Position of a letter inside [`ALPHABET`] (`0..ALPHABET_LEN`).
pub type Symbol = u8;

pub const ALPHABET_LEN: usize = 27;

/// The 27 letters in dictionary order, `ñ` sitting between `n` and `o`.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'ñ', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Approximate order of letter frequency in written Spanish, most common first.
pub const SPANISH_FREQ_ORDER: &str = "eaosrnidltucmpbgyvfqhxzjñkw";

pub const VOWELS: &str = "aeiou";

const ENYE: Symbol = 14;

/// Maps a character to its symbol. Only lowercase, unaccented letters and `ñ`
/// belong to the alphabet.
#[inline(always)]
pub fn index_of(c: char) -> Option<Symbol> {
    match c {
        'a'..='n' => Some(c as u8 - b'a'),
        'ñ' => Some(ENYE),
        'o'..='z' => Some(c as u8 - b'a' + 1),
        _ => None,
    }
}

#[inline(always)]
pub fn char_of(s: Symbol) -> char {
    ALPHABET[s as usize]
}

#[inline(always)]
pub fn is_vowel(s: Symbol) -> bool {
    VOWEL_MASK[s as usize]
}

const VOWEL_MASK: [bool; ALPHABET_LEN] = {
    let mut mask = [false; ALPHABET_LEN];
    mask[0] = true; // a
    mask[4] = true; // e
    mask[8] = true; // i
    mask[15] = true; // o
    mask[21] = true; // u
    mask
};

/// [`SPANISH_FREQ_ORDER`] as symbols.
pub fn reference_order() -> Vec<Symbol> {
    SPANISH_FREQ_ORDER.chars().filter_map(index_of).collect()
}

/// Converts a string of alphabet letters to symbols, rejecting anything else.
pub fn symbols_of(s: &str) -> Option<Vec<Symbol>> {
    s.chars().map(index_of).collect()
}
