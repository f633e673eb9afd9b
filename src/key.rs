//! Substitution keys.
//!
//! A [`Key`] is a total bijection from cipher symbols to plain symbols. It keeps
//! both directions in fixed arrays so that swapping two images is a constant
//! time operation. Every constructor goes through a path that guarantees the
//! bijection, so no invalid key can be observed from outside this module.

use crate::alphabet::{self, Symbol, ALPHABET_LEN};
use crate::error::{CipherError, CipherResult};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    // forward[cipher] = plain
    forward: [Symbol; ALPHABET_LEN],
    // inverse[plain] = cipher
    inverse: [Symbol; ALPHABET_LEN],
}

impl Key {
    pub fn identity() -> Self {
        let mut forward = [0; ALPHABET_LEN];
        for (i, slot) in forward.iter_mut().enumerate() {
            *slot = i as Symbol;
        }
        Self {
            forward,
            inverse: forward,
        }
    }

    /// Builds a key from a proposed, possibly partial or colliding, mapping.
    ///
    /// Domain symbols are visited in alphabet order. A proposed image is kept
    /// if it is in range and not already taken; everything left unresolved is
    /// then filled with the unused images, also in alphabet order.
    pub fn from_proposal(proposal: &[Option<Symbol>; ALPHABET_LEN]) -> Self {
        let mut forward = [None; ALPHABET_LEN];
        let mut used = [false; ALPHABET_LEN];

        for (cipher, proposed) in proposal.iter().enumerate() {
            if let Some(p) = *proposed {
                let p_idx = p as usize;
                if p_idx < ALPHABET_LEN && !used[p_idx] {
                    forward[cipher] = Some(p);
                    used[p_idx] = true;
                }
            }
        }

        let mut leftovers = (0..ALPHABET_LEN as Symbol).filter(|&s| !used[s as usize]);
        let mut resolved = [0; ALPHABET_LEN];
        for (cipher, slot) in forward.iter().enumerate() {
            // Exactly as many leftovers as unresolved slots, so the fallback is unreachable.
            resolved[cipher] = match slot {
                Some(p) => *p,
                None => leftovers.next().unwrap_or(cipher as Symbol),
            };
        }

        Self::from_forward(resolved)
    }

    /// Parses a 27-letter image string: the i-th letter is the image of the
    /// i-th alphabet letter.
    pub fn from_images(images: &str) -> CipherResult<Self> {
        let symbols = alphabet::symbols_of(images).ok_or_else(|| {
            CipherError::InvalidKey(format!("'{}' contains non-alphabet characters", images))
        })?;

        if symbols.len() != ALPHABET_LEN {
            return Err(CipherError::InvalidKey(format!(
                "expected {} letters, got {}",
                ALPHABET_LEN,
                symbols.len()
            )));
        }

        let mut seen = [false; ALPHABET_LEN];
        let mut forward = [0; ALPHABET_LEN];
        for (i, &s) in symbols.iter().enumerate() {
            if seen[s as usize] {
                return Err(CipherError::InvalidKey(format!(
                    "the letter '{}' appears twice",
                    alphabet::char_of(s)
                )));
            }
            seen[s as usize] = true;
            forward[i] = s;
        }

        Ok(Self::from_forward(forward))
    }

    /// Only called with a permutation.
    fn from_forward(forward: [Symbol; ALPHABET_LEN]) -> Self {
        let mut inverse = [0; ALPHABET_LEN];
        for (cipher, &plain) in forward.iter().enumerate() {
            inverse[plain as usize] = cipher as Symbol;
        }
        Self { forward, inverse }
    }

    #[inline(always)]
    pub fn image(&self, cipher: Symbol) -> Symbol {
        self.forward[cipher as usize]
    }

    #[inline(always)]
    pub fn preimage(&self, plain: Symbol) -> Symbol {
        self.inverse[plain as usize]
    }

    pub fn images(&self) -> &[Symbol; ALPHABET_LEN] {
        &self.forward
    }

    /// Image of a character, `None` if it is not an alphabet letter.
    pub fn image_of_char(&self, c: char) -> Option<char> {
        alphabet::index_of(c).map(|s| alphabet::char_of(self.image(s)))
    }

    /// Exchanges the preimages of the plain symbols `a` and `b`.
    ///
    /// Applying the same swap twice restores the key.
    #[inline(always)]
    pub fn swap_image(&self, a: Symbol, b: Symbol) -> Self {
        let mut next = *self;
        let ca = self.inverse[a as usize];
        let cb = self.inverse[b as usize];
        next.forward[ca as usize] = b;
        next.forward[cb as usize] = a;
        next.inverse[a as usize] = cb;
        next.inverse[b as usize] = ca;
        next
    }

    /// The key that undoes this one.
    pub fn inverse(&self) -> Self {
        Self {
            forward: self.inverse,
            inverse: self.forward,
        }
    }

    /// Substitutes every alphabet letter of `text`; everything else is copied as is.
    pub fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|c| match alphabet::index_of(c) {
                Some(s) => alphabet::char_of(self.image(s)),
                None => c,
            })
            .collect()
    }

    /// `(cipher, plain)` pairs ordered by the plain letter's alphabet position.
    pub fn pairs_by_plain(&self) -> Vec<(char, char)> {
        self.inverse
            .iter()
            .enumerate()
            .map(|(plain, &cipher)| (alphabet::char_of(cipher), alphabet::char_of(plain as Symbol)))
            .collect()
    }

    /// Whether the images cover the alphabet exactly once.
    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; ALPHABET_LEN];
        for &p in &self.forward {
            let idx = p as usize;
            if idx >= ALPHABET_LEN || seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        self.forward
            .iter()
            .enumerate()
            .all(|(c, &p)| self.inverse[p as usize] as usize == c)
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Key {
    /// The image string, readable back with [`Key::from_images`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &p in &self.forward {
            write!(f, "{}", alphabet::char_of(p))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self)
    }
}

impl serde::Serialize for Key {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
