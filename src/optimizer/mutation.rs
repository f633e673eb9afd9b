use crate::alphabet::{Symbol, ALPHABET_LEN};
use crate::key::Key;
use fastrand::Rng;

/// Two distinct symbols, uniformly.
#[inline(always)]
pub fn pick_pair(rng: &mut Rng) -> (Symbol, Symbol) {
    let a = rng.u8(0..ALPHABET_LEN as u8);
    let mut b = rng.u8(0..ALPHABET_LEN as u8 - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}

/// Neighbour of `key`: the preimages of two random plain symbols trade places.
#[inline(always)]
pub fn random_swap(key: &Key, rng: &mut Rng) -> Key {
    let (a, b) = pick_pair(rng);
    key.swap_image(a, b)
}

/// Applies `shakes` random swaps, to start a restart elsewhere in the same basin.
pub fn shake(key: &Key, shakes: usize, rng: &mut Rng) -> Key {
    (0..shakes).fold(*key, |k, _| random_swap(&k, rng))
}

/// A uniformly random key.
pub fn random_key(rng: &mut Rng) -> Key {
    let mut images: Vec<Symbol> = (0..ALPHABET_LEN as Symbol).collect();
    rng.shuffle(&mut images);

    let mut proposal = [None; ALPHABET_LEN];
    for (slot, &img) in proposal.iter_mut().zip(&images) {
        *slot = Some(img);
    }
    Key::from_proposal(&proposal)
}
