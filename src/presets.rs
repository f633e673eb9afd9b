use crate::error::CipherResult;
use crate::key::Key;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Named substitution keys, given as the image of each letter in alphabet order.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownKey {
    Identity,
    Atbash,
    // Keyword alphabet: the keyword's letters first, then the rest in order.
    Murcielago,
}

impl KnownKey {
    pub fn get_str(&self) -> &'static str {
        match self {
            Self::Identity => "abcdefghijklmnñopqrstuvwxyz",
            Self::Atbash => "zyxwvutsrqpoñnmlkjihgfedcba",
            Self::Murcielago => "murcielagobdfhjknñpqstvwxyz",
        }
    }

    pub fn key(&self) -> CipherResult<Key> {
        Key::from_images(self.get_str())
    }
}

pub fn all_known_keys() -> Vec<KnownKey> {
    KnownKey::iter().collect()
}
