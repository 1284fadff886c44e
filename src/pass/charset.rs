//! Character classes and alphabet building for password generation.

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A fixed set of symbols eligible for inclusion in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letters,
    Digits,
    Special,
}

impl CharClass {
    pub fn symbols(self) -> &'static [u8] {
        match self {
            CharClass::Letters => LETTERS,
            CharClass::Digits => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.symbols().contains(&(c as u8))
    }
}

/// Concatenate the symbols of every class, in order.
pub fn build(classes: &[CharClass]) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(classes));
    for class in classes {
        chars.extend_from_slice(class.symbols());
    }
    chars
}

/// Alphabet size without building it.
pub fn size(classes: &[CharClass]) -> usize {
    classes.iter().map(|c| c.symbols().len()).sum()
}
