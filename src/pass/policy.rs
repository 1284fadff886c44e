//! Generation policy: length and enabled character classes.

use super::charset::{self, CharClass};
use crate::error::{Error, Result};
use crate::settings::{MAX_LENGTH, MIN_LENGTH};

/// A validated generation request. Length is always within
/// [`MIN_LENGTH`]..=[`MAX_LENGTH`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub(super) length: usize,
    pub(super) letters: bool,
    pub(super) digits: bool,
    pub(super) special: bool,
}

impl Policy {
    pub fn new(length: usize, special: bool, digits: bool) -> Result<Self> {
        if length < MIN_LENGTH {
            return Err(Error::InvalidLength {
                length: length as i64,
                min: MIN_LENGTH,
            });
        }
        if length > MAX_LENGTH {
            return Err(Error::LengthTooLong {
                length,
                max: MAX_LENGTH,
            });
        }
        Ok(Self {
            length,
            letters: true,
            digits,
            special,
        })
    }

    /// Drop the letter base class.
    #[cfg(test)]
    pub fn without_letters(mut self) -> Self {
        self.letters = false;
        self
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Every enabled class, base class first.
    pub fn classes(&self) -> Vec<CharClass> {
        let mut classes = Vec::with_capacity(3);
        if self.letters {
            classes.push(CharClass::Letters);
        }
        if self.digits {
            classes.push(CharClass::Digits);
        }
        if self.special {
            classes.push(CharClass::Special);
        }
        classes
    }

    /// Optional classes that must appear at least once, in draw order.
    pub fn required(&self) -> Vec<CharClass> {
        self.classes()
            .into_iter()
            .filter(|c| *c != CharClass::Letters)
            .collect()
    }

    pub fn alphabet_size(&self) -> usize {
        charset::size(&self.classes())
    }

    /// Entropy of the fill policy in bits: `length * log2(alphabet)`.
    pub fn entropy_bits(&self) -> f64 {
        let size = self.alphabet_size();
        if size == 0 {
            return 0.0;
        }
        self.length as f64 * (size as f64).log2()
    }
}
