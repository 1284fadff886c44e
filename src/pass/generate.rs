//! Password generation.

use std::fmt;

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

use super::charset;
use super::policy::Policy;
use crate::error::{Error, Result};

/// A generated password. The buffer is wiped when dropped.
pub struct Password(Zeroizing<String>);

#[allow(clippy::len_without_is_empty)]
impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters; the alphabet is ASCII so this is also bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"***").finish()
    }
}

/// Generate one password satisfying `policy`.
///
/// One character from each required class is drawn first, the rest is filled
/// from the combined alphabet, then the whole sequence is shuffled so the
/// required characters land at uniformly random positions.
pub fn generate<R>(policy: &Policy, rng: &mut R) -> Result<Password>
where
    R: Rng + CryptoRng + ?Sized,
{
    let classes = policy.classes();
    let chars = charset::build(&classes);
    if chars.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    let required = policy.required();
    let length = policy.length();
    if length < required.len() {
        return Err(Error::LengthBelowRequired {
            length,
            required: required.len(),
        });
    }

    debug!(
        length,
        alphabet = chars.len(),
        required = required.len(),
        entropy_bits = policy.entropy_bits(),
        "generating password"
    );

    let mut buf: Vec<u8> = Vec::with_capacity(length);
    for class in &required {
        buf.push(random_byte(class.symbols(), rng));
    }
    buf.extend((required.len()..length).map(|_| random_byte(&chars, rng)));
    buf.shuffle(rng);
    debug_assert!(
        buf.iter()
            .all(|&b| classes.iter().any(|class| class.contains(b as char)))
    );
    trace!(placed = buf.len(), "shuffled working sequence");

    let mut pass = String::with_capacity(length);
    pass.extend(buf.iter().map(|&b| b as char));
    buf.zeroize();

    Ok(Password(Zeroizing::new(pass)))
}

#[inline]
fn random_byte<R: Rng + ?Sized>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.gen_range(0..chars.len())]
}
