use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Error;

/// Default password alphabet: uppercase, lowercase, then digits (62 symbols)
pub const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default password length
pub const DEFAULT_LENGTH: usize = 8;

/// Generate a password of `length` characters from [`ALPHANUMERIC`]
#[inline]
pub fn generate_password<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    sample(rng, ALPHANUMERIC, length)
}

#[inline]
fn sample<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], length: usize) -> String {
    let mut password = String::with_capacity(length);
    for _ in 0..length {
        let idx = rng.gen_range(0..alphabet.len());
        password.push(alphabet[idx] as char);
    }
    password
}

/// Produces fixed-length random passwords from an owned random source.
///
/// Every character is drawn independently and uniformly from the alphabet.
/// The source is not cryptographically secure and nothing prevents two calls
/// from returning the same password.
#[derive(Debug, Clone)]
pub struct PasswordGenerator<R> {
    rng: R,
    length: usize,
    alphabet: Vec<u8>,
}

impl<R: Rng> PasswordGenerator<R> {
    /// Creates a generator over `rng` with [`DEFAULT_LENGTH`] and [`ALPHANUMERIC`].
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            length: DEFAULT_LENGTH,
            alphabet: ALPHANUMERIC.to_vec(),
        }
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Replaces the alphabet.
    ///
    /// Each byte must be ASCII so that one symbol is one character of output.
    pub fn with_alphabet(mut self, alphabet: impl Into<Vec<u8>>) -> Result<Self, Error> {
        let alphabet = alphabet.into();
        if alphabet.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        if let Some(&byte) = alphabet.iter().find(|b| !b.is_ascii()) {
            return Err(Error::NonAsciiAlphabet { byte });
        }
        self.alphabet = alphabet;
        Ok(self)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    /// Returns a fresh password of exactly `length()` characters.
    pub fn generate(&mut self) -> String {
        sample(&mut self.rng, &self.alphabet, self.length)
    }
}

impl PasswordGenerator<StdRng> {
    /// Deterministic generator: the same seed yields the same sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}
