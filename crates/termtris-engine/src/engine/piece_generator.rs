use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;

use crate::PieceKind;

/// Seed for deterministic piece generation.
///
/// A 128-bit (16-byte) seed for the generator's PRNG. The same seed always
/// produces the same piece sequence, so a game can be replayed.
///
/// The textual form is exactly 32 hexadecimal digits, big-endian.
///
/// # Example
///
/// ```
/// use termtris_engine::{PieceGenerator, PieceSeed};
///
/// let seed: PieceSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
/// assert_eq!(seed.to_string(), "0123456789abcdef0123456789abcdef");
///
/// let mut a = PieceGenerator::with_seed(seed);
/// let mut b = PieceGenerator::with_seed(seed);
/// assert_eq!(a.draw(), b.draw());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSeed([u8; 16]);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePieceSeedError {
    #[display("invalid seed: expected 32 hex digits, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    #[display("invalid seed: {_0:?} is not hexadecimal")]
    InvalidDigit(#[error(not(source))] String),
}

impl PieceSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for PieceSeed {
    type Err = ParsePieceSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParsePieceSeedError::InvalidLength(s.len()));
        }
        // from_str_radix accepts a leading '+', which is not a hex digit
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParsePieceSeedError::InvalidDigit(s.to_owned()));
        }
        let num = u128::from_str_radix(s, 16)
            .map_err(|_| ParsePieceSeedError::InvalidDigit(s.to_owned()))?;
        Ok(Self(num.to_be_bytes()))
    }
}

/// Allows generating random `PieceSeed` values with `rng.random()`.
impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}

/// Draws piece identities uniformly at random.
///
/// Every draw is independent and uniform over all eight identities; there is
/// no bag, so droughts and repeats are possible.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    seed: PieceSeed,
    rng: Pcg32,
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceGenerator {
    /// Creates a generator with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            seed,
            rng: Pcg32::from_seed(seed.0),
        }
    }

    #[must_use]
    pub fn seed(&self) -> PieceSeed {
        self.seed
    }

    pub fn draw(&mut self) -> PieceKind {
        self.rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQUENTIAL: [u8; 16] = [
        0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54, 0x32,
        0x10,
    ];

    #[test]
    fn test_display_is_32_char_hex() {
        let seed: PieceSeed = rand::rng().random();
        let text = seed.to_string();
        assert_eq!(text.len(), 32);
        assert!(text.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_known_values() {
        assert_eq!(
            PieceSeed([0; 16]).to_string(),
            "00000000000000000000000000000000"
        );
        assert_eq!(
            PieceSeed([0xFF; 16]).to_string(),
            "ffffffffffffffffffffffffffffffff"
        );
        assert_eq!(
            PieceSeed(SEQUENTIAL).to_string(),
            "0123456789abcdeffedcba9876543210"
        );
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let seed: PieceSeed = "0123456789ABCDEFFEDCBA9876543210".parse().unwrap();
        assert_eq!(seed.as_bytes(), &SEQUENTIAL);
    }

    #[test]
    fn test_parse_round_trips_random_seed() {
        let seed: PieceSeed = rand::rng().random();
        assert_eq!(seed.to_string().parse::<PieceSeed>(), Ok(seed));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "".parse::<PieceSeed>(),
            Err(ParsePieceSeedError::InvalidLength(0))
        );
        assert_eq!(
            "0123456789abcdef0123456789abcde".parse::<PieceSeed>(),
            Err(ParsePieceSeedError::InvalidLength(31))
        );
        assert_eq!(
            "0123456789abcdef0123456789abcdef0".parse::<PieceSeed>(),
            Err(ParsePieceSeedError::InvalidLength(33))
        );
        assert!(matches!(
            "ghijklmnopqrstuvwxyzghijklmnopqr".parse::<PieceSeed>(),
            Err(ParsePieceSeedError::InvalidDigit(_))
        ));
        assert!(matches!(
            "+123456789abcdef0123456789abcdef".parse::<PieceSeed>(),
            Err(ParsePieceSeedError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_error_message_mentions_seed() {
        let err = "xyz".parse::<PieceSeed>().unwrap_err();
        assert!(err.to_string().starts_with("invalid seed"));
    }

    #[test]
    fn test_deterministic_generation() {
        let seed = PieceSeed(SEQUENTIAL);
        let mut a = PieceGenerator::with_seed(seed);
        let mut b = PieceGenerator::with_seed(seed);
        for _ in 0..50 {
            assert_eq!(a.draw(), b.draw());
        }
        assert_eq!(a.seed(), seed);
    }

    #[test]
    fn test_every_kind_is_drawn() {
        let mut generator = PieceGenerator::with_seed(PieceSeed([7; 16]));
        let mut seen = [false; PieceKind::LEN];
        for _ in 0..1000 {
            seen[generator.draw() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
