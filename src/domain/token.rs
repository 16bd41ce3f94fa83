//! Random tokens for password fields that offer a "generate" action.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::{OsRng, SmallRng};
use rand::{Rng, RngCore, SeedableRng};

/// Alphabet tokens are drawn from: `A-Z`, `a-z`, `0-9`.
pub const TOKEN_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length used by the wizard's generate action.
pub const DEFAULT_TOKEN_LENGTH: usize = 32;

/// Largest multiple of the alphabet size that fits in a byte; bytes at or
/// above it are rejected so every symbol is equally likely.
const ACCEPT_LIMIT: usize = TOKEN_ALPHABET.len() * (256 / TOKEN_ALPHABET.len());

static WEAK_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Quality of the randomness behind a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStrength {
    /// Drawn from the operating system's cryptographic generator.
    Strong,
    /// The OS generator failed; drawn from a time-seeded non-cryptographic
    /// generator. Not suitable for secrets exposed to untrusted parties.
    Weak,
}

/// A generated token together with the strength of its source.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretToken {
    value: String,
    strength: TokenStrength,
}

impl SecretToken {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn strength(&self) -> TokenStrength {
        self.strength
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl fmt::Debug for SecretToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretToken")
            .field("value", &"[REDACTED]")
            .field("strength", &self.strength)
            .finish()
    }
}

/// Generate an alphanumeric token of `length` characters.
pub fn generate_token(length: usize) -> SecretToken {
    generate_token_with(&mut OsRng, length)
}

pub(crate) fn generate_token_with<R: RngCore>(rng: &mut R, length: usize) -> SecretToken {
    match strong_token(rng, length) {
        Ok(value) => SecretToken { value, strength: TokenStrength::Strong },
        Err(err) => {
            tracing::warn!(error = %err, "OS random source unavailable; token uses a weak generator");
            SecretToken { value: weak_token(length), strength: TokenStrength::Weak }
        }
    }
}

fn strong_token<R: RngCore>(rng: &mut R, length: usize) -> Result<String, rand::Error> {
    let mut token = String::with_capacity(length);
    let mut buf = [0u8; 64];

    while token.len() < length {
        rng.try_fill_bytes(&mut buf)?;
        for byte in buf.iter().map(|b| usize::from(*b)).filter(|b| *b < ACCEPT_LIMIT) {
            if token.len() == length {
                break;
            }
            token.push(char::from(TOKEN_ALPHABET[byte % TOKEN_ALPHABET.len()]));
        }
    }

    Ok(token)
}

fn weak_token(length: usize) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let sequence = WEAK_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let seed = nanos ^ sequence.rotate_left(32) ^ u64::from(std::process::id());

    let mut rng = SmallRng::seed_from_u64(seed);
    (0..length)
        .map(|_| char::from(TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())]))
        .collect()
}
