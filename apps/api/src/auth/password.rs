//! Password hashing: PBKDF2-HMAC-SHA256 with a random per-password salt.
//!
//! Stored form: `pbkdf2-sha256$<iterations>$<salt>$<key>` (unpadded base64).
//! The iteration count travels with each hash, so changing the work factor only
//! affects hashes created afterwards.

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;

pub const DEFAULT_ITERATIONS: u32 = 600_000;
pub const KEY_LENGTH: usize = 32;
pub const SALT_LENGTH: usize = 32;

const SCHEME: &str = "pbkdf2-sha256";

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    iterations: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl PasswordHasher {
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations: iterations.max(1),
        }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Hashes `password` with a fresh salt. Empty passwords are hashed like any other.
    pub fn hash(&self, password: &str) -> String {
        let salt = generate_salt();
        let key = derive(password, &salt, self.iterations);
        format!(
            "{SCHEME}${}${}${}",
            self.iterations,
            STANDARD_NO_PAD.encode(salt),
            STANDARD_NO_PAD.encode(key)
        )
    }

    /// Checks `password` against a stored hash in constant time.
    /// Malformed hashes never verify.
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        let Some(parsed) = ParsedHash::parse(stored) else {
            return false;
        };
        let candidate = derive(password, &parsed.salt, parsed.iterations);
        candidate.as_slice().ct_eq(parsed.key.as_slice()).into()
    }

    /// Burns one derivation at the current work factor. Used when the account
    /// does not exist, so both login failures take the same time.
    pub fn verify_dummy(&self, password: &str) {
        let _ = derive(password, &[0u8; SALT_LENGTH], self.iterations);
    }
}

struct ParsedHash {
    iterations: u32,
    salt: Vec<u8>,
    key: Vec<u8>,
}

impl ParsedHash {
    fn parse(stored: &str) -> Option<Self> {
        let mut parts = stored.split('$');
        if parts.next()? != SCHEME {
            return None;
        }
        let iterations = parts.next()?.parse::<u32>().ok().filter(|n| *n > 0)?;
        let salt = STANDARD_NO_PAD.decode(parts.next()?).ok()?;
        let key = STANDARD_NO_PAD.decode(parts.next()?).ok()?;
        if parts.next().is_some() || key.len() != KEY_LENGTH {
            return None;
        }
        Some(Self {
            iterations,
            salt,
            key,
        })
    }
}

fn derive(password: &str, salt: &[u8], iterations: u32) -> [u8; KEY_LENGTH] {
    let mut key = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}

fn generate_salt() -> [u8; SALT_LENGTH] {
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}
