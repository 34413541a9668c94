//! Password hashing utilities using Argon2
//!
//! Hashes are produced as Argon2id PHC strings and then base64-encoded so
//! they can live in a plain text column.

use argon2::{
    password_hash::{
        rand_core::{OsRng, RngCore},
        PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

const SALT_LEN: usize = 16;
const OUTPUT_LEN: usize = 32;
const ARGON2_ALGORITHMS: [&str; 3] = ["argon2id", "argon2i", "argon2d"];

/// Trait for password hashing operations
#[cfg_attr(test, automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a password into its stored, text-safe form
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a password against a stored hash
    ///
    /// A mismatch is `Ok(false)`; only an unreadable stored hash is an error.
    fn verify(&self, encoded_hash: &str, password: &str) -> Result<bool, DomainError>;
}

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasherParams {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HasherParams {
    fn default() -> Self {
        Self {
            memory_kib: 65536,
            iterations: 3,
            parallelism: 4,
        }
    }
}

/// Argon2-based password hasher
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher {
    params: HasherParams,
}

impl Argon2Hasher {
    /// Create a hasher with the default cost parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hasher with explicit cost parameters
    pub fn with_params(params: HasherParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> HasherParams {
        self.params
    }

    fn argon2(&self) -> Result<Argon2<'static>, DomainError> {
        let params = Params::new(
            self.params.memory_kib,
            self.params.iterations,
            self.params.parallelism,
            Some(OUTPUT_LEN),
        )
        .map_err(|e| DomainError::hashing(format!("Invalid parameters: {}", e)))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let mut salt_bytes = [0u8; SALT_LEN];
        OsRng
            .try_fill_bytes(&mut salt_bytes)
            .map_err(|e| DomainError::hashing(format!("Failed to gather salt entropy: {}", e)))?;

        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| DomainError::hashing(format!("Failed to encode salt: {}", e)))?;

        let phc = self
            .argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| DomainError::hashing(format!("Failed to hash password: {}", e)))?
            .to_string();

        Ok(STANDARD.encode(phc))
    }

    fn verify(&self, encoded_hash: &str, password: &str) -> Result<bool, DomainError> {
        let decoded = STANDARD
            .decode(encoded_hash)
            .map_err(|e| DomainError::verification(format!("Stored hash is not base64: {}", e)))?;

        let phc = String::from_utf8(decoded)
            .map_err(|e| DomainError::verification(format!("Stored hash is not UTF-8: {}", e)))?;

        let parsed = PasswordHash::new(&phc)
            .map_err(|e| DomainError::verification(format!("Failed to parse hash: {}", e)))?;

        if parsed.hash.is_none() {
            return Err(DomainError::verification("Stored hash carries no hash output"));
        }

        if !ARGON2_ALGORITHMS.contains(&parsed.algorithm.as_str()) {
            return Err(DomainError::verification(format!(
                "Unsupported hash algorithm '{}'",
                parsed.algorithm
            )));
        }

        // Cost parameters come from the stored hash, not from `self.params`
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(DomainError::verification(format!(
                "Verification failed: {}",
                e
            ))),
        }
    }
}
