use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;
use serde::Deserialize;
use serde::Serialize;
use subtle::ConstantTimeEq;

use super::errors::PasswordError;

/// Number of random bytes in a freshly generated salt (hex-encoded to twice as many chars).
pub const SALT_LENGTH: usize = 16;

const ALGORITHM_NAME: &str = "argon2id";
const ITERATIONS: u32 = 2;
const MEMORY_KIB: u32 = 19 * 1024;
const PARALLELISM: u32 = 1;
const OUTPUT_LENGTH: usize = 32;
const MIN_SALT_LENGTH: usize = 8;

/// Key derivation parameters.
///
/// Process-wide constants. Records created under different parameters
/// will no longer verify if these change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationParams {
    pub algorithm: String,
    pub iterations: u32,
    pub memory_kib: u32,
    pub parallelism: u32,
    pub output_len: usize,
}

impl DerivationParams {
    /// Parameters used for every derivation in this process.
    pub fn current() -> Self {
        Self {
            algorithm: ALGORITHM_NAME.to_string(),
            iterations: ITERATIONS,
            memory_kib: MEMORY_KIB,
            parallelism: PARALLELISM,
            output_len: OUTPUT_LENGTH,
        }
    }
}

/// Salt and derived hash for a single password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCredential {
    /// Hex-encoded derived key
    pub hash: String,
    /// Hex-encoded random salt
    pub salt: String,
    pub params: DerivationParams,
}

/// Salted password key derivation.
///
/// Derivation is deterministic for a given `(password, salt)` pair, so
/// verification is a re-derive and compare with the stored salt.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a new password hasher configured with [`DerivationParams::current`].
    ///
    /// # Returns
    /// PasswordHasher instance
    pub fn new() -> Self {
        let params = Params::new(MEMORY_KIB, ITERATIONS, PARALLELISM, Some(OUTPUT_LENGTH))
            .expect("derivation parameter constants are within argon2's accepted ranges");

        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Generate a fresh random salt from the OS random source.
    ///
    /// # Returns
    /// Hex-encoded salt of `SALT_LENGTH` bytes
    pub fn generate_salt(&self) -> String {
        let mut bytes = [0u8; SALT_LENGTH];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Derive a hash from a password and salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password, must be non-empty
    /// * `salt` - Salt previously returned by [`generate_salt`](Self::generate_salt)
    ///
    /// # Returns
    /// Hex-encoded derived key
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    /// * `InvalidSalt` - Salt is shorter than the KDF accepts
    /// * `HashingFailed` - Derivation failed
    pub fn derive(&self, password: &str, salt: &str) -> Result<String, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::EmptyPassword);
        }
        if salt.len() < MIN_SALT_LENGTH {
            return Err(PasswordError::InvalidSalt(format!(
                "expected at least {} bytes, got {}",
                MIN_SALT_LENGTH,
                salt.len()
            )));
        }

        let mut output = [0u8; OUTPUT_LENGTH];
        self.argon2
            .hash_password_into(password.as_bytes(), salt.as_bytes(), &mut output)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        Ok(hex::encode(output))
    }

    /// Hash a new password with a freshly generated salt.
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    /// * `HashingFailed` - Derivation failed
    pub fn hash(&self, password: &str) -> Result<PasswordCredential, PasswordError> {
        let salt = self.generate_salt();
        let hash = self.derive(password, &salt)?;

        Ok(PasswordCredential {
            hash,
            salt,
            params: DerivationParams::current(),
        })
    }

    /// Re-derive with the stored salt and compare against the stored hash.
    ///
    /// The comparison runs in constant time over the hash bytes.
    ///
    /// # Returns
    /// True if the password produces the stored hash
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    /// * `InvalidSalt` - Stored salt is unusable
    /// * `HashingFailed` - Derivation failed
    pub fn matches(
        &self,
        password: &str,
        salt: &str,
        expected_hash: &str,
    ) -> Result<bool, PasswordError> {
        let derived = self.derive(password, salt)?;
        Ok(derived.as_bytes().ct_eq(expected_hash.as_bytes()).into())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
