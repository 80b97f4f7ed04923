use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Number of random bytes fed into the digest. Far beyond what 256 bits of
/// output can absorb, but it keeps the token independent of any single weak
/// draw from the OS source.
const TOKEN_SEED_BYTES: usize = 8192;

/// Bearer credential for the one-shot configure endpoint.
///
/// Generated fresh for each server instance and handed to the route handler
/// explicitly; it lives exactly as long as the bootstrap run and is never
/// logged. The only place it may appear is the configure URL printed for the
/// user.
#[derive(Clone)]
pub struct SessionToken(String);

impl SessionToken {
    /// Derive a token by hashing 8192 bytes from the OS random source.
    pub fn generate() -> Self {
        let mut seed = [0u8; TOKEN_SEED_BYTES];
        OsRng.fill_bytes(&mut seed);
        let digest = Sha256::digest(seed);
        let hex: String = digest.iter().map(|byte| format!("{byte:02x}")).collect();
        Self(hex)
    }

    /// The hex rendering used in the configure URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Constant-time equality against a caller-supplied candidate.
    ///
    /// The token length is public (always 64 hex chars), so a length check
    /// up front leaks nothing; the byte comparison itself must not
    /// short-circuit.
    pub fn matches(&self, candidate: &str) -> bool {
        let expected = self.0.as_bytes();
        let candidate = candidate.as_bytes();
        if expected.len() != candidate.len() {
            return false;
        }
        expected
            .iter()
            .zip(candidate)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Keep the credential out of debug logs.
        f.write_str("SessionToken(..)")
    }
}
