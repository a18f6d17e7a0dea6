//! Login verification.

use std::collections::HashMap;

use sha2::{Digest, Sha256};

/// Checks a username/password pair.
pub trait Authenticator: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Fixed user list holding SHA-256 password digests.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    users: HashMap<String, [u8; 32]>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, username: &str, password: &str) -> Self {
        self.users.insert(username.to_string(), digest(password));
        self
    }

    /// Parses comma-separated `user:password` pairs.
    pub fn parse(pairs: &str) -> Result<Self, String> {
        let mut credentials = Self::new();

        for entry in pairs.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (username, password) =
                entry.split_once(':').ok_or_else(|| format!("Expected user:password, got {:?}", entry))?;
            let username = username.trim();
            if username.is_empty() || password.is_empty() {
                return Err(format!("Empty user or password in {:?}", entry));
            }
            credentials = credentials.with_user(username, password);
        }

        Ok(credentials)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Authenticator for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.users.get(username).is_some_and(|expected| *expected == digest(password))
    }
}

fn digest(password: &str) -> [u8; 32] {
    Sha256::digest(password.as_bytes()).into()
}
