//! Wallet capability: the narrow surface the remote adapter needs from
//! a signing provider. Connecting requests a permission set; once
//! connected, the wallet exposes its active address and signs message
//! payloads. The reference implementation is a local HMAC keystore;
//! anything heavier lives behind the same trait.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::errors::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    AccessAddress,
    SignTransaction,
    Dispatch,
}

pub trait Wallet: Send + Sync {
    /// Request the given permissions. Fails with `Transport` when the
    /// provider is unavailable or the request is declined.
    fn connect(&self, permissions: &[Permission]) -> Result<()>;

    fn active_address(&self) -> Result<String>;

    /// Sign a serialized payload, returning a hex HMAC-SHA256 tag.
    fn sign(&self, message: &str) -> Result<String>;
}

/// Local keystore wallet backed by a shared secret.
pub struct Keystore {
    address: String,
    secret: String,
}

impl Keystore {
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        // Address is the url-safe base64 of SHA-256(secret), the same
        // 43-character shape gateway addresses use.
        let digest = Sha256::digest(secret.as_bytes());
        let address = URL_SAFE_NO_PAD.encode(digest);
        Self { address, secret }
    }

    pub fn from_secret(secret: Option<String>) -> Result<Self> {
        match secret {
            Some(s) if !s.is_empty() => Ok(Keystore::new(s)),
            _ => Err(Error::Transport("no wallet secret configured".to_string())),
        }
    }
}

impl Wallet for Keystore {
    fn connect(&self, _permissions: &[Permission]) -> Result<()> {
        if self.secret.is_empty() {
            return Err(Error::Transport("wallet unavailable".to_string()));
        }
        Ok(())
    }

    fn active_address(&self) -> Result<String> {
        Ok(self.address.clone())
    }

    fn sign(&self, message: &str) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| Error::Transport(format!("HMAC error: {}", e)))?;
        mac.update(message.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}
