// Thu Aug 27 2026 - Alex

use bitcoin::secp256k1::{All, Secp256k1};
use bitcoin::{Address, Network, PrivateKey, PublicKey};
use std::str::FromStr;

/// One generated keypair/address probed for balance. Ephemeral: built
/// and dropped every worker iteration unless a balance is found.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub private_key: String,
    pub public_key: String,
    pub address: String,
}

/// Injected key-generation capability. The engine never does any curve
/// math itself; tests swap in a deterministic stub.
pub trait KeypairProvider: Send + Sync {
    /// Returns (private key WIF, public key hex).
    fn generate_keypair(&self) -> (String, String);

    /// Derives the chain address for a public key, or `None` if the
    /// key does not decode.
    fn derive_address(&self, public_key: &str) -> Option<String>;
}

/// Production provider: random secp256k1 keys, compressed public key,
/// P2PKH mainnet address.
pub struct SecpKeypairProvider {
    secp: Secp256k1<All>,
    network: Network,
}

impl SecpKeypairProvider {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
            network: Network::Bitcoin,
        }
    }

    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }
}

impl Default for SecpKeypairProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypairProvider for SecpKeypairProvider {
    fn generate_keypair(&self) -> (String, String) {
        let (secret, public) = self.secp.generate_keypair(&mut rand::thread_rng());
        let private = PrivateKey::new(secret, self.network);
        let public = PublicKey::new(public);
        (private.to_wif(), public.to_string())
    }

    fn derive_address(&self, public_key: &str) -> Option<String> {
        let public = PublicKey::from_str(public_key).ok()?;
        Some(Address::p2pkh(&public, self.network).to_string())
    }
}

/// Masked form for console output; the full private key never hits a
/// log line.
pub fn mask_key(key: &str) -> String {
    if key.len() <= 8 {
        return "****".to_string();
    }
    format!("{}...{}", &key[..4], &key[key.len() - 4..])
}
