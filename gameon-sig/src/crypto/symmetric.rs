use super::AlgorithmName;
use crate::error::{GameOnSigError, GameOnSigResult};
use base64::{engine::general_purpose, Engine as _};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<sha2::Sha256>;

/* -------------------------------- */
/// Secret shared between the signer and the verifier for one identity
#[derive(Clone)]
pub enum SharedSecret {
  /// hmac-sha256
  HmacSha256(Vec<u8>),
}

impl SharedSecret {
  /// Create a new shared secret from raw bytes. An empty secret is refused.
  pub fn try_new(key: impl AsRef<[u8]>) -> GameOnSigResult<Self> {
    let key = key.as_ref();
    if key.is_empty() {
      return Err(GameOnSigError::InvalidSecret("shared secret must not be empty".to_string()));
    }
    Ok(SharedSecret::HmacSha256(key.to_vec()))
  }

  /// Create a new shared secret from its utf-8 text form, which is how gameon secrets are distributed
  pub fn from_utf8(key: &str) -> GameOnSigResult<Self> {
    Self::try_new(key.as_bytes())
  }

  fn new_mac(&self) -> GameOnSigResult<HmacSha256> {
    match self {
      SharedSecret::HmacSha256(key) => {
        HmacSha256::new_from_slice(key).map_err(|e| GameOnSigError::InvalidSecret(e.to_string()))
      }
    }
  }
}

impl std::fmt::Debug for SharedSecret {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use super::VerifyingKey;
    f.debug_struct("SharedSecret")
      .field("alg", &self.alg())
      .field("key_id", &self.key_id())
      .finish()
  }
}

impl super::SigningKey for SharedSecret {
  /// Sign the data
  fn sign(&self, data: &[u8]) -> GameOnSigResult<Vec<u8>> {
    let mut mac = self.new_mac()?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
  }
  /// Get the key id
  fn key_id(&self) -> String {
    use super::VerifyingKey;
    <Self as VerifyingKey>::key_id(self)
  }
  /// Get the algorithm name
  fn alg(&self) -> AlgorithmName {
    use super::VerifyingKey;
    <Self as VerifyingKey>::alg(self)
  }
}

impl super::VerifyingKey for SharedSecret {
  /// Verify the mac in constant time
  fn verify(&self, data: &[u8], expected_mac: &[u8]) -> GameOnSigResult<()> {
    let mut mac = self.new_mac()?;
    mac.update(data);
    mac
      .verify_slice(expected_mac)
      .map_err(|_| GameOnSigError::InvalidSignature("Invalid mac".to_string()))
  }

  /// Get the key id, which is safe to log in place of the secret
  fn key_id(&self) -> String {
    match self {
      SharedSecret::HmacSha256(key) => {
        let mut hasher = <Sha256 as Digest>::new();
        hasher.update(key);
        let hash = hasher.finalize();
        general_purpose::URL_SAFE_NO_PAD.encode(hash)
      }
    }
  }
  /// Get the algorithm name
  fn alg(&self) -> AlgorithmName {
    match self {
      SharedSecret::HmacSha256(_) => AlgorithmName::HmacSha256,
    }
  }
}
