use crate::error::{GameOnSigError, GameOnSigResult};
use base64::{engine::general_purpose, Engine as _};
use sha2::{Digest, Sha256};

/// Length of the raw sha-256 output
const DIGEST_LEN: usize = 32;

/* -------------------------------- */
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Base64 encoded sha-256 digest of the request body, carried in `gameon-sig-body`
pub struct BodyDigest(String);

impl BodyDigest {
  /// Digest the given bytes. The empty body is hashed like any other input.
  pub fn from_bytes(data: impl AsRef<[u8]>) -> Self {
    let mut hasher = <Sha256 as Digest>::new();
    hasher.update(data.as_ref());
    Self(general_purpose::STANDARD.encode(hasher.finalize()))
  }

  /// Digest the concatenation of the given strings.
  /// No separator is inserted, so `["ab", "c"]` and `["a", "bc"]` yield the same digest.
  pub fn from_concat<I, S>(parts: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut hasher = <Sha256 as Digest>::new();
    parts.into_iter().for_each(|part| hasher.update(part.as_ref().as_bytes()));
    Self(general_purpose::STANDARD.encode(hasher.finalize()))
  }

  /// Parse a received `gameon-sig-body` value
  pub fn try_from_base64(value: &str) -> GameOnSigResult<Self> {
    let raw = general_purpose::STANDARD.decode(value)?;
    if raw.len() != DIGEST_LEN {
      return Err(GameOnSigError::InvalidBodyDigest(format!(
        "expected {DIGEST_LEN} bytes, got {}",
        raw.len()
      )));
    }
    Ok(Self(value.to_string()))
  }

  /// Check whether this digest was computed over the given bytes
  pub fn matches(&self, data: impl AsRef<[u8]>) -> bool {
    Self::from_bytes(data) == *self
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl std::fmt::Display for BodyDigest {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Digest of arbitrary bytes, see [`BodyDigest::from_bytes`]
pub fn digest(data: impl AsRef<[u8]>) -> BodyDigest {
  BodyDigest::from_bytes(data)
}

/// Digest of the separator-free concatenation of strings, see [`BodyDigest::from_concat`]
pub fn digest_concat<I, S>(parts: I) -> BodyDigest
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  BodyDigest::from_concat(parts)
}
