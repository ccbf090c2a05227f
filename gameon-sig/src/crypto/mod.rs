mod symmetric;

use crate::error::GameOnSigResult;

pub use symmetric::SharedSecret;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Algorithm names
pub enum AlgorithmName {
  HmacSha256,
}

impl AlgorithmName {
  pub fn as_str(&self) -> &'static str {
    match self {
      AlgorithmName::HmacSha256 => "hmac-sha256",
    }
  }
}

impl std::fmt::Display for AlgorithmName {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// SigningKey trait
pub trait SigningKey {
  fn sign(&self, data: &[u8]) -> GameOnSigResult<Vec<u8>>;
  fn key_id(&self) -> String;
  fn alg(&self) -> AlgorithmName;
}

/// VerifyingKey trait
pub trait VerifyingKey {
  fn verify(&self, data: &[u8], signature: &[u8]) -> GameOnSigResult<()>;
  fn key_id(&self) -> String;
  fn alg(&self) -> AlgorithmName;
}
