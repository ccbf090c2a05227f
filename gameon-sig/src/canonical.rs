use crate::{
  digest::BodyDigest,
  message_component::{Identity, RequestMethod, RequestPath, Timestamp},
};

/* ---------------------------------------- */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Which request attributes are bound into the canonical string.
/// The two variants give different signatures for the same request, so signer and verifier must agree on one.
pub enum CanonicalVariant {
  /// identity, timestamp, body digest
  Basic,
  /// method, path, identity, timestamp, body digest
  #[default]
  Extended,
}

impl CanonicalVariant {
  pub fn as_str(&self) -> &'static str {
    match self {
      CanonicalVariant::Basic => "basic",
      CanonicalVariant::Extended => "extended",
    }
  }
}

impl std::fmt::Display for CanonicalVariant {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/* ---------------------------------------- */
/// Material that is maced: the request attributes concatenated without any delimiter
pub struct CanonicalString {
  value: String,
}

impl CanonicalString {
  /// Concatenate the attributes in the fixed order of the given variant
  pub fn build(
    variant: CanonicalVariant,
    method: &RequestMethod,
    path: &RequestPath,
    identity: &Identity,
    timestamp: &Timestamp,
    body_digest: &BodyDigest,
  ) -> Self {
    let parts = match variant {
      CanonicalVariant::Basic => vec![identity.as_str(), timestamp.as_str(), body_digest.as_str()],
      CanonicalVariant::Extended => vec![
        method.as_str(),
        path.as_str(),
        identity.as_str(),
        timestamp.as_str(),
        body_digest.as_str(),
      ],
    };
    Self { value: parts.concat() }
  }

  /// Returns the canonical string as bytes to be signed
  pub fn as_bytes(&self) -> &[u8] {
    self.value.as_bytes()
  }
}

impl std::fmt::Display for CanonicalString {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.value)
  }
}
