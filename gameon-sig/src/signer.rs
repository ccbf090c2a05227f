use crate::{
  canonical::CanonicalString,
  config::{ReadRequestPolicy, SignerConfig},
  crypto::{SharedSecret, SigningKey},
  digest::BodyDigest,
  error::{GameOnSigError, GameOnSigResult},
  headers::SignatureHeaders,
  message_component::{Identity, RequestMethod, RequestPath, Timestamp},
  trace::*,
};
use base64::{engine::general_purpose, Engine as _};

/// Length of the raw hmac-sha256 output
const MAC_LEN: usize = 32;

/* ---------------------------------------- */
#[derive(Debug, Clone, PartialEq, Eq)]
/// Base64 encoded mac over the canonical string, carried in `gameon-signature`
pub struct Signature(String);

impl Signature {
  pub fn from_mac(mac: &[u8]) -> Self {
    Self(general_purpose::STANDARD.encode(mac))
  }

  /// Parse a received `gameon-signature` value
  pub fn try_from_base64(value: &str) -> GameOnSigResult<Self> {
    let raw = general_purpose::STANDARD.decode(value)?;
    if raw.len() != MAC_LEN {
      return Err(GameOnSigError::InvalidSignature(format!(
        "expected {MAC_LEN} bytes, got {}",
        raw.len()
      )));
    }
    Ok(Self(value.to_string()))
  }

  /// Raw mac bytes
  pub fn to_bytes(&self) -> GameOnSigResult<Vec<u8>> {
    Ok(general_purpose::STANDARD.decode(&self.0)?)
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl std::fmt::Display for Signature {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/* ---------------------------------------- */
#[derive(Debug, Clone)]
/// Result of one signing operation. `timestamp` is the value that was signed and must be emitted as is.
pub struct SignatureOutput {
  pub timestamp: Timestamp,
  pub signature: Signature,
}

#[derive(Debug, Clone)]
/// Outcome of signing a complete request
pub enum SignedRequest {
  /// Headers to attach to the outgoing request
  Signed(SignatureHeaders),
  /// Read-only request exempted by [`ReadRequestPolicy::ExemptReads`]
  Unsigned,
}

impl SignedRequest {
  pub fn headers(&self) -> Option<&SignatureHeaders> {
    match self {
      SignedRequest::Signed(headers) => Some(headers),
      SignedRequest::Unsigned => None,
    }
  }

  pub fn is_signed(&self) -> bool {
    matches!(self, SignedRequest::Signed(_))
  }
}

/* ---------------------------------------- */
#[derive(Debug, Clone)]
/// Signs requests on behalf of one identity with its shared secret.
/// Holds no mutable state, so one signer can be shared across threads.
pub struct RequestSigner {
  identity: Identity,
  secret: SharedSecret,
  config: SignerConfig,
}

impl RequestSigner {
  pub fn try_new(identity: Identity, secret: SharedSecret, config: &SignerConfig) -> GameOnSigResult<Self> {
    config.validate()?;
    Ok(Self {
      identity,
      secret,
      config: config.clone(),
    })
  }

  pub fn identity(&self) -> &Identity {
    &self.identity
  }

  pub fn config(&self) -> &SignerConfig {
    &self.config
  }

  /// Key id of the shared secret, for logging
  pub fn key_id(&self) -> String {
    self.secret.key_id()
  }

  /// Sign with the current time. The clock is read exactly once.
  pub fn sign(&self, method: &RequestMethod, path: &RequestPath, body_digest: &BodyDigest) -> GameOnSigResult<SignatureOutput> {
    self.sign_at(Timestamp::now(), method, path, body_digest)
  }

  /// Sign with the given timestamp
  pub fn sign_at(
    &self,
    timestamp: Timestamp,
    method: &RequestMethod,
    path: &RequestPath,
    body_digest: &BodyDigest,
  ) -> GameOnSigResult<SignatureOutput> {
    let canonical = CanonicalString::build(self.config.variant, method, path, &self.identity, &timestamp, body_digest);
    let mac = self.secret.sign(canonical.as_bytes())?;
    debug!(
      "Signed {} {} for {} at {} ({} variant, key id {})",
      method,
      path,
      self.identity,
      timestamp,
      self.config.variant,
      self.key_id()
    );
    Ok(SignatureOutput {
      timestamp,
      signature: Signature::from_mac(&mac),
    })
  }

  /// Digest the body, sign, and assemble the headers for a complete request
  pub fn sign_request(&self, method: &RequestMethod, path: &RequestPath, body: &[u8]) -> GameOnSigResult<SignedRequest> {
    self.sign_digested(method, path, &BodyDigest::from_bytes(body))
  }

  /// Same as [`RequestSigner::sign_request`] for a body that was already digested
  pub fn sign_digested(
    &self,
    method: &RequestMethod,
    path: &RequestPath,
    body_digest: &BodyDigest,
  ) -> GameOnSigResult<SignedRequest> {
    if method.is_read_only() && self.config.read_request_policy == ReadRequestPolicy::ExemptReads {
      debug!("Not signing read-only request {} {}", method, path);
      return Ok(SignedRequest::Unsigned);
    }
    let SignatureOutput { timestamp, signature } = self.sign(method, path, body_digest)?;
    Ok(SignedRequest::Signed(SignatureHeaders::build(
      &self.identity,
      &timestamp,
      body_digest,
      &signature,
    )))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{canonical::CanonicalVariant, digest::digest, headers::GameOnHeaderName};
  use hmac::{Hmac, Mac};

  const ID: &str = "id";
  const SECRET: &str = "secret";
  const SITES_PATH: &str = "/map/v1/sites";

  fn signer(variant: CanonicalVariant) -> RequestSigner {
    let mut config = SignerConfig::default();
    config.set_variant(variant);
    RequestSigner::try_new(
      Identity::try_from(ID).unwrap(),
      SharedSecret::from_utf8(SECRET).unwrap(),
      &config,
    )
    .unwrap()
  }

  fn method(m: &str) -> RequestMethod {
    RequestMethod::try_from(m).unwrap()
  }

  fn path(p: &str) -> RequestPath {
    RequestPath::try_from(p).unwrap()
  }

  /// Recompute the mac over the separator-free concatenation of `parts`
  fn expected_signature(secret: &str, parts: &[&str]) -> String {
    let mut mac = Hmac::<sha2::Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    parts.iter().for_each(|part| mac.update(part.as_bytes()));
    general_purpose::STANDARD.encode(mac.finalize().into_bytes())
  }

  #[test]
  fn round_trip_basic_variant() {
    let signer = signer(CanonicalVariant::Basic);
    let signed = signer.sign_request(&method("POST"), &path(SITES_PATH), b"{}").unwrap();
    let headers = signed.headers().unwrap();

    let body_hash = headers.get(GameOnHeaderName::SigBody).unwrap();
    assert_eq!(body_hash, digest("{}").as_str());
    assert_eq!(headers.get(GameOnHeaderName::Id), Some(ID));

    // the signature must match the emitted date, whatever it is
    let date = headers.get(GameOnHeaderName::Date).unwrap();
    let expected = expected_signature(SECRET, &[ID, date, body_hash]);
    assert_eq!(headers.get(GameOnHeaderName::Signature), Some(expected.as_str()));
  }

  #[test]
  fn round_trip_extended_variant() {
    let signer = signer(CanonicalVariant::Extended);
    let signed = signer.sign_request(&method("POST"), &path(SITES_PATH), b"{}").unwrap();
    let headers = signed.headers().unwrap();

    let body_hash = headers.get(GameOnHeaderName::SigBody).unwrap();
    let date = headers.get(GameOnHeaderName::Date).unwrap();
    let expected = expected_signature(SECRET, &["POST", SITES_PATH, ID, date, body_hash]);
    assert_eq!(headers.get(GameOnHeaderName::Signature), Some(expected.as_str()));
  }

  #[test]
  fn empty_body_is_digested() {
    let signer = signer(CanonicalVariant::Extended);
    let signed = signer.sign_request(&method("DELETE"), &path("/map/v1/sites/42"), b"").unwrap();
    let headers = signed.headers().unwrap();
    assert_eq!(
      headers.get(GameOnHeaderName::SigBody),
      Some("47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=")
    );
    assert_eq!(headers.len(), 4);
  }

  #[test]
  fn sign_at_is_deterministic() {
    let signer = signer(CanonicalVariant::Extended);
    let ts = Timestamp::parse("2016-05-03T10:15:30.123Z").unwrap();
    let body_digest = digest("{}");
    let first = signer
      .sign_at(ts.clone(), &method("POST"), &path(SITES_PATH), &body_digest)
      .unwrap();
    let second = signer
      .sign_at(ts.clone(), &method("POST"), &path(SITES_PATH), &body_digest)
      .unwrap();
    assert_eq!(first.signature, second.signature);
    assert_eq!(first.timestamp, ts);
    assert_eq!(
      first.signature.as_str(),
      expected_signature(SECRET, &["POST", SITES_PATH, ID, ts.as_str(), body_digest.as_str()])
    );
  }

  #[test]
  fn every_input_changes_the_signature() {
    let ts = Timestamp::parse("2016-05-03T10:15:30.123Z").unwrap();
    let sign = |id: &str, secret: &str, m: &str, p: &str, body: &str| {
      RequestSigner::try_new(
        Identity::try_from(id).unwrap(),
        SharedSecret::from_utf8(secret).unwrap(),
        &SignerConfig::default(),
      )
      .unwrap()
      .sign_at(ts.clone(), &method(m), &path(p), &digest(body))
      .unwrap()
      .signature
    };
    let base = sign(ID, SECRET, "POST", SITES_PATH, "{}");
    assert_ne!(base, sign("id2", SECRET, "POST", SITES_PATH, "{}"));
    assert_ne!(base, sign(ID, "secret2", "POST", SITES_PATH, "{}"));
    assert_ne!(base, sign(ID, SECRET, "PUT", SITES_PATH, "{}"));
    assert_ne!(base, sign(ID, SECRET, "POST", "/map/v1/sites/42", "{}"));
    assert_ne!(base, sign(ID, SECRET, "POST", SITES_PATH, "{ }"));
  }

  #[test]
  fn variants_are_not_interchangeable() {
    let ts = Timestamp::parse("2016-05-03T10:15:30.123Z").unwrap();
    let body_digest = digest("{}");
    let basic = signer(CanonicalVariant::Basic)
      .sign_at(ts.clone(), &method("POST"), &path(SITES_PATH), &body_digest)
      .unwrap();
    let extended = signer(CanonicalVariant::Extended)
      .sign_at(ts, &method("POST"), &path(SITES_PATH), &body_digest)
      .unwrap();
    assert_ne!(basic.signature, extended.signature);
  }

  #[test]
  fn secret_never_leaves_the_signer() {
    const DISTINCT_SECRET: &str = "dingdong";
    let signer = RequestSigner::try_new(
      Identity::try_from(ID).unwrap(),
      SharedSecret::from_utf8(DISTINCT_SECRET).unwrap(),
      &SignerConfig::default(),
    )
    .unwrap();
    let ts = Timestamp::parse("2016-05-03T10:15:30.123Z").unwrap();
    let canonical = CanonicalString::build(
      CanonicalVariant::Extended,
      &method("POST"),
      &path(SITES_PATH),
      signer.identity(),
      &ts,
      &digest("{}"),
    );
    assert!(!canonical.to_string().contains(DISTINCT_SECRET));

    let signed = signer.sign_request(&method("POST"), &path(SITES_PATH), b"{}").unwrap();
    assert!(signed.headers().unwrap().iter().all(|(_, v)| !v.contains(DISTINCT_SECRET)));
    let debugged = format!("{signer:?}");
    assert!(!debugged.contains(DISTINCT_SECRET));
    assert!(debugged.contains(&signer.key_id()));
  }

  #[test]
  fn back_to_back_requests_differ() {
    let signer = signer(CanonicalVariant::Extended);
    let first = signer.sign_request(&method("POST"), &path(SITES_PATH), b"{}").unwrap();
    std::thread::sleep(std::time::Duration::from_millis(2));
    let second = signer.sign_request(&method("POST"), &path(SITES_PATH), b"{}").unwrap();
    let (first, second) = (first.headers().unwrap(), second.headers().unwrap());

    let first_date = first.timestamp().unwrap();
    let second_date = second.timestamp().unwrap();
    assert!(first_date.instant() < second_date.instant());
    assert_ne!(first_date.as_str(), second_date.as_str());
    assert_ne!(first.get(GameOnHeaderName::Signature), second.get(GameOnHeaderName::Signature));
    assert_eq!(first.get(GameOnHeaderName::SigBody), second.get(GameOnHeaderName::SigBody));
  }

  #[test]
  fn read_request_policy() {
    let mut config = SignerConfig::default();
    config
      .set_variant(CanonicalVariant::Basic)
      .set_read_request_policy(ReadRequestPolicy::ExemptReads);
    let exempting = RequestSigner::try_new(
      Identity::try_from(ID).unwrap(),
      SharedSecret::from_utf8(SECRET).unwrap(),
      &config,
    )
    .unwrap();
    let get = exempting.sign_request(&method("GET"), &path("/map/v1/sites/42"), b"").unwrap();
    assert!(!get.is_signed());
    assert!(get.headers().is_none());
    let delete = exempting.sign_request(&method("DELETE"), &path("/map/v1/sites/42"), b"").unwrap();
    assert!(delete.is_signed());

    // all verbs are signed by default
    let signing_all = signer(CanonicalVariant::Extended);
    let get = signing_all
      .sign_request(&method("GET"), &path("/map/v1/sites/42"), b"")
      .unwrap();
    assert!(get.is_signed());

    config.set_variant(CanonicalVariant::Extended);
    assert!(matches!(
      RequestSigner::try_new(
        Identity::try_from(ID).unwrap(),
        SharedSecret::from_utf8(SECRET).unwrap(),
        &config
      ),
      Err(GameOnSigError::InvalidSigningConfig(_))
    ));
  }

  #[test]
  fn signature_parse() {
    let signature = Signature::from_mac(&[7u8; MAC_LEN]);
    let parsed = Signature::try_from_base64(signature.as_str()).unwrap();
    assert_eq!(parsed.to_bytes().unwrap(), vec![7u8; MAC_LEN]);
    assert!(Signature::try_from_base64("aGVsbG8=").is_err());
  }
}
