use crate::{
  canonical::CanonicalString,
  config::VerifierConfig,
  crypto::{SharedSecret, VerifyingKey},
  error::{GameOnSigError, GameOnSigResult},
  headers::SignatureHeaders,
  message_component::{Identity, RequestMethod, RequestPath, Timestamp},
  trace::*,
};
use chrono::{DateTime, Utc};

/* ---------------------------------------- */
#[derive(Debug, Clone)]
/// A request whose gameon headers were accepted
pub struct Verified {
  pub identity: Identity,
  pub timestamp: Timestamp,
}

/* ---------------------------------------- */
#[derive(Debug, Clone)]
/// Checks gameon headers of received requests for one identity.
/// No replay cache is kept: a request replayed within the tolerance window verifies again.
pub struct RequestVerifier {
  identity: Identity,
  secret: SharedSecret,
  config: VerifierConfig,
}

impl RequestVerifier {
  pub fn new(identity: Identity, secret: SharedSecret, config: &VerifierConfig) -> Self {
    Self {
      identity,
      secret,
      config: config.clone(),
    }
  }

  pub fn config(&self) -> &VerifierConfig {
    &self.config
  }

  /// Verify against the current time
  pub fn verify(
    &self,
    method: &RequestMethod,
    path: &RequestPath,
    body: &[u8],
    headers: &SignatureHeaders,
  ) -> GameOnSigResult<Verified> {
    self.verify_at(&Utc::now(), method, path, body, headers)
  }

  /// Verify against the given time
  pub fn verify_at(
    &self,
    now: &DateTime<Utc>,
    method: &RequestMethod,
    path: &RequestPath,
    body: &[u8],
    headers: &SignatureHeaders,
  ) -> GameOnSigResult<Verified> {
    let res = self.verify_inner(now, method, path, body, headers);
    if let Err(e) = &res {
      warn!("Rejected {} {} (key id {}): {}", method, path, self.secret.key_id(), e);
    }
    res
  }

  fn verify_inner(
    &self,
    now: &DateTime<Utc>,
    method: &RequestMethod,
    path: &RequestPath,
    body: &[u8],
    headers: &SignatureHeaders,
  ) -> GameOnSigResult<Verified> {
    let identity = headers.identity()?;
    if identity != self.identity {
      return Err(GameOnSigError::IdentityMismatch(format!(
        "expected {}, got {}",
        self.identity, identity
      )));
    }

    let body_digest = headers.body_digest()?;
    if !body_digest.matches(body) {
      return Err(GameOnSigError::BodyDigestMismatch(
        "gameon-sig-body does not match the received body".to_string(),
      ));
    }

    let timestamp = headers.timestamp()?;
    if !timestamp.is_within(now, self.config.tolerance) {
      return Err(GameOnSigError::StaleTimestamp(format!(
        "{} is more than {}s away from {}",
        timestamp,
        self.config.tolerance.as_secs(),
        Timestamp::from_instant(*now)
      )));
    }

    let signature = headers.signature()?;
    let canonical = CanonicalString::build(self.config.variant, method, path, &identity, &timestamp, &body_digest);
    self.secret.verify(canonical.as_bytes(), &signature.to_bytes()?)?;

    debug!("Verified {} {} for {} at {}", method, path, identity, timestamp);
    Ok(Verified { identity, timestamp })
  }
}
