use crate::{
  canonical::CanonicalVariant,
  error::{GameOnSigError, GameOnSigResult},
};
use std::time::Duration;

/// Default tolerance between `gameon-date` and the moment of verification
const DEFAULT_TOLERANCE_SECS: u64 = 300;

/* ---------------------------------------- */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Whether retrieval requests (GET, HEAD) carry a signature
pub enum ReadRequestPolicy {
  /// Every verb is signed uniformly
  #[default]
  SignAll,
  /// Read-only verbs are sent without gameon headers. Only valid with [`CanonicalVariant::Basic`].
  ExemptReads,
}

/* ---------------------------------------- */
#[derive(Debug, Clone, Default)]
/// Signer configuration, fixed for the lifetime of a signer
pub struct SignerConfig {
  /// canonical string layout
  pub variant: CanonicalVariant,
  /// treatment of read-only requests
  pub read_request_policy: ReadRequestPolicy,
}

impl SignerConfig {
  /// Set the canonical string layout
  pub fn set_variant(&mut self, variant: CanonicalVariant) -> &mut Self {
    self.variant = variant;
    self
  }

  /// Set the treatment of read-only requests
  pub fn set_read_request_policy(&mut self, policy: ReadRequestPolicy) -> &mut Self {
    self.read_request_policy = policy;
    self
  }

  /// Exempting reads is only defined for the basic layout. The extended layout signs every verb.
  pub fn validate(&self) -> GameOnSigResult<()> {
    if self.variant == CanonicalVariant::Extended && self.read_request_policy == ReadRequestPolicy::ExemptReads {
      return Err(GameOnSigError::InvalidSigningConfig(
        "read requests cannot be exempted with the extended canonical variant".to_string(),
      ));
    }
    Ok(())
  }
}

/* ---------------------------------------- */
#[derive(Debug, Clone)]
/// Verifier configuration
pub struct VerifierConfig {
  /// canonical string layout, must match the signer's
  pub variant: CanonicalVariant,
  /// accepted distance between `gameon-date` and now, in either direction
  pub tolerance: Duration,
}

impl Default for VerifierConfig {
  fn default() -> Self {
    Self {
      variant: CanonicalVariant::default(),
      tolerance: Duration::from_secs(DEFAULT_TOLERANCE_SECS),
    }
  }
}

impl VerifierConfig {
  /// Set the canonical string layout
  pub fn set_variant(&mut self, variant: CanonicalVariant) -> &mut Self {
    self.variant = variant;
    self
  }

  /// Set the replay window
  pub fn set_tolerance(&mut self, tolerance: Duration) -> &mut Self {
    self.tolerance = tolerance;
    self
  }
}
