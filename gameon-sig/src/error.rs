use thiserror::Error;

/// Result type for gameon request signatures
pub type GameOnSigResult<T> = std::result::Result<T, GameOnSigError>;

/// Error type for gameon request signatures
#[derive(Error, Debug)]
pub enum GameOnSigError {
  #[error("Base64 decode error: {0}")]
  Base64DecodeError(#[from] base64::DecodeError),

  /* ----- Configuration errors ----- */
  /// Identity is empty or cannot be carried in a header
  #[error("Invalid identity: {0}")]
  InvalidIdentity(String),
  /// Shared secret rejected by policy or by the mac primitive
  #[error("Invalid shared secret: {0}")]
  InvalidSecret(String),
  /// Inconsistent signer or verifier configuration
  #[error("Invalid signing config: {0}")]
  InvalidSigningConfig(String),

  /* ----- Encoding errors ----- */
  /// Method is not a valid http token
  #[error("Invalid method: {0}")]
  InvalidMethod(String),
  /// Path is not an absolute single-line path
  #[error("Invalid path: {0}")]
  InvalidPath(String),
  /// Timestamp is not an ISO-8601 instant
  #[error("Invalid timestamp: {0}")]
  InvalidTimestamp(String),
  /// Body digest has an unexpected length or encoding
  #[error("Invalid body digest: {0}")]
  InvalidBodyDigest(String),
  /// Header value cannot be emitted on a single line
  #[error("Invalid header value: {0}")]
  InvalidHeaderValue(String),

  /* ----- Header set errors ----- */
  /// Same gameon header given twice
  #[error("Duplicate header: {0}")]
  DuplicateHeader(String),
  /// Required gameon header not found
  #[error("Missing header: {0}")]
  MissingHeader(String),

  /* ----- Verification errors ----- */
  /// `gameon-id` does not match the identity the secret belongs to
  #[error("Identity mismatch: {0}")]
  IdentityMismatch(String),
  /// `gameon-sig-body` does not match the received body
  #[error("Body digest mismatch: {0}")]
  BodyDigestMismatch(String),
  /// `gameon-date` is outside the tolerance window
  #[error("Stale timestamp: {0}")]
  StaleTimestamp(String),
  /// Invalid Signature
  #[error("Invalid Signature: {0}")]
  InvalidSignature(String),
}
