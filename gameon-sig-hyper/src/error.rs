use gameon_sig::prelude::GameOnSigError;
use thiserror::Error;

/// Result type for gameon request signatures on http messages
pub type HyperSigResult<T> = std::result::Result<T, HyperSigError>;

/// Error type for gameon request signatures on http messages
#[derive(Error, Debug)]
pub enum HyperSigError {
  /// No gameon headers found
  #[error("No signature headers found: {0}")]
  NoSignatureHeaders(String),

  /// Http body error
  #[error("Http body error: {0}")]
  HttpBodyError(String),

  /// Failed to read header value as a string
  #[error("Failed to stringify signature headers: {0}")]
  FailedToStrSignatureHeaders(#[from] http::header::ToStrError),

  /// Failed to parse header value
  #[error("Failed to parse header value: {0}")]
  InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

  /// Inherited from GameOnSigError
  #[error("GameOnSigError: {0}")]
  GameOnSigError(#[from] GameOnSigError),
}
