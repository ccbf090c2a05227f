use crate::{
  error::{GameOnSigError, GameOnSigResult},
  util::is_token,
};

/* ---------------------------------------------------------------- */
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Http method of the signed request, normalized to upper case
pub struct RequestMethod(String);

impl RequestMethod {
  pub const GET: &'static str = "GET";
  pub const HEAD: &'static str = "HEAD";

  pub fn try_new(method: &str) -> GameOnSigResult<Self> {
    if !is_token(method) {
      return Err(GameOnSigError::InvalidMethod(format!("not an http token: {method:?}")));
    }
    Ok(Self(method.to_ascii_uppercase()))
  }

  /// Retrieval verbs that never carry a body
  pub fn is_read_only(&self) -> bool {
    matches!(self.0.as_str(), Self::GET | Self::HEAD)
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl TryFrom<&str> for RequestMethod {
  type Error = GameOnSigError;
  fn try_from(value: &str) -> GameOnSigResult<Self> {
    Self::try_new(value)
  }
}

impl std::fmt::Display for RequestMethod {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}
