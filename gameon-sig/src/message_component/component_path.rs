use crate::{
  error::{GameOnSigError, GameOnSigResult},
  util::is_single_line,
};

/* ---------------------------------------------------------------- */
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Absolute resource path of the signed request, e.g., `/map/v1/sites/42`. Signed verbatim.
pub struct RequestPath(String);

impl RequestPath {
  pub fn try_new(path: &str) -> GameOnSigResult<Self> {
    if !path.starts_with('/') {
      return Err(GameOnSigError::InvalidPath(format!("path must start with '/': {path:?}")));
    }
    if !is_single_line(path) {
      return Err(GameOnSigError::InvalidPath(format!(
        "path must not contain control characters: {path:?}"
      )));
    }
    Ok(Self(path.to_string()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl TryFrom<&str> for RequestPath {
  type Error = GameOnSigError;
  fn try_from(value: &str) -> GameOnSigResult<Self> {
    Self::try_new(value)
  }
}

impl std::fmt::Display for RequestPath {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}
