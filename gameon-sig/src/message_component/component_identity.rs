use crate::{
  error::{GameOnSigError, GameOnSigResult},
  util::is_single_line,
};

/* ---------------------------------------------------------------- */
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Public id of the caller, carried in `gameon-id`. The verifier looks up the shared secret with it.
pub struct Identity(String);

impl Identity {
  pub fn try_new(id: &str) -> GameOnSigResult<Self> {
    if id.is_empty() {
      return Err(GameOnSigError::InvalidIdentity("identity must not be empty".to_string()));
    }
    if id.trim() != id {
      return Err(GameOnSigError::InvalidIdentity(format!(
        "identity must not have surrounding whitespace: {id:?}"
      )));
    }
    if !is_single_line(id) {
      return Err(GameOnSigError::InvalidIdentity(format!(
        "identity must not contain control characters: {id:?}"
      )));
    }
    Ok(Self(id.to_string()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl TryFrom<&str> for Identity {
  type Error = GameOnSigError;
  fn try_from(value: &str) -> GameOnSigResult<Self> {
    Self::try_new(value)
  }
}

impl std::fmt::Display for Identity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn identity() {
    assert_eq!(Identity::try_from("id").unwrap().as_str(), "id");
    assert!(Identity::try_from("").is_err());
    assert!(Identity::try_from("id\nforged: yes").is_err());
  }

  #[test]
  fn surrounding_whitespace_is_refused() {
    // received header values are trimmed
    for id in [" id", "id ", " ", "\tid"] {
      assert!(matches!(Identity::try_from(id), Err(GameOnSigError::InvalidIdentity(_))));
    }
    assert!(Identity::try_from("room owner").is_ok());
  }
}
