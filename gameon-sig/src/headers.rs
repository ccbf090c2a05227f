use crate::{
  digest::BodyDigest,
  error::{GameOnSigError, GameOnSigResult},
  message_component::{Identity, Timestamp},
  signer::Signature,
  util::is_single_line,
};
use indexmap::IndexMap;

/* ---------------------------------------- */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The fixed set of headers carrying a signed request, in emission order
pub enum GameOnHeaderName {
  /// `gameon-id`
  Id,
  /// `gameon-date`
  Date,
  /// `gameon-sig-body`
  SigBody,
  /// `gameon-signature`
  Signature,
}

impl GameOnHeaderName {
  pub const ALL: [GameOnHeaderName; 4] = [Self::Id, Self::Date, Self::SigBody, Self::Signature];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Id => "gameon-id",
      Self::Date => "gameon-date",
      Self::SigBody => "gameon-sig-body",
      Self::Signature => "gameon-signature",
    }
  }
}

impl std::fmt::Display for GameOnHeaderName {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl core::str::FromStr for GameOnHeaderName {
  type Err = GameOnSigError;

  /// Header names are matched case-insensitively as usual in http
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|name| name.as_str().eq_ignore_ascii_case(s))
      .ok_or_else(|| GameOnSigError::MissingHeader(format!("not a gameon header: {s}")))
  }
}

/* ---------------------------------------- */
#[derive(Debug, Clone, PartialEq, Eq)]
/// Ordered header name to value map attached to a signed request.
/// Each name is written at most once and every value is a single line.
pub struct SignatureHeaders {
  inner: IndexMap<GameOnHeaderName, String>,
}

impl SignatureHeaders {
  /// Map already computed values into the fixed header names. No computation happens here.
  pub fn build(identity: &Identity, timestamp: &Timestamp, body_digest: &BodyDigest, signature: &Signature) -> Self {
    let inner = IndexMap::from([
      (GameOnHeaderName::Id, identity.to_string()),
      (GameOnHeaderName::Date, timestamp.to_string()),
      (GameOnHeaderName::SigBody, body_digest.to_string()),
      (GameOnHeaderName::Signature, signature.to_string()),
    ]);
    Self { inner }
  }

  /// Collect the gameon headers out of received `(name, value)` pairs.
  /// Unrelated headers are skipped. A repeated gameon header or a multi-line value is an error, and all four must be present.
  pub fn try_from_pairs<I, N, V>(pairs: I) -> GameOnSigResult<Self>
  where
    I: IntoIterator<Item = (N, V)>,
    N: AsRef<str>,
    V: AsRef<str>,
  {
    let mut received = IndexMap::with_capacity(GameOnHeaderName::ALL.len());
    for (name, value) in pairs {
      let value = value.as_ref();
      let Ok(name) = name.as_ref().parse::<GameOnHeaderName>() else {
        continue;
      };
      if received.contains_key(&name) {
        return Err(GameOnSigError::DuplicateHeader(name.to_string()));
      }
      if !is_single_line(value) {
        return Err(GameOnSigError::InvalidHeaderValue(format!("{name}: {value:?}")));
      }
      received.insert(name, value.trim().to_string());
    }
    // rebuild in emission order regardless of the order received
    let inner = GameOnHeaderName::ALL
      .into_iter()
      .map(|name| {
        received
          .swap_remove(&name)
          .map(|value| (name, value))
          .ok_or_else(|| GameOnSigError::MissingHeader(name.to_string()))
      })
      .collect::<GameOnSigResult<IndexMap<_, _>>>()?;
    Ok(Self { inner })
  }

  pub fn get(&self, name: GameOnHeaderName) -> Option<&str> {
    self.inner.get(&name).map(|v| v.as_str())
  }

  /// Iterate `(name, value)` pairs in emission order, for the transport to attach
  pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
    self.inner.iter().map(|(name, value)| (name.as_str(), value.as_str()))
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  fn required(&self, name: GameOnHeaderName) -> GameOnSigResult<&str> {
    self
      .get(name)
      .ok_or_else(|| GameOnSigError::MissingHeader(name.to_string()))
  }

  /// `gameon-id` as an identity
  pub fn identity(&self) -> GameOnSigResult<Identity> {
    Identity::try_new(self.required(GameOnHeaderName::Id)?)
  }

  /// `gameon-date` as a timestamp, keeping the received text
  pub fn timestamp(&self) -> GameOnSigResult<Timestamp> {
    Timestamp::parse(self.required(GameOnHeaderName::Date)?)
  }

  /// `gameon-sig-body` as a body digest
  pub fn body_digest(&self) -> GameOnSigResult<BodyDigest> {
    BodyDigest::try_from_base64(self.required(GameOnHeaderName::SigBody)?)
  }

  /// `gameon-signature` as a signature
  pub fn signature(&self) -> GameOnSigResult<Signature> {
    Signature::try_from_base64(self.required(GameOnHeaderName::Signature)?)
  }
}

impl<'a> IntoIterator for &'a SignatureHeaders {
  type Item = (&'static str, &'a str);
  type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

  fn into_iter(self) -> Self::IntoIter {
    Box::new(self.iter())
  }
}
