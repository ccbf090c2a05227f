use crate::error::{GameOnSigError, GameOnSigResult};
use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use std::time::Duration;

/* ---------------------------------------------------------------- */
#[derive(Debug, Clone, PartialEq, Eq)]
/// Moment of signing, carried in `gameon-date`.
///
/// The rendered text is what gets signed, so a timestamp parsed from a received header keeps the
/// exact text it was given instead of re-rendering the instant.
pub struct Timestamp {
  instant: DateTime<Utc>,
  rendered: String,
}

impl Timestamp {
  /// Read the clock. Callers must read it once per request and reuse the value.
  pub fn now() -> Self {
    Self::from_instant(Utc::now())
  }

  /// Render an instant as ISO-8601 in UTC with a `Z` suffix, e.g., `2016-05-03T10:15:30.123Z`.
  /// Fractional seconds are printed with 0, 3, 6 or 9 digits, whichever is exact.
  pub fn from_instant(instant: DateTime<Utc>) -> Self {
    let rendered = instant.to_rfc3339_opts(SecondsFormat::AutoSi, true);
    Self { instant, rendered }
  }

  /// Parse a received `gameon-date` value
  pub fn parse(value: &str) -> GameOnSigResult<Self> {
    let instant = DateTime::parse_from_rfc3339(value)
      .map_err(|e| GameOnSigError::InvalidTimestamp(format!("{value:?}: {e}")))?
      .with_timezone(&Utc);
    Ok(Self {
      instant,
      rendered: value.to_string(),
    })
  }

  pub fn instant(&self) -> &DateTime<Utc> {
    &self.instant
  }

  pub fn as_str(&self) -> &str {
    &self.rendered
  }

  /// Check whether this timestamp lies within `tolerance` of `now`, in either direction
  pub fn is_within(&self, now: &DateTime<Utc>, tolerance: Duration) -> bool {
    let skew = now.signed_duration_since(self.instant).abs();
    // a tolerance beyond the TimeDelta range admits every skew
    TimeDelta::from_std(tolerance).map_or(true, |tolerance| skew <= tolerance)
  }
}

impl std::fmt::Display for Timestamp {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.rendered)
  }
}
