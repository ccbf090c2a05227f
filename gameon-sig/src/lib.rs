//! # gameon-sig
//!
//! Signed requests for gameon services. A request is authenticated by four headers:
//! `gameon-id`, `gameon-date`, `gameon-sig-body` (sha-256 of the body) and `gameon-signature`
//! (hmac-sha256 over the concatenated request attributes, keyed by the shared secret).
//!
//! The crate is transport agnostic. [`prelude::RequestSigner`] yields the header set and the
//! caller attaches it to whatever http client it uses. [`prelude::RequestVerifier`] checks a
//! received header set on the server side.

mod canonical;
mod config;
mod crypto;
mod digest;
mod error;
mod headers;
mod message_component;
mod signer;
mod trace;
mod util;
mod verifier;

pub mod prelude {
  pub mod message_component {
    pub use crate::message_component::{Identity, RequestMethod, RequestPath, Timestamp};
  }

  pub use crate::{
    canonical::{CanonicalString, CanonicalVariant},
    config::{ReadRequestPolicy, SignerConfig, VerifierConfig},
    crypto::{AlgorithmName, SharedSecret, SigningKey, VerifyingKey},
    digest::{digest, digest_concat, BodyDigest},
    error::{GameOnSigError, GameOnSigResult},
    headers::{GameOnHeaderName, SignatureHeaders},
    signer::{RequestSigner, Signature, SignatureOutput, SignedRequest},
    verifier::{RequestVerifier, Verified},
  };
}

/* ----------------------------------------------------------------- */
