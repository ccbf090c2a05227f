//! # gameon-sig-hyper
//!
//! `gameon-sig-hyper` attaches and verifies gameon request signatures on `http::Request` values,
//! so hyper (or any client built on the `http` crate) can send signed requests.
//! The body is collected to compute `gameon-sig-body`; method and path are read from the request.
//!
//! ## Blocking API
//!
//! The `blocking` feature (default) adds [`RequestSignatureSync`], which drives the async methods
//! with `futures::executor::block_on` for callers without a runtime, e.g. a command line registration tool.
//!
//! # Panics
//!
//! The `*_sync` methods panic when called inside an async runtime. Use the async methods there.

mod error;
mod hyper_body_digest;
mod hyper_http;
mod trace;

pub use error::{HyperSigError, HyperSigResult};
pub use gameon_sig::prelude;
pub use hyper_body_digest::BodyDigestExt;
pub use hyper_http::RequestSignature;
#[cfg(feature = "blocking")]
pub use hyper_http::RequestSignatureSync;

/* ----------------------------------------------------------------- */
#[cfg(test)]
mod tests {
  use super::{prelude::*, *};
  use bytes::Bytes;
  use gameon_sig::prelude::message_component::Identity;
  use http::Request;
  use http_body_util::Full;

  type BoxBody = http_body_util::combinators::BoxBody<Bytes, std::convert::Infallible>;

  const GAMEON_ID: &str = "123";
  const GAMEON_SECRET: &str = "dingdong";

  const ROOM_REGISTRATION: &str = r##"{"name":"roomShortname","fullName":"Longer room name","connectionDetails":{"type":"websocket","target":"ws://127.0.0.1:9080/rooms/myRoom"}}"##;

  fn build_request(method: &str, uri: &str, body: &'static str) -> Request<BoxBody> {
    use http_body_util::BodyExt;
    Request::builder()
      .method(method)
      .uri(uri)
      .header("content-type", "application/json;")
      .header("accept", "application/json,text/plain")
      .body(Full::new(Bytes::from_static(body.as_bytes())).boxed())
      .unwrap()
  }

  fn build_signer() -> RequestSigner {
    RequestSigner::try_new(
      Identity::try_from(GAMEON_ID).unwrap(),
      SharedSecret::from_utf8(GAMEON_SECRET).unwrap(),
      &SignerConfig::default(),
    )
    .unwrap()
  }

  fn build_verifier() -> RequestVerifier {
    RequestVerifier::new(
      Identity::try_from(GAMEON_ID).unwrap(),
      SharedSecret::from_utf8(GAMEON_SECRET).unwrap(),
      &VerifierConfig::default(),
    )
  }

  #[tokio::test]
  async fn test_set_verify_request() {
    // register, update, delete and fetch a room as the registration utility does
    let requests = [
      ("POST", "https://game-on.org/map/v1/sites", ROOM_REGISTRATION),
      ("PUT", "https://game-on.org/map/v1/sites/42", ROOM_REGISTRATION),
      ("DELETE", "https://game-on.org/map/v1/sites/42", ""),
      ("GET", "https://game-on.org/map/v1/sites/42", ""),
    ];
    let signer = build_signer();
    let verifier = build_verifier();
    for (method, uri, body) in requests {
      let req = build_request(method, uri, body)
        .set_gameon_signature(&signer)
        .await
        .unwrap();
      assert!(req.has_gameon_signature());
      assert_eq!(req.headers().get("gameon-sig-body").unwrap(), digest(body).as_str());
      let verified = req.verify_gameon_signature(&verifier).await.unwrap();
      assert_eq!(verified.identity.as_str(), GAMEON_ID);
    }
  }

  #[cfg(feature = "blocking")]
  #[test]
  fn test_set_verify_request_sync() {
    let req = build_request("POST", "https://game-on.org/map/v1/sites", ROOM_REGISTRATION);
    let req = req.set_gameon_signature_sync(&build_signer()).unwrap();
    let verification_res = req.verify_gameon_signature_sync(&build_verifier());
    assert!(verification_res.is_ok());
  }
}
