use crate::{
  error::{HyperSigError, HyperSigResult},
  hyper_body_digest::BodyDigestExt,
  trace::*,
};
use bytes::Bytes;
use gameon_sig::prelude::{
  message_component::{RequestMethod, RequestPath},
  GameOnHeaderName, RequestSigner, RequestVerifier, SignatureHeaders, SignedRequest, Verified,
};
use http::{header::HeaderValue, HeaderMap, Request};
use http_body::Body;
use http_body_util::Full;
use std::future::Future;

/* --------------------------------------- */
/// A trait about gameon request signatures on http requests
pub trait RequestSignature {
  type Error;

  /// Check if the request carries any gameon header
  fn has_gameon_signature(&self) -> bool;

  /// Collect the body, sign the request with its method and path, and set the gameon headers.
  /// Existing gameon headers are replaced. The body is returned buffered.
  fn set_gameon_signature(
    self,
    signer: &RequestSigner,
  ) -> impl Future<Output = Result<Request<Full<Bytes>>, Self::Error>> + Send
  where
    Self: Sized;

  /// Collect the body and verify the gameon headers against it
  fn verify_gameon_signature(self, verifier: &RequestVerifier) -> impl Future<Output = Result<Verified, Self::Error>> + Send
  where
    Self: Sized;

  /// Extract the gameon headers
  fn extract_gameon_headers(&self) -> Result<SignatureHeaders, Self::Error>;
}

/* --------------------------------------- */
#[cfg(feature = "blocking")]
/// Synchronous counterpart of [`RequestSignature`].
///
/// Every method delegates to the corresponding async method via `futures::executor::block_on`.
///
/// # Panics
///
/// All methods will panic if called from within an async runtime (e.g. a `tokio` task).
/// Use the async [`RequestSignature`] methods instead when you are already in an async context.
pub trait RequestSignatureSync: RequestSignature {
  fn set_gameon_signature_sync(self, signer: &RequestSigner) -> Result<Request<Full<Bytes>>, Self::Error>
  where
    Self: Sized;

  fn verify_gameon_signature_sync(self, verifier: &RequestVerifier) -> Result<Verified, Self::Error>
  where
    Self: Sized;
}

/* --------------------------------------- */
impl<B> RequestSignature for Request<B>
where
  B: Body + Send,
  <B as Body>::Data: Send,
{
  type Error = HyperSigError;

  fn has_gameon_signature(&self) -> bool {
    GameOnHeaderName::ALL
      .iter()
      .any(|name| self.headers().contains_key(name.as_str()))
  }

  async fn set_gameon_signature(self, signer: &RequestSigner) -> HyperSigResult<Request<Full<Bytes>>>
  where
    Self: Sized,
  {
    let (mut parts, body) = self.into_parts();
    let method = RequestMethod::try_from(parts.method.as_str())?;
    let path = RequestPath::try_from(parts.uri.path())?;
    let (body_bytes, body_digest) = body
      .into_bytes_with_digest()
      .await
      .map_err(|_e| HyperSigError::HttpBodyError("Failed to collect body".to_string()))?;

    match signer.sign_digested(&method, &path, &body_digest)? {
      SignedRequest::Signed(headers) => set_signature_headers(&mut parts.headers, &headers)?,
      SignedRequest::Unsigned => {
        debug!("Sending {} {} without gameon headers", method, path);
      }
    }

    Ok(Request::from_parts(parts, Full::new(body_bytes)))
  }

  async fn verify_gameon_signature(self, verifier: &RequestVerifier) -> HyperSigResult<Verified>
  where
    Self: Sized,
  {
    if !self.has_gameon_signature() {
      return Err(HyperSigError::NoSignatureHeaders(
        "The request does not have gameon headers".to_string(),
      ));
    }
    let headers = self.extract_gameon_headers()?;
    let method = RequestMethod::try_from(self.method().as_str())?;
    let path = RequestPath::try_from(self.uri().path())?;

    let (_, body) = self.into_parts();
    let body_bytes = body
      .into_bytes()
      .await
      .map_err(|_e| HyperSigError::HttpBodyError("Failed to collect body".to_string()))?;

    Ok(verifier.verify(&method, &path, &body_bytes, &headers)?)
  }

  fn extract_gameon_headers(&self) -> HyperSigResult<SignatureHeaders> {
    let pairs = GameOnHeaderName::ALL
      .iter()
      .flat_map(|name| {
        self
          .headers()
          .get_all(name.as_str())
          .iter()
          .map(move |value| value.to_str().map(|value| (name.as_str(), value)))
      })
      .collect::<Result<Vec<_>, _>>()?;
    Ok(SignatureHeaders::try_from_pairs(pairs)?)
  }
}

#[cfg(feature = "blocking")]
impl<B> RequestSignatureSync for Request<B>
where
  B: Body + Send,
  <B as Body>::Data: Send,
{
  fn set_gameon_signature_sync(self, signer: &RequestSigner) -> HyperSigResult<Request<Full<Bytes>>> {
    futures::executor::block_on(self.set_gameon_signature(signer))
  }

  fn verify_gameon_signature_sync(self, verifier: &RequestVerifier) -> HyperSigResult<Verified> {
    futures::executor::block_on(self.verify_gameon_signature(verifier))
  }
}

/* --------------------------------------- */
/// Write the header set into the header map, replacing any previous gameon header
fn set_signature_headers(header_map: &mut HeaderMap, headers: &SignatureHeaders) -> HyperSigResult<()> {
  headers.iter().try_for_each(|(name, value)| {
    header_map.insert(name, HeaderValue::from_str(value)?);
    Ok(()) as HyperSigResult<()>
  })
}

/* --------------------------------------- */
