use bytes::{Buf, Bytes};
use gameon_sig::prelude::BodyDigest;
use http_body_util::BodyExt;
use std::future::Future;

/* --------------------------------------- */
/// Collect an http body and digest it for `gameon-sig-body`
pub trait BodyDigestExt: http_body::Body {
  /// Returns the bytes object of the body
  fn into_bytes(self) -> impl Future<Output = Result<Bytes, Self::Error>> + Send
  where
    Self: Sized + Send,
    Self::Data: Send,
  {
    async {
      let mut body_buf = self.collect().await?.aggregate();
      Ok(body_buf.copy_to_bytes(body_buf.remaining()))
    }
  }

  /// Returns the body bytes together with their digest. An empty body yields the digest of the empty sequence.
  fn into_bytes_with_digest(self) -> impl Future<Output = Result<(Bytes, BodyDigest), Self::Error>> + Send
  where
    Self: Sized + Send,
    Self::Data: Send,
  {
    async move {
      let body_bytes = self.into_bytes().await?;
      let digest = BodyDigest::from_bytes(&body_bytes);
      Ok((body_bytes, digest))
    }
  }
}

impl<T: ?Sized> BodyDigestExt for T where T: http_body::Body {}

/* --------------------------------------- */
