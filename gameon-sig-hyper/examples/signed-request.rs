use bytes::Bytes;
use gameon_sig_hyper::{prelude::*, *};
use http::Request;
use http_body_util::{BodyExt, Empty, Full};

type BoxBody = http_body_util::combinators::BoxBody<Bytes, std::convert::Infallible>;

const GAMEON_ID: &str = "123";
const GAMEON_SECRET: &str = "dingdong";
const MAP_SERVICE: &str = "https://game-on.org/map/v1/sites";

const ROOM_REGISTRATION: &str = r##"{
  "name":"roomShortname",
  "fullName":"Longer room name",
  "description":"Boring default room description.",
  "doors":{
    "s":"A winding path leading off to the south",
    "n":"A Large doorway to the north"
  },
  "connectionDetails":{
    "type":"websocket",
    "target":"ws://127.0.0.1:9080/rooms/myRoom"
  }
}"##;

fn register_request() -> Request<BoxBody> {
  Request::builder()
    .method("POST")
    .uri(MAP_SERVICE)
    .header("content-type", "application/json;")
    .header("accept", "application/json,text/plain")
    .body(Full::new(Bytes::from_static(ROOM_REGISTRATION.as_bytes())).boxed())
    .unwrap()
}

fn delete_request(room_id: &str) -> Request<BoxBody> {
  Request::builder()
    .method("DELETE")
    .uri(format!("{MAP_SERVICE}/{room_id}"))
    .header("accept", "application/json,text/plain")
    .body(Empty::new().boxed())
    .unwrap()
}

fn print_headers<B>(req: &Request<B>) {
  println!("{} {}", req.method(), req.uri());
  for name in GameOnHeaderName::ALL {
    if let Some(value) = req.headers().get(name.as_str()) {
      println!("  {}: {}", name, value.to_str().unwrap_or_default());
    }
  }
}

/// Sender side: sign with the registered id and shared secret
async fn sender(req: Request<BoxBody>) -> Request<Full<Bytes>> {
  let signer = RequestSigner::try_new(
    message_component::Identity::try_from(GAMEON_ID).unwrap(),
    SharedSecret::from_utf8(GAMEON_SECRET).unwrap(),
    &SignerConfig::default(),
  )
  .unwrap();
  req.set_gameon_signature(&signer).await.unwrap()
}

/// Receiver side: the map service knows the same id and secret
async fn receiver<B>(req: Request<B>) -> HyperSigResult<Verified>
where
  B: http_body::Body + Send,
  B::Data: Send,
{
  let verifier = RequestVerifier::new(
    message_component::Identity::try_from(GAMEON_ID).unwrap(),
    SharedSecret::from_utf8(GAMEON_SECRET).unwrap(),
    &VerifierConfig::default(),
  );
  req.verify_gameon_signature(&verifier).await
}

#[tokio::main]
async fn main() {
  for req in [register_request(), delete_request("42")] {
    let signed = sender(req).await;
    print_headers(&signed);
    match receiver(signed).await {
      Ok(verified) => println!("  accepted for {} at {}", verified.identity, verified.timestamp),
      Err(e) => println!("  rejected: {e}"),
    }
  }
}
