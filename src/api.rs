pub(crate) mod kms;
pub(crate) mod policies;
pub(crate) mod protection_jobs;

use crate::misc;
use bytes::Bytes;
use http::StatusCode;
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Empty, Full};
use serde::{Deserialize, Serialize};
use std::error;

#[derive(Clone, Debug, thiserror::Error)]
#[error("[{code:?}] {message}")]
pub(crate) struct Error {
    pub(crate) code: StatusCode,
    pub(crate) message: String,
}

impl Error {
    fn from_response(code: StatusCode, body: &Bytes) -> Self {
        #[derive(Deserialize)]
        struct B {
            message: String,
        }

        let message = if let Ok(B { message }) = serde_json::from_slice(body) {
            message
        } else {
            format!("{body:?}")
        };
        Self { code, message }
    }
}

pub(crate) type Body = UnsyncBoxBody<Bytes, Box<dyn error::Error + Send + Sync>>;

pub(crate) fn json_body<T>(value: &T) -> anyhow::Result<Body>
where
    T: Serialize,
{
    Ok(Full::from(serde_json::to_vec(value)?)
        .map_err(Box::from)
        .boxed_unsync())
}

pub(crate) fn empty_body() -> Body {
    Empty::new().map_err(Box::from).boxed_unsync()
}

pub(crate) async fn send(
    client: &misc::Client,
    request: http::Request<Body>,
) -> anyhow::Result<Bytes> {
    let response = client.request(request).await?;
    let (parts, body) = response.into_parts();
    let body = body.collect().await?.to_bytes();
    if parts.status.is_success() {
        Ok(body)
    } else {
        Err(Error::from_response(parts.status, &body).into())
    }
}
