use crate::models::kms::KmsStatusResponse;
use crate::session::Session;
use http::header;

// GET /public/kms/status
#[tracing::instrument(err, ret)]
pub(crate) async fn status(session: &Session) -> anyhow::Result<KmsStatusResponse> {
    session.assert_authentication()?;

    let href = session.url(["public", "kms", "status"])?;
    let builder = http::Request::get(href.as_ref()).header(header::ACCEPT, "application/json");
    let builder = session.authorization(builder)?;
    let request = builder.body(super::empty_body())?;
    let body = super::send(&session.client, request).await?;
    Ok(serde_json::from_slice(&body)?)
}
