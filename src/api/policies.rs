use crate::models::policy::ProtectionPolicy;
use crate::session::Session;
use http::header;

// GET /public/protectionPolicies
#[tracing::instrument(err, ret)]
pub(crate) async fn list(
    session: &Session,
    names: &[String],
) -> anyhow::Result<Vec<ProtectionPolicy>> {
    session.assert_authentication()?;

    let mut href = session.url(["public", "protectionPolicies"])?;
    if !names.is_empty() {
        href.query_pairs_mut().append_pair("names", &names.join(","));
    }
    let builder = http::Request::get(href.as_ref()).header(header::ACCEPT, "application/json");
    let builder = session.authorization(builder)?;
    let request = builder.body(super::empty_body())?;
    let body = super::send(&session.client, request).await?;
    Ok(serde_json::from_slice(&body)?)
}

// GET /public/protectionPolicies/{id}
#[tracing::instrument(err, ret)]
pub(crate) async fn get(session: &Session, id: &str) -> anyhow::Result<ProtectionPolicy> {
    session.assert_authentication()?;
    anyhow::ensure!(!id.is_empty(), "id must not be empty");

    let href = session.url(["public", "protectionPolicies", id])?;
    let builder = http::Request::get(href.as_ref()).header(header::ACCEPT, "application/json");
    let builder = session.authorization(builder)?;
    let request = builder.body(super::empty_body())?;
    let body = super::send(&session.client, request).await?;
    Ok(serde_json::from_slice(&body)?)
}
