use crate::models::protection_jobs::{
    ChangeProtectionJobStateParam, DeleteProtectionJobParam, ProtectionJob, RunProtectionJobParam,
};
use crate::session::Session;
use http::header;

// GET /public/protectionJobs
#[tracing::instrument(err, ret)]
pub(crate) async fn list(
    session: &Session,
    names: &[String],
) -> anyhow::Result<Vec<ProtectionJob>> {
    session.assert_authentication()?;

    let mut href = session.url(["public", "protectionJobs"])?;
    if !names.is_empty() {
        href.query_pairs_mut().append_pair("names", &names.join(","));
    }
    let builder = http::Request::get(href.as_ref()).header(header::ACCEPT, "application/json");
    let builder = session.authorization(builder)?;
    let request = builder.body(super::empty_body())?;
    let body = super::send(&session.client, request).await?;
    Ok(serde_json::from_slice(&body)?)
}

// GET /public/protectionJobs/{id}
#[tracing::instrument(err, ret)]
pub(crate) async fn get(session: &Session, id: i64) -> anyhow::Result<ProtectionJob> {
    session.assert_authentication()?;
    anyhow::ensure!(id > 0, "id must be greater than zero");

    let href = session.url(["public", "protectionJobs", &id.to_string()])?;
    let builder = http::Request::get(href.as_ref()).header(header::ACCEPT, "application/json");
    let builder = session.authorization(builder)?;
    let request = builder.body(super::empty_body())?;
    let body = super::send(&session.client, request).await?;
    Ok(serde_json::from_slice(&body)?)
}

// DELETE /public/protectionJobs/{id}
#[tracing::instrument(err, ret)]
pub(crate) async fn delete(
    session: &Session,
    id: i64,
    request: &DeleteProtectionJobParam,
) -> anyhow::Result<()> {
    session.assert_authentication()?;
    anyhow::ensure!(id > 0, "id must be greater than zero");

    let href = session.url(["public", "protectionJobs", &id.to_string()])?;
    let builder = http::Request::delete(href.as_ref())
        .header(header::ACCEPT, "application/json")
        .header(header::CONTENT_TYPE, "application/json");
    let builder = session.authorization(builder)?;
    let request = builder.body(super::json_body(request)?)?;
    super::send(&session.client, request).await?;
    Ok(())
}

// POST /public/protectionJobs/run/{id}
#[tracing::instrument(err, ret)]
pub(crate) async fn run(
    session: &Session,
    id: i64,
    request: &RunProtectionJobParam,
) -> anyhow::Result<()> {
    session.assert_authentication()?;
    anyhow::ensure!(id > 0, "id must be greater than zero");

    let href = session.url(["public", "protectionJobs", "run", &id.to_string()])?;
    let builder = http::Request::post(href.as_ref())
        .header(header::ACCEPT, "application/json")
        .header(header::CONTENT_TYPE, "application/json");
    let builder = session.authorization(builder)?;
    let request = builder.body(super::json_body(request)?)?;
    super::send(&session.client, request).await?;
    Ok(())
}

// POST /public/protectionJobState/{id}
#[tracing::instrument(err, ret)]
pub(crate) async fn change_state(
    session: &Session,
    id: i64,
    request: &ChangeProtectionJobStateParam,
) -> anyhow::Result<()> {
    session.assert_authentication()?;
    anyhow::ensure!(id > 0, "id must be greater than zero");

    let href = session.url(["public", "protectionJobState", &id.to_string()])?;
    let builder = http::Request::post(href.as_ref())
        .header(header::ACCEPT, "application/json")
        .header(header::CONTENT_TYPE, "application/json");
    let builder = session.authorization(builder)?;
    let request = builder.body(super::json_body(request)?)?;
    super::send(&session.client, request).await?;
    Ok(())
}
