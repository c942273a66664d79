
use crate::misc;
use headers::HeaderMapExt;
use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::fmt;
use std::io;
use tokio::fs;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} is not set")]
    MissingVar(&'static str),
    #[error("not authenticated (set BACKUPCTL_API_TOKEN or BACKUPCTL_API_TOKEN_PATH)")]
    Unauthenticated,
}

pub struct Session {
    pub client: misc::Client,
    pub base_uri: Url,
    token: Option<SecretString>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_uri", &self.base_uri)
            .finish()
    }
}

impl Session {
    pub fn new(base_uri: Url, token: Option<SecretString>) -> Result<Self, io::Error> {
        Ok(Self {
            client: misc::client()?,
            base_uri,
            token,
        })
    }

    #[tracing::instrument(err, ret)]
    pub async fn from_env() -> anyhow::Result<Self> {
        let base_uri = env::var("BACKUPCTL_CLUSTER_URI")
            .map_err(|_| Error::MissingVar("BACKUPCTL_CLUSTER_URI"))?
            .parse()?;
        let token = if let Ok(token) = env::var("BACKUPCTL_API_TOKEN") {
            Some(SecretString::from(token))
        } else if let Ok(path) = env::var("BACKUPCTL_API_TOKEN_PATH") {
            Some(SecretString::from(
                fs::read_to_string(path).await?.trim().to_owned(),
            ))
        } else {
            None
        };
        Ok(Self::new(base_uri, token)?)
    }

    pub fn assert_authentication(&self) -> Result<(), Error> {
        if self.token.is_some() {
            Ok(())
        } else {
            Err(Error::Unauthenticated)
        }
    }

    pub fn url<I>(&self, segments: I) -> anyhow::Result<Url>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_uri.clone();
        misc::path_segments_mut(&mut url)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn authorization(
        &self,
        mut builder: http::request::Builder,
    ) -> anyhow::Result<http::request::Builder> {
        let token = self.token.as_ref().ok_or(Error::Unauthenticated)?;
        if let Some(headers) = builder.headers_mut() {
            headers.typed_insert(headers::Authorization::bearer(token.expose_secret())?);
        }
        Ok(builder)
    }
}
