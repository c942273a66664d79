use super::json_display;
use serde::{Deserialize, Serialize};

/// Whether the cluster can reach its key management service.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub(crate) struct KmsStatusResponse {
    pub(crate) status: Option<bool>,
}

json_display!(KmsStatusResponse);
