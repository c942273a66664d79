use super::json_display;
use serde::{Deserialize, Serialize};

/// A protection job as reported by the cluster. Absent fields stay `None`;
/// unknown response fields are ignored.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProtectionJob {
    pub(crate) id: Option<i64>,
    pub(crate) name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) environment: Option<String>,
    pub(crate) policy_id: Option<String>,
    pub(crate) is_paused: Option<bool>,
    pub(crate) is_deleted: Option<bool>,
    pub(crate) creation_time_usecs: Option<i64>,
    pub(crate) last_run_time_usecs: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub(crate) struct DeleteProtectionJobParam {
    #[serde(rename = "DeleteSnapshots")]
    pub(crate) delete_snapshots: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RunProtectionJobParam {
    pub(crate) run_type: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub(crate) struct ChangeProtectionJobStateParam {
    pub(crate) pause: Option<bool>,
}

json_display!(
    ProtectionJob,
    DeleteProtectionJobParam,
    RunProtectionJobParam,
    ChangeProtectionJobStateParam,
);
