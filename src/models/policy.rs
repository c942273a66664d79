use super::json_display;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProtectionPolicy {
    pub(crate) id: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) days_to_keep: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) extended_retention: Option<Vec<ExtendedRetentionPolicy>>,
}

/// Additional retention applied to a subset of a job's snapshots.
/// `backup_type` restricts the entry to one backup type; unset means all
/// non-log backup types.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExtendedRetentionPolicy {
    pub(crate) backup_type: Option<i32>,
    pub(crate) copy_partially_successful_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) granularity_bucket: Option<GranularityBucket>,
    pub(crate) id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) retention_policy: Option<RetentionPolicy>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GranularityBucket {
    pub(crate) granularity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) exact_dates_info: Option<GranularityBucketExactDatesInfo>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GranularityBucketExactDatesInfo {
    pub(crate) dates_vec: Option<Vec<DateTime<Utc>>>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RetentionPolicy {
    pub(crate) num_days_to_keep: Option<i64>,
    pub(crate) num_secs_to_keep: Option<i64>,
}

json_display!(
    ProtectionPolicy,
    ExtendedRetentionPolicy,
    GranularityBucket,
    GranularityBucketExactDatesInfo,
    RetentionPolicy,
);
