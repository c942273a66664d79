use super::kms::KmsStatusResponse;
use super::policy::{
    ExtendedRetentionPolicy, GranularityBucket, GranularityBucketExactDatesInfo, ProtectionPolicy,
    RetentionPolicy,
};
use super::protection_jobs::{DeleteProtectionJobParam, ProtectionJob};
use chrono::{DateTime, Utc};

fn date(s: &str) -> anyhow::Result<DateTime<Utc>> {
    Ok(s.parse()?)
}

#[test]
fn test_round_trip() -> anyhow::Result<()> {
    let policy = ExtendedRetentionPolicy {
        backup_type: Some(1),
        copy_partially_successful_run: Some(false),
        granularity_bucket: Some(GranularityBucket {
            granularity: Some(2),
            exact_dates_info: Some(GranularityBucketExactDatesInfo {
                dates_vec: Some(vec![
                    date("2024-01-01T00:00:00Z")?,
                    date("2024-07-01T12:30:00Z")?,
                ]),
            }),
        }),
        id: Some("5bd3f9b7".to_owned()),
        retention_policy: Some(RetentionPolicy {
            num_days_to_keep: Some(90),
            num_secs_to_keep: None,
        }),
    };

    let json = serde_json::to_string(&policy)?;
    anyhow::ensure!(serde_json::from_str::<ExtendedRetentionPolicy>(&json)? == policy);

    Ok(())
}

#[test]
fn test_round_trip_empty() -> anyhow::Result<()> {
    let policy = ExtendedRetentionPolicy::default();
    let json = serde_json::to_string(&policy)?;
    anyhow::ensure!(serde_json::from_str::<ExtendedRetentionPolicy>(&json)? == policy);

    let job = ProtectionJob::default();
    let json = serde_json::to_string(&job)?;
    anyhow::ensure!(serde_json::from_str::<ProtectionJob>(&json)? == job);

    Ok(())
}

#[test]
fn test_absent_scalars_serialize_as_null() -> anyhow::Result<()> {
    let value = serde_json::to_value(KmsStatusResponse { status: None })?;
    anyhow::ensure!(value == serde_json::json!({ "status": null }));

    Ok(())
}

#[test]
fn test_absent_nested_objects_are_omitted() -> anyhow::Result<()> {
    let value = serde_json::to_value(ExtendedRetentionPolicy::default())?;
    anyhow::ensure!(
        value
            == serde_json::json!({
                "backupType": null,
                "copyPartiallySuccessfulRun": null,
                "id": null,
            }),
    );

    let value = serde_json::to_value(GranularityBucket::default())?;
    anyhow::ensure!(value == serde_json::json!({ "granularity": null }));

    Ok(())
}

#[test]
fn test_delete_param_wire_name() -> anyhow::Result<()> {
    let value = serde_json::to_value(DeleteProtectionJobParam {
        delete_snapshots: Some(true),
    })?;
    anyhow::ensure!(value == serde_json::json!({ "DeleteSnapshots": true }));

    Ok(())
}

#[test]
fn test_equality() -> anyhow::Result<()> {
    anyhow::ensure!(KmsStatusResponse { status: None } == KmsStatusResponse { status: None });
    anyhow::ensure!(KmsStatusResponse { status: Some(true) } != KmsStatusResponse { status: None });
    anyhow::ensure!(
        KmsStatusResponse { status: Some(true) } != KmsStatusResponse { status: Some(false) },
    );

    let a = ProtectionJob {
        id: Some(1234),
        name: Some("vm-backup".to_owned()),
        ..Default::default()
    };
    let b = serde_json::from_str::<ProtectionJob>(r#"{"id":1234,"name":"vm-backup"}"#)?;
    anyhow::ensure!(a == b);

    Ok(())
}

#[test]
fn test_display_is_json() -> anyhow::Result<()> {
    let response = KmsStatusResponse { status: Some(true) };
    anyhow::ensure!(response.to_string() == serde_json::to_string_pretty(&response)?);
    anyhow::ensure!(response.to_string() == "{\n  \"status\": true\n}");

    let policy = ProtectionPolicy {
        id: Some("7418348961110".to_owned()),
        ..Default::default()
    };
    anyhow::ensure!(policy.to_string() == serde_json::to_string_pretty(&policy)?);

    Ok(())
}

#[test]
fn test_unknown_response_fields_are_ignored() -> anyhow::Result<()> {
    let job = serde_json::from_str::<ProtectionJob>(
        r#"{"id":1234,"name":"vm-backup","uid":{"clusterId":93},"sourceIds":[5,7]}"#,
    )?;
    anyhow::ensure!(job.id == Some(1234));
    anyhow::ensure!(job.name.as_deref() == Some("vm-backup"));

    Ok(())
}

#[test]
fn test_dates_vec_round_trip() -> anyhow::Result<()> {
    let info = GranularityBucketExactDatesInfo {
        dates_vec: Some(vec![date("2024-02-29T23:59:59Z")?]),
    };
    let json = serde_json::to_string(&info)?;
    anyhow::ensure!(serde_json::from_str::<GranularityBucketExactDatesInfo>(&json)? == info);

    let info = GranularityBucketExactDatesInfo { dates_vec: None };
    anyhow::ensure!(serde_json::to_value(&info)? == serde_json::json!({ "datesVec": null }));

    Ok(())
}
