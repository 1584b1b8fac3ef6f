//! Wire-contract tests for the serialized action shape.

use std::error::Error;
use std::io::Write;

use serde_json::json;
use tessella_actions::{ActionError, BatchAction, CopyManifestEntry, load_manifest};

#[test]
fn copy_action_serializes_to_the_executor_contract() -> Result<(), Box<dyn Error>> {
    let action = BatchAction::copy(vec![CopyManifestEntry::new(
        "s3://bucket/a.tif",
        "s3://bucket/b.tif",
    )]);

    let value = serde_json::to_value(&action)?;
    assert_eq!(
        value,
        json!({
            "action": "copy",
            "parameters": {
                "manifest": [
                    {"source": "s3://bucket/a.tif", "target": "s3://bucket/b.tif"}
                ]
            }
        })
    );
    Ok(())
}

#[test]
fn copy_action_round_trips_through_json() -> Result<(), Box<dyn Error>> {
    let action = BatchAction::copy(vec![
        CopyManifestEntry::new("/staging/a.tif", "s3://bucket/a.tif"),
        CopyManifestEntry::new("/staging/b.tif", "s3://bucket/b.tif"),
    ]);

    let encoded = serde_json::to_string(&action)?;
    let decoded: BatchAction = serde_json::from_str(&encoded)?;
    assert_eq!(decoded, action);
    Ok(())
}

#[test]
fn empty_manifest_serializes_to_an_empty_array() -> Result<(), Box<dyn Error>> {
    let value = serde_json::to_value(BatchAction::copy(Vec::new()))?;
    assert_eq!(
        value,
        json!({"action": "copy", "parameters": {"manifest": []}})
    );
    Ok(())
}

#[test]
fn manifest_files_load_in_order() -> Result<(), Box<dyn Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"[
            {{"source": "s3://bucket/a.tif", "target": "/local/a.tif"}},
            {{"source": "s3://bucket/b.tif", "target": "/local/b.tif"}}
        ]"#
    )?;

    let entries = load_manifest(file.path())?;
    assert_eq!(
        entries,
        [
            CopyManifestEntry::new("s3://bucket/a.tif", "/local/a.tif"),
            CopyManifestEntry::new("s3://bucket/b.tif", "/local/b.tif"),
        ]
    );
    Ok(())
}

#[test]
fn missing_manifest_files_surface_as_io_errors() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let err = load_manifest(&dir.path().join("missing.json")).expect_err("expected io failure");
    assert!(matches!(
        err,
        ActionError::Io {
            operation: "read_manifest",
            ..
        }
    ));
    Ok(())
}

#[test]
fn malformed_manifest_files_surface_as_json_errors() -> Result<(), Box<dyn Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "{{not json")?;
    let err = load_manifest(file.path()).expect_err("expected json failure");
    assert!(matches!(
        err,
        ActionError::Json {
            operation: "parse_manifest",
            ..
        }
    ));
    Ok(())
}
