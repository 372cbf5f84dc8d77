//! Launch-failure handling: missing binaries and cleanup on failure paths.

use std::path::Path;

use arbiter_systest::{HarnessOptions, Result, SystestError, SystestHarness};

fn rules_fixture() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/admission_rules.json")
        .to_str()
        .expect("fixture path is valid UTF-8")
        .to_string()
}

#[tokio::test]
async fn missing_binary_is_reported_without_spawning() -> Result<()> {
    let harness = SystestHarness::new(HarnessOptions::default()).await?;

    let err = harness.run_binary("no-such-binary", &[]).unwrap_err();
    match err {
        SystestError::BinaryNotFound { name, dir } => {
            assert!(name.starts_with("no-such-binary"));
            assert_eq!(dir.as_path(), harness.binaries_dir());
        }
        other => panic!("expected BinaryNotFound, got {other}"),
    }
    Ok(())
}

/// A failed launch must not strand processes started earlier in the same
/// scenario: the first process is unaffected by the error and still gets
/// reaped before the test finishes.
#[tokio::test]
async fn earlier_process_is_torn_down_when_a_launch_fails() -> Result<()> {
    let harness = SystestHarness::new(HarnessOptions::default()).await?;

    // Off-default port so this server cannot collide with the admission
    // scenario's arbiter.
    let mut arbiter =
        harness.run_binary("arbiter-server", &["--port", "9071", "--rules", &rules_fixture()])?;

    let launch = harness.run_binary("missing-peer", &[]);
    assert!(matches!(launch, Err(SystestError::BinaryNotFound { .. })));

    // The failed launch spawned nothing and left the running server alone.
    assert!(
        arbiter.try_status()?.is_none(),
        "arbiter server should still be running after the failed launch"
    );
    arbiter.terminate().await?;
    Ok(())
}
