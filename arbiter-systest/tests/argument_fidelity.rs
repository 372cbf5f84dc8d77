//! Arguments must reach the child exactly as given: element-for-element,
//! order preserved, with no shell interpretation in between.

use std::time::Duration;

use arbiter_systest::{HarnessOptions, Result, SystestHarness};

#[tokio::test]
async fn argv_reaches_the_child_unsplit_and_ordered() -> Result<()> {
    let harness = SystestHarness::new(HarnessOptions::default()).await?;

    let dir = tempfile::tempdir()?;
    let out_file = dir.path().join("argv.txt");
    let out = out_file.to_str().expect("temp path is valid UTF-8");

    // Spaces, separators and a glob, all of which a shell would mangle.
    let arguments = [out, "one", "two words", "--flag=a b", "a;b&&c", "*"];
    let mut probe = harness.run_binary("arg-probe", &arguments)?;
    let status = probe
        .wait_timeout(Duration::from_secs(10))
        .await?
        .expect("arg-probe did not exit within 10s");
    assert_eq!(status.code(), Some(0));

    let recorded = std::fs::read_to_string(&out_file)?;
    let lines: Vec<&str> = recorded.lines().collect();
    assert_eq!(lines, ["one", "two words", "--flag=a b", "a;b&&c", "*"]);
    Ok(())
}
