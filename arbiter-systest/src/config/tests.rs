use super::*;

#[test]
fn binaries_dir_follows_the_build_mode() {
    let debug = HarnessConfig::resolve(HarnessOptions::default());
    assert!(debug.binaries_dir.ends_with("target/debug"));

    let release = HarnessConfig::resolve(HarnessOptions {
        build_mode: BuildMode::Release,
        ..Default::default()
    });
    assert!(release.binaries_dir.ends_with("target/release"));
}

#[test]
fn project_root_is_the_workspace_root() {
    let config = HarnessConfig::resolve(HarnessOptions::default());
    assert!(
        config.project_root.join("arbiter-systest").is_dir(),
        "resolved root {} does not contain the harness crate",
        config.project_root.display()
    );
    assert!(config.project_root.is_absolute());
}

#[cfg(windows)]
#[test]
fn executable_suffix_matches_the_platform() {
    let config = HarnessConfig::resolve(HarnessOptions::default());
    assert_eq!(config.exe_suffix, ".exe");
}

#[cfg(not(windows))]
#[test]
fn executable_suffix_matches_the_platform() {
    let config = HarnessConfig::resolve(HarnessOptions::default());
    assert_eq!(config.exe_suffix, "");
}
