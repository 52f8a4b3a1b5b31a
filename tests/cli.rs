use assert_cmd::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;

const ICON: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<vector xmlns:android="http://schemas.android.com/apk/res/android"
    android:width="24dp"
    android:height="24dp"
    android:viewportWidth="24"
    android:viewportHeight="24">
    <group android:name="badge" android:pivotX="12" android:pivotY="12" android:rotation="45">
        <clip-path android:pathData="M0,0 h24 v24 h-24 z"/>
        <path
            android:fillColor="#FF4CAF50"
            android:pathData="M9,16.17L4.83,12
                              l-1.42,1.41L9,19 21,7l-1.41,-1.41z"/>
    </group>
</vector>
"##;

const EXPECTED: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
  <g id="badge" transform="translate(0 0) rotate(45 12 12) scale(1 1)" clip-path="url(#clipPath0)">
    <path d="M9,16.17L4.83,12 l-1.42,1.41L9,19 21,7l-1.41,-1.41z" fill="#FF4CAF50"/>
  </g>
  <defs>
    <clipPath id="clipPath0">
      <path d="M0,0 h24 v24 h-24 z"/>
    </clipPath>
  </defs>
</svg>
"##;

fn vd2svg(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vd2svg"));
    cmd.current_dir(dir).args(["--color", "never"]);
    cmd
}

#[test]
fn cli_converts_with_derived_output_path() {
    let tmp = tempfile::tempdir().expect("tempdir");
    fs::write(tmp.path().join("ic_check.xml"), ICON).expect("write input");

    vd2svg(tmp.path()).arg("ic_check.xml").assert().success();

    let svg = fs::read_to_string(tmp.path().join("ic_check.svg")).expect("read svg");
    assert_eq!(svg, EXPECTED);
}

#[test]
fn cli_respects_explicit_output_and_indent() {
    let tmp = tempfile::tempdir().expect("tempdir");
    fs::write(tmp.path().join("icon.xml"), ICON).expect("write input");

    vd2svg(tmp.path())
        .args(["icon.xml", "-o", "out.svg", "--indent", "0"])
        .assert()
        .success();

    let svg = fs::read_to_string(tmp.path().join("out.svg")).expect("read svg");
    assert!(!svg.contains('\n'));
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(!tmp.path().join("icon.svg").exists());
}

#[test]
fn cli_reads_config_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    fs::write(tmp.path().join("icon.xml"), ICON).expect("write input");
    fs::write(tmp.path().join("vd2svg.toml"), "[output]\nindent = 4\n").expect("write config");

    vd2svg(tmp.path()).arg("icon.xml").assert().success();

    let svg = fs::read_to_string(tmp.path().join("icon.svg")).expect("read svg");
    assert!(svg.contains("\n    <g id=\"badge\""));
}

#[test]
fn cli_reports_missing_path_data() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let broken = ICON.replace("android:pathData=\"M9", "android:data=\"M9");
    fs::write(tmp.path().join("broken.xml"), broken).expect("write input");

    let output = vd2svg(tmp.path())
        .arg("broken.xml")
        .assert()
        .failure()
        .get_output()
        .clone();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed"), "stderr: {stderr}");
    assert!(stderr.contains("pathData"), "stderr: {stderr}");
    assert!(!tmp.path().join("broken.svg").exists());
}

#[test]
fn cli_reports_missing_input() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let output = vd2svg(tmp.path())
        .arg("missing.xml")
        .assert()
        .failure()
        .get_output()
        .clone();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.xml"), "stderr: {stderr}");
}
