use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;

fn lockwatch() -> Command {
    let mut cmd = cargo_bin_cmd!("lockwatch");
    cmd.env_remove("RUST_LOG").env_remove("LOCKWATCH_LOG_FORMAT");
    cmd
}

/// Run to completion, assert success, and return (stdout, stderr).
fn run_ok(cmd: &mut Command) -> (String, String) {
    let output = cmd.output().expect("run lockwatch");
    assert!(output.status.success(), "command failed: {output:?}");
    (
        String::from_utf8(output.stdout).expect("utf-8 stdout"),
        String::from_utf8(output.stderr).expect("utf-8 stderr"),
    )
}

#[test]
fn default_run_prints_demo_results() {
    let (stdout, _) = run_ok(&mut lockwatch());
    assert_eq!(stdout, "Car: Not secured\nHouse: Not secured\n");
}

#[test]
fn fully_locked_house_is_secured() {
    let mut cmd = lockwatch();
    cmd.args(["house", "--doors", "true,true", "--windows", "true,true"]);
    let (stdout, _) = run_ok(&mut cmd);
    assert_eq!(stdout, "House: Secured\n");
}

#[test]
fn explicit_empty_doors_value_is_accepted() {
    let mut cmd = lockwatch();
    cmd.args(["car", "--doors="]);
    let (stdout, _) = run_ok(&mut cmd);
    assert_eq!(stdout, "Car: Secured\n");
}

#[test]
fn json_logs_go_to_stderr_only() {
    let mut cmd = lockwatch();
    cmd.env("RUST_LOG", "debug")
        .env("LOCKWATCH_LOG_FORMAT", "json")
        .args(["car", "--doors", "locked"]);
    let (stdout, stderr) = run_ok(&mut cmd);
    assert_eq!(stdout, "Car: Secured\n");
    assert!(!stderr.is_empty(), "expected debug logs on stderr");
    assert!(stderr.contains("security check"));
}

#[test]
fn unknown_log_format_warns_and_falls_back_to_text() {
    let mut cmd = lockwatch();
    cmd.env("RUST_LOG", "warn")
        .env("LOCKWATCH_LOG_FORMAT", "yaml")
        .args(["car", "--doors", "locked"]);
    let (stdout, stderr) = run_ok(&mut cmd);
    assert_eq!(stdout, "Car: Secured\n");
    assert!(stderr.contains("falling back to text logs"), "stderr: {stderr}");
    assert!(stderr.contains("yaml"), "stderr: {stderr}");
}

#[test]
fn unknown_lock_state_fails() {
    let output = lockwatch()
        .args(["car", "--doors", "ajar"])
        .output()
        .expect("run lockwatch");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ajar"));
}
