// tests/integration/listing.rs
use crate::common::{TempWorkspace, block_names, myls_in};
use predicates::prelude::*;
use std::os::unix::fs::PermissionsExt;
use std::{fs, os::unix::net::UnixListener};

fn stdout_of(workspace: &TempWorkspace, args: &[&str]) -> String {
    let output = myls_in(workspace.path()).args(args).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("utf-8 output")
}

#[test]
fn empty_directory_prints_nothing() {
    let workspace = TempWorkspace::new("empty");
    myls_in(workspace.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn one_block_per_entry() {
    let workspace = TempWorkspace::new("all");
    workspace.create_file("a.txt", "alpha");
    workspace.create_file(".hidden", "");
    workspace.create_dir("docs");
    workspace.create_file("docs/nested.md", "not listed");

    let stdout = stdout_of(&workspace, &[]);
    let mut names = block_names(&stdout);
    names.sort();
    assert_eq!(names, [".hidden", "a.txt", "docs"]);
    assert_eq!(stdout.matches("\n\n").count(), 3);
    assert!(!stdout.contains("nested.md"));
}

#[test]
fn block_order_matches_directory_stream() {
    let workspace = TempWorkspace::new("order");
    for name in ["one", "two", "three", "four"] {
        workspace.create_file(name, name);
    }

    let expected: Vec<String> = fs::read_dir(workspace.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(block_names(&stdout_of(&workspace, &[])), expected);
}

#[test]
fn block_has_every_field_in_order() {
    let workspace = TempWorkspace::new("fields");
    let file = workspace.create_file("data.bin", "0123456789");
    fs::set_permissions(&file, fs::Permissions::from_mode(0o640)).unwrap();

    let stdout = stdout_of(&workspace, &[]);
    let labels: Vec<&str> = stdout
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| l.split(": ").next().unwrap())
        .collect();
    assert_eq!(
        labels,
        [
            "File name",
            "User name of the owner owner",
            "Group name of the group owner",
            "Type of file",
            "Full access permissions",
            "Size of file",
            "I-node number",
            "Major device number",
            "Minor device number",
            "Number of links",
            "Last access time",
            "Last modification time",
            "Last time file status changed",
        ]
    );
    assert!(stdout.contains("Full access permissions: \trw-r-----\n"));
    assert!(stdout.contains("Size of file: \t\t\t10 bytes\n"));

    let ino = std::os::unix::fs::MetadataExt::ino(&fs::metadata(&file).unwrap());
    assert!(stdout.contains(&format!("I-node number: \t\t\t{ino}\n")));
}

#[test]
fn timestamps_use_month_day_time() {
    let workspace = TempWorkspace::new("time");
    workspace.create_file("t", "");

    let stdout = stdout_of(&workspace, &[]);
    let stamp = stdout
        .lines()
        .find_map(|l| l.strip_prefix("Last modification time: \t"))
        .unwrap();
    let re = predicate::str::is_match(r"^[A-Z][a-z]{2} \d{2} \d{2}:\d{2}$").unwrap();
    assert!(re.eval(stamp), "unexpected timestamp {stamp:?}");
}

#[test]
fn symlinks_and_sockets_are_classified() {
    let workspace = TempWorkspace::new("types");
    workspace.create_symlink("does-not-exist", "dangling");
    let _listener = UnixListener::bind(workspace.path().join("sock")).unwrap();

    let stdout = stdout_of(&workspace, &[]);
    assert_eq!(block_names(&stdout).len(), 2);
    assert!(stdout.contains("Type of file: \t\t\tsymbolic link\n"));
    assert!(stdout.contains("Type of file: \t\t\tsocket\n"));
}

#[test]
fn unreadable_directory_exits_with_message() {
    // root bypasses directory permissions
    if unsafe { libc::geteuid() } == 0 {
        return;
    }
    let workspace = TempWorkspace::new("locked");
    let locked = workspace.create_dir("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o300)).unwrap();

    let assert = myls_in(&locked).arg("anything").assert();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    assert
        .code(1)
        .stdout("Unable to open current directory\n\n");
}

#[test]
fn debug_logging_goes_to_stderr_only() {
    let workspace = TempWorkspace::new("log");
    workspace.create_file("x", "");

    let quiet = stdout_of(&workspace, &[]);
    myls_in(workspace.path())
        .env("MYLS_LOG", "debug")
        .assert()
        .success()
        .stdout(quiet)
        .stderr(predicate::str::contains("[myls:debug]"));
}
