use crate::common::TempRepo;

#[test]
fn dryrun_mutates_nothing() {
    let repo = TempRepo::new();

    repo.create_file("pending.txt", "content");

    let (code, _, _) = repo.gacp(&["--dryrun", "-t", "chore", "-s", "deps", "-d", "bump version"]);

    assert_eq!(code, 0);
    assert_eq!(repo.commit_count(), 1);
    assert!(repo.has_untracked_files());
    assert!(!repo.has_staged_changes());
}

#[test]
fn dryrun_lists_all_three_steps() {
    let repo = TempRepo::new();

    let (code, stdout, _) =
        repo.gacp(&["--dryrun", "-t", "chore", "-s", "deps", "-d", "bump version"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("git add ."));
    assert!(stdout.contains("git commit -m \"chore(deps): bump version\""));
    assert!(stdout.contains("git push origin HEAD"));
}

#[test]
fn dryrun_does_not_echo_the_commit_message_line() {
    let repo = TempRepo::new();

    let (_, stdout, _) = repo.gacp(&["--dryrun", "-t", "feat", "-s", "x", "-d", "y"]);

    assert!(!stdout.contains("Commit message:"));
}

#[test]
fn dryrun_respects_noadd() {
    let repo = TempRepo::new();

    let (_, stdout, _) = repo.gacp(&["--dryrun", "--noadd", "-t", "fix", "-s", "x", "-d", "y"]);

    assert!(!stdout.contains("git add"));
    assert!(stdout.contains("git commit"));
    assert!(stdout.contains("git push origin HEAD"));
}

#[test]
fn dryrun_respects_nopush() {
    let repo = TempRepo::new();

    let (_, stdout, _) = repo.gacp(&["--dryrun", "--nopush", "-t", "fix", "-s", "x", "-d", "y"]);

    assert!(stdout.contains("git add ."));
    assert!(stdout.contains("git commit"));
    assert!(!stdout.contains("git push"));
}

#[test]
fn dryrun_works_outside_a_repository() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_gacp"))
        .args(["--dryrun", "-t", "feat", "-s", "core", "-d", "add login"])
        .current_dir(dir.path())
        .output()
        .expect("Failed to run gacp");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("git commit -m \"feat(core): add login\""));
}
